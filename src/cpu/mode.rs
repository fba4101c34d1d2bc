// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Selects the instruction-set variant the [super::CPU] emulates

use crate::error::Error;
use std::{fmt::Display, str::FromStr};

/// Selects the instruction-set variant of the interpreter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// VIP emulation mode
    #[default]
    Chip8,
    /// Super-Chip emulation mode
    SChip,
    /// XO-Chip emulation mode
    XOChip,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chip8" | "chip-8" => Ok(Mode::Chip8),
            "schip" | "superchip" | "super-chip" => Ok(Mode::SChip),
            "xo-chip" | "xochip" => Ok(Mode::XOChip),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::Chip8 => "Chip-8",
            Mode::SChip => "Super-Chip",
            Mode::XOChip => "XO-Chip",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!(Mode::Chip8, "CHIP-8".parse().unwrap());
        assert_eq!(Mode::SChip, "SuperChip".parse().unwrap());
        assert_eq!(Mode::XOChip, "xochip".parse().unwrap());
        assert!(matches!(
            "chip9".parse::<Mode>(),
            Err(Error::InvalidMode { mode }) if mode == "chip9"
        ));
    }
}
