// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Represents flags that aid in implementation but aren't a part of the Chip-8 itself

use super::{Mode, Quirks};

/// Represents flags that aid in operation, but aren't inherent to the CPU
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Flags {
    /// Set to the key held down during an `Fx0A` keypause, until it's released
    pub heldkey: Option<u8>,
    /// Represents the current emulator [Mode]
    pub mode: Mode,
    /// Represents the set of emulator [Quirks] to enable, derived from the [Mode]
    pub quirks: Quirks,
}

impl Flags {
    /// Constructs flags for the given [Mode], with its [Quirks]
    ///
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let flags = Flags::new(Mode::SChip);
    /// assert!(flags.quirks.dma_inc);
    /// assert!(!Flags::new(Mode::Chip8).quirks.shift);
    /// ```
    pub fn new(mode: Mode) -> Self {
        Flags {
            heldkey: None,
            mode,
            quirks: mode.into(),
        }
    }
}
