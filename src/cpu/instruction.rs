// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Splits a Chip-8 opcode into its operand fields

use std::fmt::{Display, Formatter, Result};

/// One fetched opcode, and every field that can be read out of it
///
/// |field| bits     | meaning                       |
/// |-----|----------|-------------------------------|
/// |`nnn`|`_nnn`    | 12-bit address/constant       |
/// |`nn` |`__nn`    | 8-bit constant                |
/// |`n`  |`___n`    | 4-bit constant                |
/// |`x`  |`_x__`    | 4-bit register identifier     |
/// |`y`  |`__y_`    | 4-bit register identifier     |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The raw 16-bit opcode
    pub opcode: u16,
    /// Low 12 bits
    pub nnn: u16,
    /// Low 8 bits
    pub nn: u8,
    /// Low 4 bits
    pub n: u8,
    /// Bits 8..12
    pub x: usize,
    /// Bits 4..8
    pub y: usize,
}

impl Instruction {
    /// Decodes an opcode by masking and shifting
    /// # Examples
    /// ```rust
    /// # use quirk8::prelude::*;
    /// let insn = Instruction::decode(0xd12f);
    /// assert_eq!(0xd, insn.kind());
    /// assert_eq!((1, 2, 0xf), (insn.x, insn.y, insn.n));
    /// assert_eq!(0x12f, insn.nnn);
    /// assert_eq!(0x2f, insn.nn);
    /// ```
    pub fn decode(opcode: u16) -> Self {
        Instruction {
            opcode,
            nnn: opcode & 0x0fff,
            nn: (opcode & 0x00ff) as u8,
            n: (opcode & 0x000f) as u8,
            x: (opcode >> 8 & 0xf) as usize,
            y: (opcode >> 4 & 0xf) as usize,
        }
    }

    /// The high nibble, which selects the instruction family
    pub fn kind(&self) -> u8 {
        (self.opcode >> 12) as u8
    }
}

impl From<u16> for Instruction {
    fn from(value: u16) -> Self {
        Self::decode(value)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:04x}", self.opcode)
    }
}
