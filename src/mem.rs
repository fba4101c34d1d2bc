// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The Chip-8's flat 4KiB address space
//!
//! | range         | contents                 |
//! |---------------|--------------------------|
//! |`0x000..0x050` | Hex font, 5 bytes/glyph  |
//! |`0x050..0x200` | Reserved                 |
//! |`0x200..0x1000`| Program, then scratch    |

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Size of the address space, in bytes
pub const RAM_SIZE: usize = 0x1000;
/// Where programs are loaded, and where execution begins
pub const ENTRY_POINT: u16 = 0x200;
/// Where the hex font is loaded
pub const FONT_ADDR: u16 = 0x000;
/// Height (and stride) of one font glyph
pub const GLYPH_SIZE: u16 = 5;
/// Only the low 12 bits of an address select a cell
const ADDR_MASK: u16 = 0x0fff;

/// The 16 hex digits, 4x5 pixels each
#[rustfmt::skip]
pub const FONT: [u8; 16 * GLYPH_SIZE as usize] = [
    0xf0, 0x90, 0x90, 0x90, 0xf0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xf0, 0x10, 0xf0, 0x80, 0xf0, // 2
    0xf0, 0x10, 0xf0, 0x10, 0xf0, // 3
    0x90, 0x90, 0xf0, 0x10, 0x10, // 4
    0xf0, 0x80, 0xf0, 0x10, 0xf0, // 5
    0xf0, 0x80, 0xf0, 0x90, 0xf0, // 6
    0xf0, 0x10, 0x20, 0x40, 0x40, // 7
    0xf0, 0x90, 0xf0, 0x90, 0xf0, // 8
    0xf0, 0x90, 0xf0, 0x10, 0xf0, // 9
    0xf0, 0x90, 0xf0, 0x90, 0x90, // A
    0xe0, 0x90, 0xe0, 0x90, 0xe0, // B
    0xf0, 0x80, 0x80, 0x80, 0xf0, // C
    0xe0, 0x90, 0x90, 0x90, 0xe0, // D
    0xf0, 0x80, 0xf0, 0x80, 0xf0, // E
    0xf0, 0x80, 0xf0, 0x80, 0x80, // F
];

/// Represents the Chip-8's RAM
#[derive(Clone, PartialEq, Eq)]
pub struct Mem {
    ram: [u8; RAM_SIZE],
}

impl Mem {
    /// Constructs zeroed memory with the font loaded
    ///
    /// # Examples
    /// ```rust
    /// # use quirk8::mem::*;
    /// let mem = Mem::new();
    /// assert_eq!(0xf0, mem.read(0x000));
    /// assert_eq!(0x00, mem.read(0x200));
    /// ```
    pub fn new() -> Self {
        let mut mem = Mem { ram: [0; RAM_SIZE] };
        mem.load_font();
        mem
    }

    /// Copies the font into `0x000..0x050`
    pub fn load_font(&mut self) -> &mut Self {
        let start = FONT_ADDR as usize;
        self.ram[start..start + FONT.len()].copy_from_slice(&FONT);
        self
    }

    /// Copies a program into memory at the [ENTRY_POINT]
    ///
    /// Returns [Error::RomTooLarge] if the program doesn't fit.
    /// # Examples
    /// ```rust
    /// # use quirk8::mem::*;
    /// let mut mem = Mem::new();
    /// mem.load_program(&[0x12, 0x00]).unwrap();
    /// assert_eq!(0x1200, mem.read_word(ENTRY_POINT));
    /// ```
    pub fn load_program(&mut self, rom: &[u8]) -> Result<&mut Self> {
        let start = ENTRY_POINT as usize;
        let capacity = RAM_SIZE - start;
        if rom.len() > capacity {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                capacity,
            });
        }
        self.ram[start..start + rom.len()].copy_from_slice(rom);
        Ok(self)
    }

    /// Reads a byte. The address is masked to 12 bits.
    pub fn read(&self, addr: u16) -> u8 {
        self.ram[(addr & ADDR_MASK) as usize]
    }

    /// Writes a byte. The address is masked to 12 bits.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.ram[(addr & ADDR_MASK) as usize] = value;
    }

    /// Reads a big-endian word starting at `addr`
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_be_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    /// Gets the entire address space
    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }
}

impl Default for Mem {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Mem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.ram.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Mem")
            .field("size", &RAM_SIZE)
            .field("nonzero", &used)
            .finish_non_exhaustive()
    }
}
