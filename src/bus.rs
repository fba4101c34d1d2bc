// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Everything the [CPU](crate::cpu::CPU) touches that isn't a register

use crate::{keypad::Keypad, mem::Mem, screen::Screen};

/// Connects the CPU to memory, the screen, and the keypad
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bus {
    /// The 4KiB address space
    pub mem: Mem,
    /// The 64x32 framebuffer
    pub screen: Screen,
    /// The keypad latch. The CPU only ever reads this.
    pub keys: Keypad,
}

impl Bus {
    /// Constructs a bus with a fresh font, a blank screen, and no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a bus with `rom` loaded at the entry point
    ///
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let bus = Bus::with_program(&[0x00, 0xe0]).unwrap();
    /// assert_eq!(0x00e0, bus.mem.read_word(0x200));
    /// ```
    pub fn with_program(rom: &[u8]) -> crate::error::Result<Self> {
        let mut bus = Self::new();
        bus.mem.load_program(rom)?;
        Ok(bus)
    }
}
