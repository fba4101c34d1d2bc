// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! This crate implements a Chip-8 virtual machine: an interpreter for the
//! Chip-8 instruction set with switchable Chip-8 and Super-Chip/XO-Chip quirks,
//! a 64x32 monochrome screen, two 60Hz timers, and a 16-key hex keypad.
//!
//! Windowing, audio output, and keyboard handling live behind the [io] traits,
//! and are implemented for real hardware by the `quirk8` binary.

pub mod bus;
pub mod chip8;
pub mod color;
pub mod config;
pub mod cpu;
pub mod error;
pub mod io;
pub mod keypad;
pub mod mem;
pub mod screen;
pub mod tone;

pub use bus::Bus;
pub use chip8::{Chip8, State};
pub use config::{Config, Setting};
pub use cpu::{flags::Flags, mode::Mode, quirks::Quirks, CPU};
pub use error::{Error, Result};
pub use io::{Control, Input, Renderer};
pub use keypad::Keypad;
pub use mem::Mem;
pub use screen::Screen;
pub use tone::{SquareWave, Tone};

/// Common imports for quirk8
pub mod prelude {
    pub use super::*;
    pub use color::{Color, Fade};
    pub use cpu::instruction::Instruction;
}
