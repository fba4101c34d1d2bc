// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Decodes and runs instructions


pub mod behavior;
pub mod flags;
pub mod instruction;
pub mod mode;
pub mod quirks;

use self::{flags::Flags, instruction::Instruction, mode::Mode, quirks::Quirks};
use crate::{
    bus::Bus,
    error::{Error, Result},
    mem::ENTRY_POINT,
};
use log::trace;
use std::fmt::Debug;

type Reg = usize;
type Adr = u16;
type Nib = u8;

/// Number of return addresses the call stack can hold
pub const STACK_DEPTH: usize = 16;

/// Represents the internal state of the CPU interpreter
#[derive(Clone, PartialEq, Eq)]
pub struct CPU {
    /// Flags that control how the CPU behaves, but which aren't inherent to the
    /// chip-8. Includes the [Mode] and its [Quirks].
    pub flags: Flags,
    // memory
    stack: [Adr; STACK_DEPTH],
    sp: usize,
    // registers
    pc: Adr,
    i: Adr,
    v: [u8; 16],
    delay: u8,
    sound: u8,
    // Execution data
    cycle: usize,
}

// public interface
impl CPU {
    /// Constructs a new CPU which emulates the given [Mode]
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let cpu = CPU::new(Mode::SChip);
    /// assert_eq!(0x200, cpu.pc());
    /// assert!(cpu.flags.quirks.shift);
    /// ```
    pub fn new(mode: Mode) -> Self {
        CPU {
            flags: Flags::new(mode),
            ..Default::default()
        }
    }

    /// Sets a general purpose register in the CPU.
    /// If the register doesn't exist, returns [Error::InvalidRegister]
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let mut cpu = CPU::default();
    /// cpu.set_v(0x4, 0x41).unwrap();
    /// assert_eq!(0x41, cpu.v()[4]);
    /// assert!(cpu.set_v(0x10, 0).is_err());
    /// ```
    pub fn set_v(&mut self, reg: Reg, value: u8) -> Result<()> {
        if let Some(gpr) = self.v.get_mut(reg) {
            *gpr = value;
            Ok(())
        } else {
            Err(Error::InvalidRegister { reg })
        }
    }

    /// Gets a slice of the entire general purpose registers
    pub fn v(&self) -> &[u8] {
        self.v.as_slice()
    }

    /// Gets the program counter
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let cpu = CPU::default();
    /// assert_eq!(0x200, cpu.pc());
    /// ```
    pub fn pc(&self) -> Adr {
        self.pc
    }

    /// Gets the I register
    pub fn i(&self) -> Adr {
        self.i
    }

    /// Sets the I register
    pub fn set_i(&mut self, i: Adr) {
        self.i = i;
    }

    /// Gets the stack pointer: the number of return addresses on the stack
    pub fn sp(&self) -> usize {
        self.sp
    }

    /// Gets the return addresses currently on the stack, oldest first
    pub fn stack(&self) -> &[Adr] {
        &self.stack[..self.sp]
    }

    /// Gets the value in the Sound Timer register
    pub fn sound(&self) -> u8 {
        self.sound
    }

    /// Gets the value in the Delay Timer register
    pub fn delay(&self) -> u8 {
        self.delay
    }

    /// Gets the number of cycles the CPU has executed
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Resets the CPU.
    ///
    /// Touches the stack, pc, registers, timers, any pending keypause, and the
    /// cycle count. Does not touch the [Mode] or its [Quirks].
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let mut cpu = CPU::new(Mode::XOChip);
    /// cpu.set_v(0, 0xff).unwrap();
    /// cpu.reset();
    /// assert_eq!(CPU::new(Mode::XOChip), cpu);
    /// ```
    pub fn reset(&mut self) {
        *self = CPU::new(self.flags.mode);
    }

    /// Executes a single instruction
    ///
    /// Returns [Error::StackOverflow] or [Error::StackUnderflow] if the program
    /// mismanages the call stack. Unknown instructions are logged and skipped.
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let mut cpu = CPU::default();
    /// let mut bus = Bus::with_program(&[
    ///     0x00, 0xe0, // cls
    ///     0x12, 0x02, // jump 0x202 (pc)
    /// ]).unwrap();
    /// cpu.tick(&mut bus).unwrap();
    /// assert_eq!(0x202, cpu.pc());
    /// assert_eq!(1, cpu.cycle());
    /// ```
    pub fn tick(&mut self, bus: &mut Bus) -> Result<&mut Self> {
        self.cycle += 1;
        // fetch and decode
        let insn = Instruction::decode(bus.mem.read_word(self.pc));
        trace!("{:6} {:03x}: {insn}", self.cycle, self.pc);
        self.pc = self.pc.wrapping_add(2);
        self.execute(bus, insn)?;
        Ok(self)
    }

    /// Executes `steps` instructions in a row
    ///
    /// NOTE: does not touch the timers
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let mut cpu = CPU::default();
    /// let mut bus = Bus::with_program(&[
    ///     0x00, 0xe0, // cls
    ///     0x12, 0x02, // jump 0x202 (pc)
    /// ]).unwrap();
    /// cpu.multistep(&mut bus, 0x20).unwrap();
    /// assert_eq!(0x202, cpu.pc());
    /// assert_eq!(0x20, cpu.cycle());
    /// ```
    pub fn multistep(&mut self, bus: &mut Bus, steps: usize) -> Result<&mut Self> {
        for _ in 0..steps {
            self.tick(bus)?;
        }
        Ok(self)
    }

    /// Counts both timers down by one, stopping at zero.
    ///
    /// Returns whether the sound timer was running, which is when the tone
    /// should be heard.
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let mut cpu = CPU::default();
    /// let mut bus = Bus::with_program(&[0x60, 0x01, 0xf0, 0x18]).unwrap();
    /// cpu.multistep(&mut bus, 2).unwrap();
    /// assert!(cpu.tick_timers());
    /// assert_eq!(0, cpu.sound());
    /// assert!(!cpu.tick_timers());
    /// ```
    pub fn tick_timers(&mut self) -> bool {
        self.delay = self.delay.saturating_sub(1);
        let beeping = self.sound > 0;
        self.sound = self.sound.saturating_sub(1);
        beeping
    }
}

impl Debug for CPU {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("flags", &self.flags)
            .field("stack", &self.stack())
            .field("pc", &format_args!("{:03x}", self.pc))
            .field("i", &format_args!("{:03x}", self.i))
            .field("v", &self.v)
            .field("delay", &self.delay)
            .field("sound", &self.sound)
            .field("cycle", &self.cycle)
            .finish()
    }
}

impl Default for CPU {
    /// Constructs a new Chip-8 CPU, ready to run from the entry point
    fn default() -> Self {
        CPU {
            flags: Flags::default(),
            stack: [0; STACK_DEPTH],
            sp: 0,
            pc: ENTRY_POINT,
            i: 0,
            v: [0; 16],
            delay: 0,
            sound: 0,
            cycle: 0,
        }
    }
}
