// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Contains implementations for each Chip-8 instruction

use super::*;
use crate::{
    keypad::Keypad,
    mem::{Mem, FONT_ADDR, GLYPH_SIZE},
    screen::Screen,
};
use log::warn;
use rand::random;

impl CPU {
    /// Executes a single decoded [Instruction]
    #[rustfmt::skip]
    #[inline(always)]
    pub(super) fn execute(&mut self, bus: &mut Bus, insn: Instruction) -> Result<()> {
        let Instruction { nnn: a, nn: b, n, x, y, .. } = insn;
        match insn.kind() {
            0x0 => match a {
                0x0e0 => self.clear_screen(&mut bus.screen),
                0x0ee => self.ret()?,
                // machine language routines don't exist here
                _ => {}
            },
            0x1            => self.jump(a),
            0x2            => self.call(a)?,
            0x3            => self.skip_equals_immediate(x, b),
            0x4            => self.skip_not_equals_immediate(x, b),
            0x5 if n == 0  => self.skip_equals(x, y),
            0x6            => self.load_immediate(x, b),
            0x7            => self.add_immediate(x, b),
            0x8 => match n {
                0x0        => self.load(x, y),
                0x1        => self.or(x, y),
                0x2        => self.and(x, y),
                0x3        => self.xor(x, y),
                0x4        => self.add(x, y),
                0x5        => self.sub(x, y),
                0x6        => self.shift_right(x, y),
                0x7        => self.backwards_sub(x, y),
                0xe        => self.shift_left(x, y),
                _          => self.unknown(insn),
            },
            0x9 if n == 0  => self.skip_not_equals(x, y),
            0xa            => self.load_i_immediate(a),
            0xb            => self.jump_indexed(a),
            0xc            => self.rand(x, b),
            0xd            => self.draw(x, y, n, bus),
            0xe => match b {
                0x9e       => self.skip_key_equals(x, &bus.keys),
                0xa1       => self.skip_key_not_equals(x, &bus.keys),
                _          => self.unknown(insn),
            },
            0xf => match b {
                0x07       => self.load_delay_timer(x),
                0x0a       => self.wait_for_key(x, &bus.keys),
                0x15       => self.store_delay_timer(x),
                0x18       => self.store_sound_timer(x),
                0x1e       => self.add_i(x),
                0x29       => self.load_sprite(x),
                0x33       => self.bcd_convert(x, &mut bus.mem),
                0x55       => self.store_dma(x, &mut bus.mem),
                0x65       => self.load_dma(x, &bus.mem),
                _          => self.unknown(insn),
            },
            _              => self.unknown(insn),
        }
        Ok(())
    }

    /// Logs an instruction that doesn't exist, and otherwise ignores it
    fn unknown(&self, insn: Instruction) {
        warn!("opcode {insn} at {:03x} not recognized", self.pc.wrapping_sub(2));
    }
}

/// |`0aaa`| Issues a "System call" (ML routine)
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`00e0`| Clear screen memory to all 0       |
/// |`00ee`| Return from subroutine             |
impl CPU {
    /// |`00e0`| Clears the screen memory to 0
    #[inline(always)]
    pub(super) fn clear_screen(&mut self, screen: &mut Screen) {
        screen.clear();
    }
    /// |`00ee`| Returns from subroutine
    #[inline(always)]
    pub(super) fn ret(&mut self) -> Result<()> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow {
                pc: self.pc.wrapping_sub(2),
            });
        }
        self.sp -= 1;
        self.pc = self.stack[self.sp];
        Ok(())
    }
}

/// |`1aaa`| Sets pc to an absolute address
impl CPU {
    /// |`1aaa`| Sets the program counter to an absolute address
    #[inline(always)]
    pub(super) fn jump(&mut self, a: Adr) {
        self.pc = a;
    }
}

/// |`2aaa`| Pushes pc onto the stack, then jumps to a
impl CPU {
    /// |`2aaa`| Pushes pc onto the stack, then jumps to a
    #[inline(always)]
    pub(super) fn call(&mut self, a: Adr) -> Result<()> {
        if self.sp == STACK_DEPTH {
            return Err(Error::StackOverflow {
                pc: self.pc.wrapping_sub(2),
            });
        }
        self.stack[self.sp] = self.pc;
        self.sp += 1;
        self.pc = a;
        Ok(())
    }
}

/// |`3xbb`| Skips next instruction if register X == b
impl CPU {
    /// |`3xbb`| Skips the next instruction if register X == b
    #[inline(always)]
    pub(super) fn skip_equals_immediate(&mut self, x: Reg, b: u8) {
        if self.v[x] == b {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`4xbb`| Skips next instruction if register X != b
impl CPU {
    /// |`4xbb`| Skips the next instruction if register X != b
    #[inline(always)]
    pub(super) fn skip_not_equals_immediate(&mut self, x: Reg, b: u8) {
        if self.v[x] != b {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`5xyn`| Performs a register-register comparison
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`5XY0`| Skip next instruction if vX == vY  |
impl CPU {
    /// |`5xy0`| Skips the next instruction if register X == register Y
    #[inline(always)]
    pub(super) fn skip_equals(&mut self, x: Reg, y: Reg) {
        if self.v[x] == self.v[y] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`6xbb`| Loads immediate byte b into register vX
impl CPU {
    /// |`6xbb`| Loads immediate byte b into register vX
    #[inline(always)]
    pub(super) fn load_immediate(&mut self, x: Reg, b: u8) {
        self.v[x] = b;
    }
}

/// |`7xbb`| Adds immediate byte b to register vX
impl CPU {
    /// |`7xbb`| Adds immediate byte b to register vX. vF is untouched.
    #[inline(always)]
    pub(super) fn add_immediate(&mut self, x: Reg, b: u8) {
        self.v[x] = self.v[x].wrapping_add(b);
    }
}

/// |`8xyn`| Performs ALU operation
///
/// Every operation that sets vF does so *after* writing vX, so that the flag
/// survives when X is F.
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`8xy0`| X = Y                              |
/// |`8xy1`| X = X | Y                          |
/// |`8xy2`| X = X & Y                          |
/// |`8xy3`| X = X ^ Y                          |
/// |`8xy4`| X = X + Y; Set vF=carry            |
/// |`8xy5`| X = X - Y; Set vF=!borrow          |
/// |`8xy6`| X = X >> 1; Set vF=shifted bit     |
/// |`8xy7`| X = Y - X; Set vF=!borrow          |
/// |`8xyE`| X = X << 1; Set vF=shifted bit     |
impl CPU {
    /// |`8xy0`| Loads the value of y into x
    #[inline(always)]
    pub(super) fn load(&mut self, x: Reg, y: Reg) {
        self.v[x] = self.v[y];
    }
    /// |`8xy1`| Performs bitwise or of vX and vY, and stores the result in vX
    ///
    /// # Quirk
    /// The original chip-8 interpreter will clobber vF for any 8-series instruction
    #[inline(always)]
    pub(super) fn or(&mut self, x: Reg, y: Reg) {
        self.v[x] |= self.v[y];
        if !self.flags.quirks.bin_ops {
            self.v[0xf] = 0;
        }
    }
    /// |`8xy2`| Performs bitwise and of vX and vY, and stores the result in vX
    ///
    /// # Quirk
    /// The original chip-8 interpreter will clobber vF for any 8-series instruction
    #[inline(always)]
    pub(super) fn and(&mut self, x: Reg, y: Reg) {
        self.v[x] &= self.v[y];
        if !self.flags.quirks.bin_ops {
            self.v[0xf] = 0;
        }
    }
    /// |`8xy3`| Performs bitwise xor of vX and vY, and stores the result in vX
    ///
    /// # Quirk
    /// The original chip-8 interpreter will clobber vF for any 8-series instruction
    #[inline(always)]
    pub(super) fn xor(&mut self, x: Reg, y: Reg) {
        self.v[x] ^= self.v[y];
        if !self.flags.quirks.bin_ops {
            self.v[0xf] = 0;
        }
    }
    /// |`8xy4`| Performs addition of vX and vY, and stores the result in vX
    #[inline(always)]
    pub(super) fn add(&mut self, x: Reg, y: Reg) {
        let carry;
        (self.v[x], carry) = self.v[x].overflowing_add(self.v[y]);
        self.v[0xf] = carry.into();
    }
    /// |`8xy5`| Performs subtraction of vX and vY, and stores the result in vX
    #[inline(always)]
    pub(super) fn sub(&mut self, x: Reg, y: Reg) {
        let borrow;
        (self.v[x], borrow) = self.v[x].overflowing_sub(self.v[y]);
        self.v[0xf] = (!borrow).into();
    }
    /// |`8xy6`| Performs bitwise right shift of vX
    ///
    /// # Quirk
    /// On the original chip-8 interpreter, this shifts vY and stores the result in vX
    #[inline(always)]
    pub(super) fn shift_right(&mut self, x: Reg, y: Reg) {
        let src: Reg = if self.flags.quirks.shift { x } else { y };
        let shift_out = self.v[src] & 1;
        self.v[x] = self.v[src] >> 1;
        self.v[0xf] = shift_out;
    }
    /// |`8xy7`| Performs subtraction of vY and vX, and stores the result in vX
    #[inline(always)]
    pub(super) fn backwards_sub(&mut self, x: Reg, y: Reg) {
        let borrow;
        (self.v[x], borrow) = self.v[y].overflowing_sub(self.v[x]);
        self.v[0xf] = (!borrow).into();
    }
    /// |`8xyE`| Performs bitwise left shift of vX
    ///
    /// # Quirk
    /// On the original chip-8 interpreter, this shifts vY and stores the result in vX
    #[inline(always)]
    pub(super) fn shift_left(&mut self, x: Reg, y: Reg) {
        let src: Reg = if self.flags.quirks.shift { x } else { y };
        let shift_out: u8 = self.v[src] >> 7;
        self.v[x] = self.v[src] << 1;
        self.v[0xf] = shift_out;
    }
}

/// |`9xyn`| Performs a register-register comparison
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`9XY0`| Skip next instruction if vX != vY  |
impl CPU {
    /// |`9xy0`| Skip next instruction if X != y
    #[inline(always)]
    pub(super) fn skip_not_equals(&mut self, x: Reg, y: Reg) {
        if self.v[x] != self.v[y] {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`Aaaa`| Load address #a into register I
impl CPU {
    /// |`Aadr`| Load address #adr into register I
    #[inline(always)]
    pub(super) fn load_i_immediate(&mut self, a: Adr) {
        self.i = a;
    }
}

/// |`Baaa`| Jump to &adr + v0
impl CPU {
    /// |`Badr`| Jump to &adr + v0
    ///
    /// Every mode uses v0. The Super-Chip `Bxnn` form isn't emulated.
    #[inline(always)]
    pub(super) fn jump_indexed(&mut self, a: Adr) {
        self.pc = a.wrapping_add(self.v[0] as Adr);
    }
}

/// |`Cxbb`| Stores a random number & the provided byte into vX
impl CPU {
    /// |`Cxbb`| Stores a random number & the provided byte into vX
    #[inline(always)]
    pub(super) fn rand(&mut self, x: Reg, b: u8) {
        self.v[x] = random::<u8>() & b;
    }
}

/// |`Dxyn`| Draws n-byte sprite to the screen at coordinates (vX, vY)
impl CPU {
    /// |`Dxyn`| Draws n-byte sprite to the screen at coordinates (vX, vY)
    ///
    /// vF is set if any lit pixel was turned off.
    #[inline(always)]
    pub(super) fn draw(&mut self, x: Reg, y: Reg, n: Nib, bus: &mut Bus) {
        let mut sprite = [0u8; 0x10];
        let sprite = &mut sprite[..n as usize];
        for (row, byte) in sprite.iter_mut().enumerate() {
            *byte = bus.mem.read(self.i.wrapping_add(row as Adr));
        }
        let collision = bus.screen.draw(self.v[x], self.v[y], sprite);
        self.v[0xf] = collision.into();
    }
}

/// |`Exbb`| Skips instruction on value of keypress
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`eX9e`| Skip next instruction if key == vX |
/// |`eXa1`| Skip next instruction if key != vX |
impl CPU {
    /// |`Ex9E`| Skip next instruction if key == vX
    #[inline(always)]
    pub(super) fn skip_key_equals(&mut self, x: Reg, keys: &Keypad) {
        if keys.is_pressed(self.v[x]) {
            self.pc = self.pc.wrapping_add(2);
        }
    }
    /// |`ExA1`| Skip next instruction if key != vX
    #[inline(always)]
    pub(super) fn skip_key_not_equals(&mut self, x: Reg, keys: &Keypad) {
        if !keys.is_pressed(self.v[x]) {
            self.pc = self.pc.wrapping_add(2);
        }
    }
}

/// |`Fxbb`| Performs IO
///
/// |opcode| effect                             |
/// |------|------------------------------------|
/// |`fX07`| Set vX to value in delay timer     |
/// |`fX0a`| Wait for input, store key in vX    |
/// |`fX15`| Set delay timer to the value in vX |
/// |`fX18`| Set sound timer to the value in vX |
/// |`fX1e`| Add vX to I                        |
/// |`fX29`| Load sprite for character x into I |
/// |`fX33`| BCD convert X into I[0..3]         |
/// |`fX55`| DMA Stor from I to registers 0..=X |
/// |`fX65`| DMA Load from I to registers 0..=X |
impl CPU {
    /// |`Fx07`| Get the current DT, and put it in vX
    /// ```py
    /// vX = DT
    /// ```
    #[inline(always)]
    pub(super) fn load_delay_timer(&mut self, x: Reg) {
        self.v[x] = self.delay;
    }
    /// |`Fx0A`| Wait for key, then vX = K
    ///
    /// A key only counts once it's been pressed *and released*. Until then,
    /// pc is rewound so this instruction runs again next cycle.
    #[inline(always)]
    pub(super) fn wait_for_key(&mut self, x: Reg, keys: &Keypad) {
        match self.flags.heldkey {
            Some(key) if keys.is_pressed(key) => self.pc = self.pc.wrapping_sub(2),
            Some(key) => {
                self.v[x] = key;
                self.flags.heldkey = None;
            }
            None => {
                self.flags.heldkey = keys.first_pressed();
                self.pc = self.pc.wrapping_sub(2);
            }
        }
    }
    /// |`Fx15`| Load vX into DT
    /// ```py
    /// DT = vX
    /// ```
    #[inline(always)]
    pub(super) fn store_delay_timer(&mut self, x: Reg) {
        self.delay = self.v[x];
    }
    /// |`Fx18`| Load vX into ST
    /// ```py
    /// ST = vX;
    /// ```
    #[inline(always)]
    pub(super) fn store_sound_timer(&mut self, x: Reg) {
        self.sound = self.v[x];
    }
    /// |`Fx1e`| Add vX to I,
    /// ```py
    /// I += vX;
    /// ```
    #[inline(always)]
    pub(super) fn add_i(&mut self, x: Reg) {
        self.i = self.i.wrapping_add(self.v[x] as Adr);
    }
    /// |`Fx29`| Load sprite for character x into I
    /// ```py
    /// I = sprite(X);
    /// ```
    #[inline(always)]
    pub(super) fn load_sprite(&mut self, x: Reg) {
        self.i = FONT_ADDR + GLYPH_SIZE * (self.v[x] & 0xf) as Adr;
    }
    /// |`Fx33`| BCD convert X into I`[0..3]`
    #[inline(always)]
    pub(super) fn bcd_convert(&mut self, x: Reg, mem: &mut Mem) {
        let x = self.v[x];
        mem.write(self.i.wrapping_add(2), x % 10);
        mem.write(self.i.wrapping_add(1), x / 10 % 10);
        mem.write(self.i, x / 100 % 10);
    }
    /// |`Fx55`| DMA Stor from I to registers 0..=X
    ///
    /// # Quirk
    /// The original chip-8 interpreter uses I to directly index memory,
    /// with the side effect of leaving I as I+X+1 after the transfer is done.
    #[inline(always)]
    pub(super) fn store_dma(&mut self, x: Reg, mem: &mut Mem) {
        for reg in 0..=x {
            mem.write(self.i.wrapping_add(reg as Adr), self.v[reg]);
        }
        if !self.flags.quirks.dma_inc {
            self.i = self.i.wrapping_add(x as Adr + 1);
        }
    }
    /// |`Fx65`| DMA Load from I to registers 0..=X
    ///
    /// # Quirk
    /// The original chip-8 interpreter uses I to directly index memory,
    /// with the side effect of leaving I as I+X+1 after the transfer is done.
    #[inline(always)]
    pub(super) fn load_dma(&mut self, x: Reg, mem: &Mem) {
        for reg in 0..=x {
            self.v[reg] = mem.read(self.i.wrapping_add(reg as Adr));
        }
        if !self.flags.quirks.dma_inc {
            self.i = self.i.wrapping_add(x as Adr + 1);
        }
    }
}
