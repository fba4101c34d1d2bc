// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The Chip-8's 16-key hexadecimal keypad

use crate::error::{Error, Result};

/// Number of keys on the keypad
pub const KEYS: usize = 16;

/// Instantaneous state of the hex keypad, indexed `0x0..=0xF`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Keypad {
    keys: [bool; KEYS],
}

impl Keypad {
    /// Presses a key, and reports whether the key's state changed.
    /// If key does not exist, returns [Error::InvalidKey].
    ///
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let mut keys = Keypad::default();
    ///
    /// // press key `7`
    /// let did_press = keys.press(0x7).unwrap();
    /// assert!(did_press);
    ///
    /// // press key `7` again, even though it's already pressed
    /// let did_press = keys.press(0x7).unwrap();
    /// // it was already pressed, so nothing's changed.
    /// assert!(!did_press);
    /// ```
    pub fn press(&mut self, key: usize) -> Result<bool> {
        self.set(key, true)
    }

    /// Releases a key, and reports whether the key's state changed.
    /// If key is outside range `0..=0xF`, returns [Error::InvalidKey].
    ///
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let mut keys = Keypad::default();
    /// keys.press(0x7).unwrap();
    /// let changed = keys.release(0x7).unwrap();
    /// assert!(changed); // key released
    /// let changed = keys.release(0x7).unwrap();
    /// assert!(!changed); // key was not held
    /// ```
    pub fn release(&mut self, key: usize) -> Result<bool> {
        self.set(key, false)
    }

    fn set(&mut self, key: usize, state: bool) -> Result<bool> {
        let keyref = self.keys.get_mut(key).ok_or(Error::InvalidKey { key })?;
        let changed = *keyref != state;
        *keyref = state;
        Ok(changed)
    }

    /// Whether the key selected by the low nibble of `key` is held
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xf) as usize]
    }

    /// The lowest-numbered key currently held, if any
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&k| k).map(|k| k as u8)
    }

    /// Releases every key
    pub fn clear(&mut self) {
        self.keys = [false; KEYS];
    }
}
