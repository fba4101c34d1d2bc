// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Stores the Chip-8's screen, and blits sprites onto it

use std::fmt::{Debug, Display, Formatter, Result};

/// Width of the screen, in pixels
pub const WIDTH: usize = 64;
/// Height of the screen, in pixels
pub const HEIGHT: usize = 32;

/// A 64x32 monochrome framebuffer, stored row-major
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Screen {
    pixels: [bool; WIDTH * HEIGHT],
}

impl Screen {
    /// Constructs a blank screen
    pub fn new() -> Self {
        Screen {
            pixels: [false; WIDTH * HEIGHT],
        }
    }

    /// Turns every pixel off
    pub fn clear(&mut self) {
        self.pixels = [false; WIDTH * HEIGHT];
    }

    /// Gets the pixel at (x, y), or `None` if it's off-screen
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        (x < WIDTH && y < HEIGHT).then(|| self.pixels[y * WIDTH + x])
    }

    /// Gets every pixel, row-major (`index = y * 64 + x`)
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// XORs an 8-pixel-wide sprite onto the screen, one byte per row.
    ///
    /// The origin wraps around the screen, but the sprite itself is clipped at
    /// the right and bottom edges.
    ///
    /// Returns whether any lit pixel was turned off.
    /// # Examples
    /// ```rust
    /// # use quirk8::screen::*;
    /// let mut screen = Screen::new();
    /// // (62, 0): only two columns fit
    /// assert!(!screen.draw(62, 0, &[0xff]));
    /// assert_eq!(Some(true), screen.get(63, 0));
    /// assert_eq!(Some(false), screen.get(0, 0));
    /// // again: both pixels collide, and go dark
    /// assert!(screen.draw(62, 0, &[0xff]));
    /// assert_eq!(Some(false), screen.get(62, 0));
    /// ```
    pub fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let (x0, y0) = (x as usize % WIDTH, y as usize % HEIGHT);
        let mut collision = false;
        for (row, &byte) in sprite.iter().enumerate() {
            let y = y0 + row;
            if y >= HEIGHT {
                break;
            }
            for col in 0..8 {
                let x = x0 + col;
                if x >= WIDTH {
                    break;
                }
                if byte >> (7 - col) & 1 == 0 {
                    continue;
                }
                let pixel = &mut self.pixels[y * WIDTH + x];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        collision
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let lit = self.pixels.iter().filter(|&&p| p).count();
        f.debug_struct("Screen").field("lit", &lit).finish()
    }
}

/// Prints the screen, two rows per line, using half-block characters
impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for pair in self.pixels.chunks(WIDTH * 2) {
            let (top, bottom) = pair.split_at(WIDTH);
            for (&t, &b) in top.iter().zip(bottom) {
                f.write_str(match (t, b) {
                    (true, true) => "█",
                    (true, false) => "▀",
                    (false, true) => "▄",
                    (false, false) => " ",
                })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
