// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Interfaces to the host: somewhere to draw, and somewhere to get keys from
//!
//! Neither side keeps a handle on the [Chip8](crate::Chip8). They're handed
//! the [Screen] or the [Keypad] once per frame, and report back through
//! their return values.

use crate::{error::Result, keypad::Keypad, screen::Screen};

/// Requests from the host which aren't Chip-8 keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// Stop the interpreter for good
    Quit,
    /// Toggle between running and paused
    Pause,
    /// Reload the ROM and start over
    Reset,
    /// Turn the tone down a step
    VolumeDown,
    /// Turn the tone up a step
    VolumeUp,
    /// Make lit pixels fade out faster
    FadeDown,
    /// Make lit pixels fade out slower
    FadeUp,
}

/// Something which can show the contents of a [Screen]
pub trait Renderer {
    /// Blanks the output
    fn clear(&mut self) -> Result<()>;
    /// Presents the [Screen] to the user
    fn render(&mut self, screen: &Screen) -> Result<()>;
    /// Nudges the fade rate by `delta`. Renderers without a fade ignore this.
    fn adjust_fade(&mut self, delta: f32) {
        let _ = delta;
    }
}

/// Something which can tell which keys are held
pub trait Input {
    /// Updates `keys` from the host, and returns any [Control]s requested
    /// since the last poll, in the order they arrived
    fn poll(&mut self, keys: &mut Keypad) -> Result<Vec<Control>>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
    fn render(&mut self, screen: &Screen) -> Result<()> {
        (**self).render(screen)
    }
    fn adjust_fade(&mut self, delta: f32) {
        (**self).adjust_fade(delta)
    }
}

impl<I: Input + ?Sized> Input for &mut I {
    fn poll(&mut self, keys: &mut Keypad) -> Result<Vec<Control>> {
        (**self).poll(keys)
    }
}
