// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Colors, and the slow fade each screen cell makes between them

use crate::screen::{Screen, HEIGHT, WIDTH};
use log::debug;
use std::fmt::Display;

/// Smallest allowed fade rate
pub const MIN_RATE: f32 = 0.1;
/// Largest allowed fade rate. At this rate, cells change color immediately.
pub const MAX_RATE: f32 = 1.0;
/// Float drift this close to a bound is snapped onto it
const EPSILON: f32 = 1e-4;

/// An RGBA color, packed as `0xRRGGBBAA`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color(0xffffffff);
    /// Transparent black
    pub const BLACK: Color = Color(0x00000000);

    /// Unpacks the channels, in `[r, g, b, a]` order
    pub fn rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
    /// Repacks the color as `0x00RRGGBB`, dropping alpha
    pub fn to_0rgb(self) -> u32 {
        self.0 >> 8
    }
    /// Moves each channel the fraction `t` of the way from `self` to `end`.
    ///
    /// A channel which isn't there yet always moves by at least one step,
    /// so repeated lerps reach `end`.
    /// # Examples
    /// ```rust
    /// # use quirk8::prelude::*;
    /// let half = Color::BLACK.lerp(Color::WHITE, 0.5);
    /// assert_eq!(Color(0x80808080), half);
    /// assert_eq!(Color::WHITE, half.lerp(Color::WHITE, 1.0));
    /// ```
    pub fn lerp(self, end: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (start, end) = (self.rgba(), end.rgba());
        let mut out = [0u8; 4];
        for (out, (&s, &e)) in out.iter_mut().zip(start.iter().zip(end.iter())) {
            let delta = (e as f32 - s as f32) * t;
            *out = (s as f32 + delta.abs().ceil().copysign(delta)) as u8;
        }
        Color(u32::from_be_bytes(out))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// The displayed color of every cell, drifting toward fg or bg each frame
#[derive(Clone, Debug, PartialEq)]
pub struct Fade {
    fg: Color,
    bg: Color,
    rate: f32,
    cells: Vec<Color>,
}

impl Fade {
    /// Starts with every cell at `bg`.
    ///
    /// Any `rate` in `(0, 1]` is kept as-is. Larger rates become 1.0, and
    /// rates which aren't positive become [MIN_RATE].
    pub fn new(fg: Color, bg: Color, rate: f32) -> Self {
        let rate = if rate > 0.0 { rate.min(MAX_RATE) } else { MIN_RATE };
        debug!("fading between {fg} and {bg} at {rate}");
        Fade {
            fg,
            bg,
            rate,
            cells: vec![bg; WIDTH * HEIGHT],
        }
    }
    /// The color lit pixels settle on
    pub fn fg(&self) -> Color {
        self.fg
    }
    /// The color dark pixels settle on
    pub fn bg(&self) -> Color {
        self.bg
    }
    /// The fraction of the remaining distance covered each frame
    pub fn rate(&self) -> f32 {
        self.rate
    }
    /// Moves the rate by `delta`, staying inside `[0.1, 1.0]`.
    /// Returns the new rate.
    ///
    /// A rate already below 0.1 never goes lower, and stepping down doesn't
    /// raise it either.
    pub fn adjust_rate(&mut self, delta: f32) -> f32 {
        let mut rate = self.rate + delta;
        // so ten steps down from 1.0 lands on 0.1
        if rate < MIN_RATE + EPSILON {
            rate = MIN_RATE;
        }
        if rate > MAX_RATE - EPSILON {
            rate = MAX_RATE;
        }
        if delta < 0.0 {
            rate = rate.min(self.rate);
        }
        self.rate = rate;
        debug!("color lerp rate: {:.2}", self.rate);
        self.rate
    }
    /// Snaps every cell back to the background
    pub fn clear(&mut self) {
        self.cells.fill(self.bg);
    }
    /// Steps every cell toward its target, and returns the new colors
    pub fn update(&mut self, screen: &Screen) -> &[Color] {
        for (cell, &lit) in self.cells.iter_mut().zip(screen.pixels()) {
            let target = if lit { self.fg } else { self.bg };
            if *cell != target {
                *cell = cell.lerp(target, self.rate);
            }
        }
        &self.cells
    }
    /// The colors as of the last update
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let c = Color(0x12345678);
        assert_eq!(c.rgba(), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(c.to_string(), "#12345678");
        assert_eq!(c.to_0rgb(), 0x00123456);
    }

    #[test]
    fn lerp_converges() {
        for t in [0.1, 0.3, 0.7, 1.0] {
            let mut c = Color::BLACK;
            for _ in 0..200 {
                c = c.lerp(Color::WHITE, t);
            }
            assert_eq!(c, Color::WHITE, "t = {t}");
            for _ in 0..200 {
                c = c.lerp(Color(0x10203040), t);
            }
            assert_eq!(c, Color(0x10203040), "t = {t}");
        }
    }

    #[test]
    fn lerp_never_overshoots() {
        let mut c = Color(0x00ff0080);
        let end = Color(0x80808080);
        for _ in 0..50 {
            let [r, g, _, _] = c.lerp(end, 0.7).rgba();
            assert!(r <= 0x80 && g >= 0x80);
            c = c.lerp(end, 0.7);
        }
    }

    #[test]
    fn fade_tracks_screen() {
        let mut screen = Screen::new();
        screen.draw(0, 0, &[0x80]);
        let mut fade = Fade::new(Color::WHITE, Color::BLACK, 1.0);
        let cells = fade.update(&screen);
        assert_eq!(cells[0], Color::WHITE);
        assert!(cells[1..].iter().all(|&c| c == Color::BLACK));

        fade.adjust_rate(-0.5);
        screen.clear();
        let cells = fade.update(&screen);
        assert_ne!(cells[0], Color::WHITE);
        assert_ne!(cells[0], Color::BLACK);
        fade.clear();
        assert!(fade.cells().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn rate_is_clamped() {
        let mut fade = Fade::new(Color::WHITE, Color::BLACK, 0.7);
        for _ in 0..20 {
            fade.adjust_rate(0.1);
        }
        assert_eq!(fade.rate(), MAX_RATE);
        for _ in 0..20 {
            fade.adjust_rate(-0.1);
        }
        assert_eq!(fade.rate(), MIN_RATE);
        assert_eq!(Fade::new(Color::WHITE, Color::BLACK, 7.0).rate(), MAX_RATE);
    }

    #[test]
    fn slow_rates_are_kept() {
        let config = crate::Config::from_args(["colorLerpRate=0.05"]).unwrap();
        let mut fade = Fade::new(config.fg, config.bg, config.color_lerp_rate);
        assert_eq!(fade.rate(), 0.05);
        // stepping down from below the floor leaves it alone
        assert_eq!(fade.adjust_rate(-0.1), 0.05);
        assert!((fade.adjust_rate(0.1) - 0.15).abs() < 1e-6);
        assert_eq!(Fade::new(Color::WHITE, Color::BLACK, 0.0).rate(), MIN_RATE);
    }

    #[test]
    fn steps_stay_off_the_grid() {
        let mut fade = Fade::new(Color::WHITE, Color::BLACK, 0.25);
        assert!((fade.adjust_rate(0.1) - 0.35).abs() < 1e-6);
        assert!((fade.adjust_rate(-0.2) - 0.15).abs() < 1e-6);
        assert_eq!(fade.adjust_rate(-0.1), MIN_RATE);
        assert_eq!(fade.adjust_rate(-0.1), MIN_RATE);
    }
}
