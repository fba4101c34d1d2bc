// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Startup settings, taken from `key=value` arguments

use crate::{
    color::{Color, MAX_RATE},
    cpu::mode::Mode,
    error::{Error, Result},
};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Directory that `name=` paths are relative to
pub const ROM_DIR: &str = "roms";
/// Frames per second, and timer ticks per second
pub const FRAME_RATE: u32 = 60;

/// Everything the interpreter and its frontend need to start
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Size of one Chip-8 pixel, in host pixels
    pub scale: usize,
    /// Draws a background-colored outline around each lit pixel
    pub pixel_outlines: bool,
    /// The ROM to load
    pub rom: PathBuf,
    /// How many instructions to run each second
    pub insts_per_second: u32,
    /// Peak amplitude of the tone
    pub volume: i16,
    /// Which set of [Quirks](crate::Quirks) to use
    pub mode: Mode,
    /// How far each cell moves toward its target color each frame
    pub color_lerp_rate: f32,
    /// Color of lit pixels
    pub fg: Color,
    /// Color of dark pixels
    pub bg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scale: 10,
            pixel_outlines: false,
            rom: Path::new(ROM_DIR).join("tests/1-chip8-logo.ch8"),
            insts_per_second: 500,
            volume: 3000,
            mode: Mode::Chip8,
            color_lerp_rate: 0.7,
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

impl Config {
    /// Applies a list of [Setting]s to the defaults, in order
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let config = Config::from_settings(["scale=4", "extension=schip"]
    ///     .into_iter()
    ///     .map(str::parse::<Setting>)
    ///     .collect::<Result<Vec<_>>>()
    ///     .unwrap());
    /// assert_eq!(4, config.scale);
    /// assert_eq!(Mode::SChip, config.mode);
    /// ```
    pub fn from_settings(settings: impl IntoIterator<Item = Setting>) -> Self {
        let mut config = Config::default();
        for setting in settings {
            config.apply(setting);
        }
        config
    }
    /// Parses then applies each `key=value` argument, stopping at the first bad one
    pub fn from_args<S: AsRef<str>>(args: impl IntoIterator<Item = S>) -> Result<Self> {
        let settings = args
            .into_iter()
            .map(|arg| arg.as_ref().parse())
            .collect::<Result<Vec<Setting>>>()?;
        Ok(Self::from_settings(settings))
    }
    /// Overwrites one field
    pub fn apply(&mut self, setting: Setting) -> &mut Self {
        match setting {
            Setting::Name(rom) => self.rom = rom,
            Setting::Scale(scale) => self.scale = scale,
            Setting::PixelOutlines(outlines) => self.pixel_outlines = outlines,
            Setting::InstsPerSecond(ips) => self.insts_per_second = ips,
            Setting::ColorLerpRate(rate) => self.color_lerp_rate = rate,
            Setting::Extension(mode) => self.mode = mode,
            Setting::Volume(volume) => self.volume = volume,
        }
        self
    }
    /// Instructions to run per 60 Hz frame. Always at least one.
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// assert_eq!(8, Config::default().insts_per_frame());
    /// ```
    pub fn insts_per_frame(&self) -> usize {
        (self.insts_per_second / FRAME_RATE).max(1) as usize
    }
}

/// One `key=value` argument
#[derive(Clone, Debug, PartialEq)]
pub enum Setting {
    /// `name=<path>`: a ROM, relative to [ROM_DIR]
    Name(PathBuf),
    /// `scale=<int>`: host pixels per Chip-8 pixel, at least 1
    Scale(usize),
    /// `pixelOutlines=<bool>`
    PixelOutlines(bool),
    /// `instsPerSecond=<int>`: at least 1
    InstsPerSecond(u32),
    /// `colorLerpRate=<float>`: in `(0, 1]`
    ColorLerpRate(f32),
    /// `extension=<mode>`: see [Mode]'s [FromStr] impl
    Extension(Mode),
    /// `volume=<int>`: in `0..=32767`
    Volume(i16),
}

impl FromStr for Setting {
    type Err = Error;

    fn from_str(arg: &str) -> Result<Self> {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(Error::MalformedSetting { arg: arg.into() });
        };
        let invalid = || Error::InvalidSetting {
            key: key.into(),
            value: value.into(),
        };
        Ok(match key {
            "name" if !value.is_empty() => Setting::Name(Path::new(ROM_DIR).join(value)),
            "name" => return Err(invalid()),
            "scale" => match value.parse::<usize>() {
                Ok(scale) if scale > 0 => Setting::Scale(scale),
                _ => return Err(invalid()),
            },
            "pixelOutlines" => Setting::PixelOutlines(value.parse().map_err(|_| invalid())?),
            "instsPerSecond" => match value.parse::<u32>() {
                Ok(ips) if ips > 0 => Setting::InstsPerSecond(ips),
                _ => return Err(invalid()),
            },
            "colorLerpRate" => match value.parse::<f32>() {
                Ok(rate) if rate > 0.0 && rate <= MAX_RATE => Setting::ColorLerpRate(rate),
                _ => return Err(invalid()),
            },
            "extension" => Setting::Extension(value.parse().map_err(|_| invalid())?),
            "volume" => match value.parse::<i16>() {
                Ok(volume) if volume >= 0 => Setting::Volume(volume),
                _ => return Err(invalid()),
            },
            _ => return Err(Error::UnknownSetting { key: key.into() }),
        })
    }
}
