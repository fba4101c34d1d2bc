// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)
//! A minifb window, which is both the screen and the keyboard

use minifb::*;
use quirk8::{
    error::Result,
    prelude::{Color, Fade},
    screen::{HEIGHT, WIDTH},
    Config, Control, Input, Keypad, Renderer, Screen,
};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct UIBuilder {
    pub scale: usize,
    pub outlines: bool,
    pub fg: Color,
    pub bg: Color,
    pub lerp_rate: f32,
    pub title: String,
    pub window_options: WindowOptions,
}

impl UIBuilder {
    pub fn new(config: &Config) -> Self {
        UIBuilder {
            scale: config.scale,
            outlines: config.pixel_outlines,
            fg: config.fg,
            bg: config.bg,
            lerp_rate: config.color_lerp_rate,
            title: title(&config.rom),
            ..Default::default()
        }
    }
    pub fn build(&self) -> Result<UI> {
        let fb = FrameBuffer::new(self);
        let window = Window::new(&self.title, fb.width, fb.height, self.window_options)?;
        Ok(UI {
            window,
            keyboard: Default::default(),
            fb,
            presented: false,
        })
    }
}

impl Default for UIBuilder {
    fn default() -> Self {
        UIBuilder {
            scale: 10,
            outlines: false,
            fg: Color::WHITE,
            bg: Color::BLACK,
            lerp_rate: 0.7,
            title: "quirk8".into(),
            window_options: WindowOptions {
                title: true,
                resize: false,
                ..Default::default()
            },
        }
    }
}

/// Window title for a ROM
pub fn title(rom: &Path) -> String {
    match rom.file_name() {
        Some(name) => format!("quirk8: {}", name.to_string_lossy()),
        None => "quirk8".into(),
    }
}

/// Host pixels, ready for minifb
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    scale: usize,
    outlines: bool,
    fade: Fade,
}

impl FrameBuffer {
    pub fn new(builder: &UIBuilder) -> Self {
        let scale = builder.scale.max(1);
        let (width, height) = (WIDTH * scale, HEIGHT * scale);
        FrameBuffer {
            buffer: vec![builder.bg.to_0rgb(); width * height],
            width,
            height,
            scale,
            outlines: builder.outlines,
            fade: Fade::new(builder.fg, builder.bg, builder.lerp_rate),
        }
    }
    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }
    pub fn fade(&mut self) -> &mut Fade {
        &mut self.fade
    }
    /// Fills the whole buffer with the background
    pub fn clear(&mut self) {
        self.fade.clear();
        self.buffer.fill(self.fade.bg().to_0rgb());
    }
    /// Steps the fade, then paints each cell as a `scale`-sized square
    pub fn draw(&mut self, screen: &Screen) -> &[u32] {
        let (scale, width, outlines) = (self.scale, self.width, self.outlines);
        let bg = self.fade.bg().to_0rgb();
        let cells = self.fade.update(screen);
        for (idx, (cell, &lit)) in cells.iter().zip(screen.pixels()).enumerate() {
            let (x0, y0) = (idx % WIDTH * scale, idx / WIDTH * scale);
            let color = cell.to_0rgb();
            for dy in 0..scale {
                let row = (y0 + dy) * width + x0;
                for dx in 0..scale {
                    let edge = dx == 0 || dy == 0 || dx == scale - 1 || dy == scale - 1;
                    self.buffer[row + dx] = if lit && outlines && edge { bg } else { color };
                }
            }
        }
        &self.buffer
    }
}

#[derive(Debug)]
pub struct UI {
    window: Window,
    keyboard: Vec<Key>,
    fb: FrameBuffer,
    presented: bool,
}

impl Renderer for UI {
    fn clear(&mut self) -> Result<()> {
        self.fb.clear();
        let FrameBuffer { width, height, .. } = self.fb;
        self.window
            .update_with_buffer(self.fb.buffer(), width, height)?;
        self.presented = true;
        Ok(())
    }
    fn render(&mut self, screen: &Screen) -> Result<()> {
        let FrameBuffer { width, height, .. } = self.fb;
        let buffer = self.fb.draw(screen);
        self.window.update_with_buffer(buffer, width, height)?;
        self.presented = true;
        Ok(())
    }
    fn adjust_fade(&mut self, delta: f32) {
        self.fb.fade().adjust_rate(delta);
    }
}

impl Input for UI {
    fn poll(&mut self, keys: &mut Keypad) -> Result<Vec<Control>> {
        // minifb only reads events when the window is updated
        if !self.presented {
            self.window.update();
        }
        self.presented = false;
        if !self.window.is_open() {
            return Ok(vec![Control::Quit]);
        }
        let held = self.window.get_keys();
        let mut controls = vec![];
        for key in self.keyboard.iter().filter(|key| !held.contains(key)) {
            if let Some(key) = identify_key(*key) {
                keys.release(key)?;
            }
        }
        for &key in held.iter().filter(|key| !self.keyboard.contains(key)) {
            if let Some(control) = identify_control(key) {
                controls.push(control);
            } else if let Some(key) = identify_key(key) {
                keys.press(key)?;
            }
        }
        self.keyboard = held;
        Ok(controls)
    }
}

/// Keys which drive the interpreter, rather than the program.
/// These take priority over [identify_key].
pub fn identify_control(key: Key) -> Option<Control> {
    match key {
        Key::Escape => Some(Control::Quit),
        Key::Space => Some(Control::Pause),
        Key::R => Some(Control::Reset),
        Key::O => Some(Control::VolumeDown),
        Key::P => Some(Control::VolumeUp),
        Key::J => Some(Control::FadeDown),
        Key::K => Some(Control::FadeUp),
        _ => None,
    }
}

pub fn identify_key(key: Key) -> Option<usize> {
    match key {
        Key::Key1 => Some(0x1),
        Key::Key2 => Some(0x2),
        Key::Key3 => Some(0x3),
        Key::Key4 => Some(0xc),
        Key::Q => Some(0x4),
        Key::W => Some(0x5),
        Key::E => Some(0x6),
        Key::R => Some(0xD),
        Key::A => Some(0x7),
        Key::S => Some(0x8),
        Key::D => Some(0x9),
        Key::F => Some(0xE),
        Key::Z => Some(0xA),
        Key::X => Some(0x0),
        Key::C => Some(0xB),
        Key::V => Some(0xF),
        _ => None,
    }
}
