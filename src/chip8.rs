// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Runs a ROM: loading, resetting, pausing, and pacing frames at 60 Hz

use crate::{
    bus::Bus,
    config::{Config, FRAME_RATE},
    cpu::{mode::Mode, CPU},
    error::{Error, Result},
    io::{Control, Input, Renderer},
    tone::{Tone, VOLUME_STEP},
};
use log::{debug, info};
use std::{
    path::Path,
    time::{Duration, Instant},
};

/// How far one fade control moves the fade rate
pub const FADE_STEP: f32 = 0.1;

/// What the interpreter is currently doing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    /// Executing instructions every frame
    #[default]
    Running,
    /// Only listening for input
    Paused,
    /// Done. Nothing leaves this state.
    Quit,
}

/// A Chip-8 machine with a ROM in it
#[derive(Clone, Debug)]
pub struct Chip8 {
    /// The processor
    pub cpu: CPU,
    /// Memory, screen, and keypad
    pub bus: Bus,
    rom: Vec<u8>,
    state: State,
    tone: Tone,
    insts_per_frame: usize,
}

impl Chip8 {
    /// Loads the ROM named in the [Config], and gets ready to run it
    pub fn new(config: &Config) -> Result<Self> {
        let mut ch8 = Self::from_rom(Vec::new(), config.mode, config.insts_per_frame())?;
        ch8.tone = Tone::new(config.volume);
        ch8.load(&config.rom)?;
        Ok(ch8)
    }
    /// Builds a machine around a ROM image which is already in memory
    /// # Examples
    /// ```rust
    /// # use quirk8::*;
    /// let ch8 = Chip8::from_rom(vec![0x12, 0x00], Mode::Chip8, 8).unwrap();
    /// assert_eq!(0x1200, ch8.bus.mem.read_word(0x200));
    /// assert_eq!(State::Running, ch8.state());
    /// ```
    pub fn from_rom(rom: Vec<u8>, mode: Mode, insts_per_frame: usize) -> Result<Self> {
        Ok(Chip8 {
            cpu: CPU::new(mode),
            bus: Bus::with_program(&rom)?,
            rom,
            state: State::Running,
            tone: Tone::default(),
            insts_per_frame: insts_per_frame.max(1),
        })
    }
    /// Reads a ROM from disk, and restarts the machine with it
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let rom = std::fs::read(path).map_err(|source| Error::RomLoad {
            path: path.to_owned(),
            source,
        })?;
        // Check the size before throwing the old ROM away
        Bus::with_program(&rom)?;
        info!("loaded {} ({} bytes)", path.display(), rom.len());
        self.rom = rom;
        self.state = State::Running;
        self.reset()
    }
    /// Puts the machine back the way it was right after loading the ROM.
    ///
    /// Does nothing once the machine has quit.
    pub fn reset(&mut self) -> Result<&mut Self> {
        if self.state == State::Quit {
            return Ok(self);
        }
        self.cpu.reset();
        self.bus = Bus::with_program(&self.rom)?;
        self.tone.set_active(false);
        self.state = State::Running;
        info!("reset");
        Ok(self)
    }
    /// Flips between [State::Running] and [State::Paused]
    pub fn toggle_pause(&mut self) -> State {
        self.state = match self.state {
            State::Running => {
                self.tone.set_active(false);
                info!("paused");
                State::Paused
            }
            State::Paused => {
                info!("resumed");
                State::Running
            }
            State::Quit => State::Quit,
        };
        self.state
    }
    /// Stops the machine for good
    pub fn quit(&mut self) {
        if self.state != State::Quit {
            info!("quit");
        }
        self.tone.set_active(false);
        self.state = State::Quit;
    }
    /// What the machine is currently doing
    pub fn state(&self) -> State {
        self.state
    }
    /// The ROM image, as loaded
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }
    /// The beeper, for handing to a speaker
    pub fn tone(&self) -> &Tone {
        &self.tone
    }
    /// How many instructions run each frame
    pub fn insts_per_frame(&self) -> usize {
        self.insts_per_frame
    }
    /// Acts on one request from the host
    pub fn handle(&mut self, control: Control, renderer: &mut impl Renderer) -> Result<()> {
        match control {
            Control::Quit => self.quit(),
            Control::Pause => {
                self.toggle_pause();
            }
            Control::Reset => {
                self.reset()?;
            }
            Control::VolumeDown => {
                self.tone.adjust_volume(-VOLUME_STEP);
            }
            Control::VolumeUp => {
                self.tone.adjust_volume(VOLUME_STEP);
            }
            Control::FadeDown => renderer.adjust_fade(-FADE_STEP),
            Control::FadeUp => renderer.adjust_fade(FADE_STEP),
        }
        Ok(())
    }
    /// Runs one 60 Hz frame on the given host, and returns the [State] afterward
    ///
    /// Polls the input once. If still running afterward, executes one frame's
    /// worth of instructions, renders, ticks the timers, and sets the tone.
    /// While paused, nothing but the input moves, and the tone is silent.
    pub fn frame(&mut self, host: &mut (impl Input + Renderer)) -> Result<State> {
        for control in host.poll(&mut self.bus.keys)? {
            debug!("control: {control:?}");
            self.handle(control, host)?;
        }
        match self.state {
            State::Running => {
                self.cpu.multistep(&mut self.bus, self.insts_per_frame)?;
                host.render(&self.bus.screen)?;
                let beeping = self.cpu.tick_timers();
                self.tone.set_active(beeping);
            }
            State::Paused | State::Quit => self.tone.set_active(false),
        }
        Ok(self.state)
    }
    /// Runs frames until something asks to quit, sleeping out the rest of
    /// each 1/60th of a second
    ///
    /// Errors from the interpreter or the host stop the loop, and are returned.
    pub fn run(&mut self, host: &mut (impl Input + Renderer)) -> Result<()> {
        let rate = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);
        host.clear()?;
        let result = loop {
            let ft = Instant::now();
            match self.frame(host) {
                Ok(State::Quit) => break Ok(()),
                Ok(_) => std::thread::sleep(rate.saturating_sub(ft.elapsed())),
                Err(e) => break Err(e),
            }
        };
        self.tone.set_active(false);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keypad::Keypad, screen::Screen};

    /// Counts what it was asked to do, and hands out queued [Control]s
    #[derive(Debug, Default)]
    struct Counter {
        renders: usize,
        fade: f32,
        controls: Vec<Control>,
    }
    impl Input for Counter {
        fn poll(&mut self, _: &mut Keypad) -> Result<Vec<Control>> {
            Ok(std::mem::take(&mut self.controls))
        }
    }
    impl Renderer for Counter {
        fn clear(&mut self) -> Result<()> {
            Ok(())
        }
        fn render(&mut self, _: &Screen) -> Result<()> {
            self.renders += 1;
            Ok(())
        }
        fn adjust_fade(&mut self, delta: f32) {
            self.fade += delta;
        }
    }

    fn setup_environment() -> Chip8 {
        // v0 = 3; sound = v0; delay = v0; loop forever
        Chip8::from_rom(vec![0x60, 0x03, 0xf0, 0x18, 0xf0, 0x15, 0x12, 0x06], Mode::Chip8, 4)
            .unwrap()
    }

    #[test]
    fn pause_toggles() {
        let mut ch8 = setup_environment();
        assert_eq!(ch8.toggle_pause(), State::Paused);
        assert_eq!(ch8.toggle_pause(), State::Running);
    }

    #[test]
    fn quit_is_final() {
        let mut ch8 = setup_environment();
        ch8.quit();
        assert_eq!(ch8.toggle_pause(), State::Quit);
        ch8.reset().unwrap();
        assert_eq!(ch8.state(), State::Quit);
    }

    #[test]
    fn reset_resumes() {
        let mut ch8 = setup_environment();
        ch8.toggle_pause();
        ch8.reset().unwrap();
        assert_eq!(ch8.state(), State::Running);
    }

    #[test]
    fn controls() {
        let mut ch8 = setup_environment();
        let mut renderer = Counter::default();
        let volume = ch8.tone().volume();
        ch8.handle(Control::VolumeUp, &mut renderer).unwrap();
        assert_eq!(ch8.tone().volume(), volume + VOLUME_STEP);
        ch8.handle(Control::VolumeDown, &mut renderer).unwrap();
        assert_eq!(ch8.tone().volume(), volume);
        ch8.handle(Control::FadeDown, &mut renderer).unwrap();
        assert_eq!(renderer.fade, -FADE_STEP);
        ch8.handle(Control::Pause, &mut renderer).unwrap();
        assert_eq!(ch8.state(), State::Paused);
        ch8.handle(Control::Reset, &mut renderer).unwrap();
        assert_eq!(ch8.state(), State::Running);
        ch8.handle(Control::Quit, &mut renderer).unwrap();
        assert_eq!(ch8.state(), State::Quit);
    }

    #[test]
    fn frames() {
        let mut ch8 = setup_environment();
        let mut host = Counter::default();
        // all four instructions, then timers tick once
        assert_eq!(ch8.frame(&mut host).unwrap(), State::Running);
        assert_eq!((ch8.cpu.sound(), ch8.cpu.delay()), (2, 2));
        assert!(ch8.tone().is_active());
        assert_eq!(host.renders, 1);

        host.controls.push(Control::Pause);
        assert_eq!(ch8.frame(&mut host).unwrap(), State::Paused);
        assert_eq!((ch8.cpu.sound(), ch8.cpu.delay()), (2, 2));
        assert!(!ch8.tone().is_active());
        assert_eq!(host.renders, 1);

        host.controls.push(Control::Pause);
        ch8.frame(&mut host).unwrap();
        ch8.frame(&mut host).unwrap();
        // sound was 1 going into the last frame
        assert!(ch8.tone().is_active());
        ch8.frame(&mut host).unwrap();
        assert!(!ch8.tone().is_active());
        assert_eq!(host.renders, 4);

        host.controls.push(Control::Quit);
        assert_eq!(ch8.frame(&mut host).unwrap(), State::Quit);
        ch8.run(&mut host).unwrap();
    }

    #[test]
    fn missing_rom() {
        let config = Config {
            rom: "this/rom/does/not/exist.ch8".into(),
            ..Default::default()
        };
        match Chip8::new(&config) {
            Err(Error::RomLoad { path, source }) => {
                assert_eq!(path, config.rom);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected RomLoad, got {other:?}"),
        }
    }
}
