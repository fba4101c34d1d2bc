//! Testing quirk8's public API: whole programs, run a frame at a time
use quirk8::*;
use std::collections::VecDeque;

/// One thing the pretend user does
#[derive(Clone, Copy, Debug)]
enum Event {
    Press(usize),
    Release(usize),
    Do(Control),
}
use Event::*;

/// A host which plays back a script, one entry per frame, and records
/// every screen it's shown. When the script runs out, it asks to quit.
#[derive(Debug, Default)]
struct Script {
    frames: VecDeque<Vec<Event>>,
    screens: Vec<Screen>,
    cleared: usize,
    fade: f32,
}

impl Script {
    fn new(frames: impl IntoIterator<Item = Vec<Event>>) -> Self {
        Script {
            frames: frames.into_iter().collect(),
            ..Default::default()
        }
    }
    /// `count` frames where nothing happens
    fn idle(count: usize) -> Self {
        Self::new(vec![vec![]; count])
    }
}

impl Input for Script {
    fn poll(&mut self, keys: &mut Keypad) -> Result<Vec<Control>> {
        let Some(events) = self.frames.pop_front() else {
            return Ok(vec![Control::Quit]);
        };
        let mut controls = vec![];
        for event in events {
            match event {
                Press(key) => {
                    keys.press(key)?;
                }
                Release(key) => {
                    keys.release(key)?;
                }
                Do(control) => controls.push(control),
            }
        }
        Ok(controls)
    }
}

impl Renderer for Script {
    fn clear(&mut self) -> Result<()> {
        self.cleared += 1;
        Ok(())
    }
    fn render(&mut self, screen: &Screen) -> Result<()> {
        self.screens.push(screen.clone());
        Ok(())
    }
    fn adjust_fade(&mut self, delta: f32) {
        self.fade += delta;
    }
}

fn setup_environment(rom: &[u8]) -> Chip8 {
    Chip8::from_rom(rom.to_vec(), Mode::Chip8, 8).unwrap()
}

mod programs {
    use super::*;

    #[test]
    fn draws_a_glyph() {
        // cls; I = glyph for v1 (0xa); draw 5 rows at (v0, v0); halt
        let mut ch8 = setup_environment(&[
            0x00, 0xe0, 0x61, 0x0a, 0xf1, 0x29, 0x60, 0x00, 0xd0, 0x05, 0x12, 0x0a,
        ]);
        let mut host = Script::idle(1);
        ch8.run(&mut host).unwrap();
        assert_eq!(host.cleared, 1);
        assert_eq!(host.screens.len(), 1);
        let screen = &host.screens[0];
        // "A" is f0 90 f0 90 90
        let rows = [0xf0u8, 0x90, 0xf0, 0x90, 0x90];
        for (y, row) in rows.iter().enumerate() {
            for x in 0..8 {
                let lit = row & (0x80 >> x) != 0;
                assert_eq!(screen.get(x, y), Some(lit), "({x}, {y})");
            }
        }
        assert_eq!(screen.pixels().iter().filter(|&&p| p).count(), 14);
        assert_eq!(ch8.cpu.v()[0xf], 0);
    }

    #[test]
    fn waits_for_a_key_press_and_release() {
        // v3 = key; v4 = 1; halt
        let mut ch8 = setup_environment(&[0xf3, 0x0a, 0x64, 0x01, 0x12, 0x04]);
        let mut host = Script::new([vec![], vec![Press(5)], vec![], vec![Release(5)]]);
        for _ in 0..3 {
            ch8.frame(&mut host).unwrap();
        }
        assert_eq!(ch8.cpu.pc(), 0x200, "still held");
        assert_eq!(ch8.cpu.v()[4], 0);

        ch8.frame(&mut host).unwrap();
        assert_eq!(ch8.cpu.v()[3], 5);
        assert_eq!(ch8.cpu.v()[4], 1);
        assert_eq!(ch8.cpu.pc(), 0x204);
    }

    #[test]
    fn skips_on_held_keys() {
        // v0 = 0xe; if key v0 is held, skip v1 = 1; halt
        let mut ch8 = setup_environment(&[0x60, 0x0e, 0xe0, 0x9e, 0x61, 0x01, 0x12, 0x06]);
        let mut host = Script::new([vec![Press(0xe)]]);
        ch8.run(&mut host).unwrap();
        assert_eq!(ch8.cpu.v()[1], 0);

        let mut ch8 = setup_environment(&[0x60, 0x0e, 0xe0, 0x9e, 0x61, 0x01, 0x12, 0x06]);
        let mut host = Script::idle(1);
        ch8.run(&mut host).unwrap();
        assert_eq!(ch8.cpu.v()[1], 1);
    }

    #[test]
    fn unknown_opcodes_are_skipped() {
        // 5121 and 8128 don't exist; v0 = 7; halt
        let mut ch8 = setup_environment(&[0x51, 0x21, 0x81, 0x28, 0x60, 0x07, 0x12, 0x06]);
        ch8.run(&mut Script::idle(1)).unwrap();
        assert_eq!(ch8.cpu.v()[0], 7);
    }

    #[test]
    fn runaway_recursion_stops_the_loop() {
        let mut ch8 = setup_environment(&[0x22, 0x00]);
        let result = ch8.run(&mut Script::idle(10));
        assert!(matches!(result, Err(Error::StackOverflow { pc: 0x200 })));
        assert!(!ch8.tone().is_active());
    }

    #[test]
    fn return_without_call() {
        let mut ch8 = setup_environment(&[0x00, 0xee]);
        let result = ch8.run(&mut Script::idle(1));
        assert!(matches!(result, Err(Error::StackUnderflow { pc: 0x200 })));
    }
}

mod pacing {
    use super::*;

    /// v0 = 120; delay = v0; halt
    const DELAY: [u8; 6] = [0x60, 0x78, 0xf0, 0x15, 0x12, 0x04];

    #[test]
    fn timers_tick_once_per_frame() {
        let mut ch8 = setup_environment(&DELAY);
        let mut host = Script::idle(10);
        ch8.run(&mut host).unwrap();
        assert_eq!(ch8.cpu.delay(), 110);
        assert_eq!(ch8.cpu.cycle(), 80);
        assert_eq!(host.screens.len(), 10);
    }

    #[test]
    fn paused_frames_do_nothing() {
        let mut ch8 = setup_environment(&DELAY);
        let mut host = Script::new([
            vec![],
            vec![Do(Control::Pause)],
            vec![],
            vec![],
            vec![Do(Control::Pause)],
            vec![],
        ]);
        ch8.run(&mut host).unwrap();
        assert_eq!(ch8.cpu.delay(), 117);
        assert_eq!(ch8.cpu.cycle(), 24);
        assert_eq!(host.screens.len(), 3);
    }

    #[test]
    fn insts_per_frame_from_config() {
        let config = Config::from_args(["instsPerSecond=600"]).unwrap();
        let mut ch8 = Chip8::from_rom(DELAY.to_vec(), config.mode, config.insts_per_frame()).unwrap();
        ch8.run(&mut Script::idle(3)).unwrap();
        assert_eq!(ch8.cpu.cycle(), 30);
    }

    #[test]
    fn tone_follows_sound_timer() {
        // v0 = 2; sound = v0; halt
        let mut ch8 = setup_environment(&[0x60, 0x02, 0xf0, 0x18, 0x12, 0x04]);
        let mut host = Script::idle(4);
        let mut heard = vec![];
        for _ in 0..4 {
            ch8.frame(&mut host).unwrap();
            heard.push(ch8.tone().is_active());
        }
        assert_eq!(heard, [true, true, false, false]);
    }

    #[test]
    fn pause_silences_the_tone() {
        let mut ch8 = setup_environment(&[0x60, 0xff, 0xf0, 0x18, 0x12, 0x04]);
        let mut host = Script::new([vec![], vec![Do(Control::Pause)]]);
        ch8.frame(&mut host).unwrap();
        assert!(ch8.tone().is_active());
        assert_eq!(ch8.frame(&mut host).unwrap(), State::Paused);
        assert!(!ch8.tone().is_active());
    }
}

mod lifecycle {
    use super::*;

    /// v0 += 1; loop
    const COUNTER: [u8; 4] = [0x70, 0x01, 0x12, 0x00];

    #[test]
    fn reset_starts_over() {
        let mut ch8 = setup_environment(&COUNTER);
        let mut host = Script::new([vec![], vec![], vec![Do(Control::Reset)]]);
        for _ in 0..2 {
            ch8.frame(&mut host).unwrap();
        }
        assert_eq!(ch8.cpu.v()[0], 8);
        ch8.frame(&mut host).unwrap();
        assert_eq!(ch8.cpu.v()[0], 4);
        assert_eq!(ch8.cpu.cycle(), 8);
    }

    #[test]
    fn reset_clears_the_machine() {
        // draw something, load the keypad, then reset
        let mut ch8 = setup_environment(&[0xa0, 0x00, 0xd0, 0x05, 0x12, 0x04]);
        let mut host = Script::new([vec![Press(3)]]);
        ch8.frame(&mut host).unwrap();
        assert_ne!(ch8.bus.screen, Screen::new());
        ch8.bus.mem.write(0x300, 0xaa);
        ch8.reset().unwrap();
        assert_eq!(ch8.bus.screen, Screen::new());
        assert_eq!(ch8.bus.keys, Keypad::default());
        assert_eq!(ch8.bus.mem.read(0x300), 0);
        assert_eq!(ch8.bus.mem.read_word(0x200), 0xa000);
        assert_eq!(ch8.cpu.pc(), 0x200);
    }

    #[test]
    fn reset_twice_is_reset_once() {
        let mut ch8 = setup_environment(&COUNTER);
        ch8.frame(&mut Script::idle(1)).unwrap();
        ch8.reset().unwrap();
        let (cpu, bus) = (ch8.cpu.clone(), ch8.bus.clone());
        ch8.reset().unwrap();
        assert_eq!(cpu, ch8.cpu);
        assert_eq!(bus, ch8.bus);
    }

    #[test]
    fn quit_from_pause() {
        let mut ch8 = setup_environment(&COUNTER);
        let mut host = Script::new([vec![Do(Control::Pause)], vec![Do(Control::Quit)]]);
        ch8.run(&mut host).unwrap();
        assert_eq!(ch8.state(), State::Quit);
        assert_eq!(ch8.cpu.cycle(), 0);
    }

    #[test]
    fn fade_controls_reach_the_renderer() {
        let mut ch8 = setup_environment(&COUNTER);
        let mut host = Script::new([vec![Do(Control::FadeUp), Do(Control::FadeUp)], vec![Do(Control::FadeDown)]]);
        ch8.run(&mut host).unwrap();
        assert!((host.fade - 0.1).abs() < 1e-6);
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("quirk8-{}.ch8", std::process::id()));
        std::fs::write(&path, COUNTER).unwrap();
        let config = Config {
            rom: path.clone(),
            volume: 1000,
            ..Default::default()
        };
        let ch8 = Chip8::new(&config).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(ch8.rom(), &COUNTER);
        assert_eq!(ch8.bus.mem.read_word(0x200), 0x7001);
        assert_eq!(ch8.tone().volume(), 1000);
        assert_eq!(ch8.insts_per_frame(), 8);
    }

    #[test]
    fn rom_too_large() {
        assert!(matches!(
            Chip8::from_rom(vec![0; 0xe01], Mode::Chip8, 8),
            Err(Error::RomTooLarge { size: 0xe01, capacity: 0xe00 })
        ));
    }
}

mod structs {
    use super::*;
    #[test]
    fn error() {
        let error = Error::InvalidSetting {
            key: "scale".into(),
            value: "big".into(),
        };
        assert_eq!(error.to_string(), "invalid value \"big\" for parameter \"scale\"");
        println!("{error:?}");
    }
    #[test]
    fn chip8() {
        let ch8 = setup_environment(&[]);
        let ch82 = ch8.clone(); // Clone
        assert_eq!(ch8.cpu, ch82.cpu);
        println!("{ch8:?}"); // Debug
    }
    #[test]
    fn screen_display() {
        let mut screen = Screen::new();
        screen.draw(0, 0, &[0xff]);
        assert!(!screen.to_string().is_empty());
    }
}
