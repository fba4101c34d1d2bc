// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! quirk8: A chip-8 interpreter in Rust
//!
//! Settings are passed as `key=value`:
//! `name`, `scale`, `pixelOutlines`, `instsPerSecond`, `colorLerpRate`,
//! `extension`, and `volume`.

mod error;
mod speaker;
mod ui;

use error::Result;
use gumdrop::*;
use log::warn;
use owo_colors::OwoColorize;
use quirk8::{Chip8, Config, Setting};
use speaker::Speaker;
use ui::*;

pub fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{}", e.bold().red());
        std::process::exit(1);
    }
}

#[derive(Clone, Debug, PartialEq, Options)]
struct Arguments {
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(
        free,
        help = "Settings, as key=value (name, scale, pixelOutlines, instsPerSecond, colorLerpRate, extension, volume)"
    )]
    settings: Vec<Setting>,
}

fn run() -> Result<()> {
    let options = Arguments::parse_args_default_or_exit();
    let config = Config::from_settings(options.settings);
    let mut ch8 = Chip8::new(&config)?;
    // A missing sound card shouldn't stop the game
    let _speaker = Speaker::new(ch8.tone().clone())
        .map_err(|e| warn!("no sound: {e}"))
        .ok();
    let mut ui = UIBuilder::new(&config).build()?;
    ch8.run(&mut ui)?;
    Ok(())
}
