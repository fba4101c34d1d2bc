// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The beeper: a flag and a volume, shared with whatever plays the sound

use log::debug;
use std::sync::{
    atomic::{AtomicBool, AtomicI16, Ordering},
    Arc,
};

/// Pitch of the tone, in Hz
pub const FREQUENCY: u32 = 440;
/// Sample rate used when the device doesn't ask for another
pub const SAMPLE_RATE: u32 = 44_100;
/// How far one volume control moves the volume
pub const VOLUME_STEP: i16 = 500;

/// Whether the tone should be heard, and how loud it is
///
/// Clones share the same state, so one end can live on an audio thread.
/// # Examples
/// ```rust
/// # use quirk8::*;
/// let tone = Tone::new(3000);
/// let speaker = tone.clone();
/// tone.set_active(true);
/// assert!(speaker.is_active());
/// assert_eq!(3500, tone.adjust_volume(500));
/// assert_eq!(3500, speaker.volume());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tone {
    active: Arc<AtomicBool>,
    volume: Arc<AtomicI16>,
}

impl Tone {
    /// Makes a silent [Tone] with the given volume, clamped to `0..=i16::MAX`
    pub fn new(volume: i16) -> Self {
        Tone {
            active: Arc::new(AtomicBool::new(false)),
            volume: Arc::new(AtomicI16::new(volume.max(0))),
        }
    }
    /// Starts or stops the tone
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }
    /// Whether the tone should be heard right now
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
    /// Peak amplitude of the tone
    pub fn volume(&self) -> i16 {
        self.volume.load(Ordering::Relaxed)
    }
    /// Moves the volume by `delta`, staying inside `0..=i16::MAX`.
    /// Returns the new volume.
    pub fn adjust_volume(&self, delta: i16) -> i16 {
        let volume = self.volume().saturating_add(delta).max(0);
        self.volume.store(volume, Ordering::Relaxed);
        debug!("volume: {volume}");
        volume
    }
}

/// A square wave which follows a [Tone]
///
/// Yields signed 16-bit mono samples forever. The wave only advances while the
/// tone is active, and is silent otherwise.
#[derive(Clone, Debug)]
pub struct SquareWave {
    tone: Tone,
    half_period: u32,
    index: u32,
}

impl SquareWave {
    /// Makes a wave at [FREQUENCY], for a device running at `sample_rate`
    pub fn new(tone: Tone, sample_rate: u32) -> Self {
        SquareWave {
            tone,
            half_period: (sample_rate / FREQUENCY / 2).max(1),
            index: 0,
        }
    }
    /// Gets the next sample
    pub fn next_sample(&mut self) -> i16 {
        if !self.tone.is_active() {
            return 0;
        }
        let volume = self.tone.volume();
        let high = (self.index / self.half_period) % 2 == 0;
        self.index = self.index.wrapping_add(1);
        if high {
            volume
        } else {
            -volume
        }
    }
}

impl Iterator for SquareWave {
    type Item = i16;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_sample())
    }
}
