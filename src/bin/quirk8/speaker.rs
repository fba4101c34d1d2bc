// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)
//! Plays the [Tone] through the default output device

use crate::error::{Error, Result};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, SampleFormat, SampleRate, SizedSample, Stream, StreamConfig,
};
use log::{error, info};
use quirk8::{
    tone::{SquareWave, SAMPLE_RATE},
    Tone,
};

/// Keeps the output stream alive. Sound stops when this is dropped.
pub struct Speaker {
    _stream: Stream,
}

impl Speaker {
    pub fn new(tone: Tone) -> Result<Self> {
        let device = cpal::default_host()
            .default_output_device()
            .ok_or(Error::NoOutputDevice)?;
        // Prefer 44.1 kHz, but take whatever the device wants if it can't
        let supported = match device.supported_output_configs()?.find(|range| {
            range.min_sample_rate().0 <= SAMPLE_RATE && SAMPLE_RATE <= range.max_sample_rate().0
        }) {
            Some(range) => range.with_sample_rate(SampleRate(SAMPLE_RATE)),
            None => device.default_output_config()?,
        };
        let format = supported.sample_format();
        let config: StreamConfig = supported.into();
        info!(
            "audio: {} Hz, {} channel(s), {format:?}",
            config.sample_rate.0, config.channels
        );
        let wave = SquareWave::new(tone, config.sample_rate.0);
        let stream = match format {
            SampleFormat::I16 => build::<i16>(&device, &config, wave)?,
            SampleFormat::U16 => build::<u16>(&device, &config, wave)?,
            SampleFormat::I32 => build::<i32>(&device, &config, wave)?,
            SampleFormat::F32 => build::<f32>(&device, &config, wave)?,
            format => return Err(Error::UnsupportedFormat(format)),
        };
        stream.play()?;
        Ok(Speaker { _stream: stream })
    }
}

fn build<T>(device: &Device, config: &StreamConfig, mut wave: SquareWave) -> Result<Stream>
where
    T: SizedSample + FromSample<i16>,
{
    let channels = config.channels as usize;
    Ok(device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                let value = T::from_sample(wave.next_sample());
                frame.fill(value);
            }
        },
        |err| error!("audio stream: {err}"),
        None,
    )?)
}
