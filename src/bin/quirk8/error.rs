// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)
//! Everything that can stop the frontend

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Error originated in [quirk8]
    #[error(transparent)]
    Quirk8(#[from] quirk8::Error),
    #[error("no audio output device available")]
    NoOutputDevice,
    #[error("unsupported sample format: {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),
    #[error(transparent)]
    SupportedConfigs(#[from] cpal::SupportedStreamConfigsError),
    #[error(transparent)]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error(transparent)]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error(transparent)]
    PlayStream(#[from] cpal::PlayStreamError),
}
