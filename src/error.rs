// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error type for quirk8

use std::path::PathBuf;
use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for quirk8.
#[derive(Debug, Error)]
pub enum Error {
    /// The ROM file could not be opened or read
    #[error("failed to load ROM {}: {source}", path.display())]
    RomLoad {
        /// The path that was requested
        path: PathBuf,
        /// The underlying [std::io::Error]
        source: std::io::Error,
    },
    /// The ROM doesn't fit between the entry point and the end of memory
    #[error("ROM is {size} bytes, but only {capacity} bytes of program space exist")]
    RomTooLarge {
        /// Size of the offending ROM
        size: usize,
        /// Bytes available from the entry point onward
        capacity: usize,
    },
    /// A `2nnn` was issued with every stack slot in use
    #[error("stack overflow: call at {pc:03x} with a full stack")]
    StackOverflow {
        /// Address of the offending call
        pc: u16,
    },
    /// A `00ee` was issued with nothing on the stack
    #[error("stack underflow: return at {pc:03x} with an empty stack")]
    StackUnderflow {
        /// Address of the offending return
        pc: u16,
    },
    /// Tried to press a key that doesn't exist
    #[error("tried to press key {key:X} which does not exist")]
    InvalidKey {
        /// The offending key
        key: usize,
    },
    /// Tried to get/set an out-of-bounds register
    #[error("tried to access register v{reg:X} which does not exist")]
    InvalidRegister {
        /// The offending register
        reg: usize,
    },
    /// Tried to convert string into mode, but it did not match.
    #[error("no suitable conversion of \"{mode}\" into Mode")]
    InvalidMode {
        /// The string which failed to become a mode
        mode: String,
    },
    /// A setting used a key nobody understands
    #[error("unknown parameter: \"{key}\"")]
    UnknownSetting {
        /// The offending key
        key: String,
    },
    /// A setting wasn't of the form `key=value`
    #[error("expected key=value, got \"{arg}\"")]
    MalformedSetting {
        /// The offending argument
        arg: String,
    },
    /// A setting's value couldn't be parsed, or was out of range
    #[error("invalid value \"{value}\" for parameter \"{key}\"")]
    InvalidSetting {
        /// The key of the setting
        key: String,
        /// The offending value
        value: String,
    },
    #[cfg(feature = "minifb")]
    /// Error originated in [minifb]
    #[error(transparent)]
    MinifbError(#[from] minifb::Error),
}
