// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised by the storage-facing parts of the crate.
///
/// The command interpreter never produces an [`Error`]; a command that
/// cannot be understood is an ordinary [`crate::ParseOutcome::Failure`]
/// value, not an error.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preset(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preset(e) => write!(f, "Preset Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Preset(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
