//! Error types

use std::fmt;

/// Main error type
#[derive(Debug, Clone)]
pub enum WaveError {
    Header { message: String },
    Format { message: String },
    Data { message: String },
    Unsupported { message: String },
    Config { message: String },
    Io { message: String },
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header { message } => write!(f, "Header error: {}", message),
            Self::Format { message } => write!(f, "Format error: {}", message),
            Self::Data { message } => write!(f, "Data error: {}", message),
            Self::Unsupported { message } => write!(f, "Unsupported: {}", message),
            Self::Config { message } => write!(f, "Config error: {}", message),
            Self::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for WaveError {}

impl WaveError {
    pub fn header<S: Into<String>>(msg: S) -> Self { Self::Header { message: msg.into() } }
    pub fn format<S: Into<String>>(msg: S) -> Self { Self::Format { message: msg.into() } }
    pub fn data<S: Into<String>>(msg: S) -> Self { Self::Data { message: msg.into() } }
    pub fn unsupported<S: Into<String>>(msg: S) -> Self { Self::Unsupported { message: msg.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }
}

pub type Result<T> = std::result::Result<T, WaveError>;

impl From<std::io::Error> for WaveError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}
