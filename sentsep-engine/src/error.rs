//! Layered error types
//!
//! Core errors are wrapped; configuration and I/O failures are added here.

use sentsep_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core error (cursor bookkeeping)
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// No embedded preset with this name
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// The requested preset name
        name: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// TOML parse error
    #[error("parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::ParseError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_wraps() {
        let err: EngineError = CoreError::ContextNotEntered {
            name: "code".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "core error: context 'code' was never entered");
    }

    #[test]
    fn test_unknown_preset_display() {
        let err = EngineError::UnknownPreset {
            name: "klingon".to_string(),
        };
        assert_eq!(err.to_string(), "unknown preset 'klingon'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = EngineError::from(io);
        assert!(matches!(err, EngineError::IoError(ref msg) if msg == "missing"));
    }
}
