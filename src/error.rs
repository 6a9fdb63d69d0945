//! Error types for field configuration.
//!
//! Grouping and error-state transitions are total and never fail. The only
//! fallible surface is turning external configuration (color strings, brand
//! names, JSON documents) into typed values.

use std::fmt;

/// Errors that can occur while parsing field configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A color string could not be parsed.
    InvalidColor {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A card brand name was not recognised.
    UnknownBrand {
        /// The rejected input.
        input: String,
    },

    /// The configuration document was malformed.
    Parse(String),

    /// The configuration source could not be read.
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { input, reason } => {
                write!(f, "invalid color '{}': {}", input.escape_default(), reason)
            }

            Self::UnknownBrand { input } => {
                write!(f, "unknown card brand '{}'", input.escape_default())
            }

            Self::Parse(msg) => write!(f, "config parse error: {}", msg),

            Self::Io(msg) => write!(f, "config I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::InvalidColor {
                input: "#12".to_string(),
                reason: "expected 6 or 8 hex digits"
            }
            .to_string(),
            "invalid color '#12': expected 6 or 8 hex digits"
        );

        assert_eq!(
            ConfigError::UnknownBrand {
                input: "bitcoin".to_string()
            }
            .to_string(),
            "unknown card brand 'bitcoin'"
        );

        assert_eq!(
            ConfigError::Parse("eof".to_string()).to_string(),
            "config parse error: eof"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(ConfigError::from(io), ConfigError::Io("missing".to_string()));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
    }
}
