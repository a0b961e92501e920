//! Error types.

use thiserror::Error;

use crate::config::{MAX_LENGTH, MIN_LENGTH};

/// Errors raised at the controller and configuration boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown character set '{0}'")]
    UnknownCharacterSet(String),

    #[error("unknown mode '{0}', expected 'characters' or 'words'")]
    UnknownMode(String),

    #[error("invalid length '{0}'")]
    InvalidLength(String),

    #[error("length {0} is outside {MIN_LENGTH}..={MAX_LENGTH}")]
    LengthOutOfRange(i64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to write configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Classified failure returned by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Characters mode with no enabled character set.
    #[error("no character sets are enabled")]
    NoCharsets,

    /// Retry budget exhausted before a sample satisfied every enabled set.
    #[error("retry budget exhausted without satisfying the enabled character sets")]
    MaxRetries,

    #[error("{0}")]
    Other(String),
}

impl GenerateError {
    /// Whether this failure only means "no password for this configuration".
    pub fn is_suppressible(&self) -> bool {
        match self {
            GenerateError::NoCharsets | GenerateError::MaxRetries => true,
            GenerateError::Other(_) => false,
        }
    }

    /// Stable discriminator string.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::NoCharsets => "NO_CHARSETS",
            GenerateError::MaxRetries => "MAX_RETRIES",
            GenerateError::Other(_) => "OTHER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_failures_are_suppressible() {
        assert!(GenerateError::NoCharsets.is_suppressible());
        assert!(GenerateError::MaxRetries.is_suppressible());
        assert!(!GenerateError::Other("rng unavailable".into()).is_suppressible());
    }

    #[test]
    fn codes_match_discriminators() {
        assert_eq!(GenerateError::NoCharsets.code(), "NO_CHARSETS");
        assert_eq!(GenerateError::MaxRetries.code(), "MAX_RETRIES");
        assert_eq!(GenerateError::Other(String::new()).code(), "OTHER");
    }

    #[test]
    fn out_of_range_message_names_bounds() {
        let msg = Error::LengthOutOfRange(51).to_string();
        assert_eq!(msg, "length 51 is outside 10..=50");
    }
}
