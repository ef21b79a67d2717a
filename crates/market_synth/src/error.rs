//! Error types for the synthetic market data generators.

use market_core::types::DateError;
use thiserror::Error;

use crate::config::ConfigError;

/// Generator error type
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid generator argument (e.g. zero simulations)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Date construction or schedule error
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// Table rendering error
    #[error("Render error: {0}")]
    Render(String),
}

impl SynthError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SynthError::invalid_argument("n_simulations must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument: n_simulations must be at least 1"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: SynthError = ConfigError::Validation(vec!["bad band".to_string()]).into();
        assert!(matches!(err, SynthError::Config(_)));
        assert!(err.to_string().contains("bad band"));
    }

    #[test]
    fn test_from_date_error() {
        let err: SynthError = DateError::ParseError("x".to_string()).into();
        assert!(matches!(err, SynthError::Date(_)));
    }
}
