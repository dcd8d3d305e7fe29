//! Error types for the review core

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Review core errors
///
/// None of these surface from the rendering paths (`visual`, `classify`,
/// `lookup`); those degrade to defaults instead. They come from the explicit
/// strict APIs and from startup (config, logging, seed catalog).
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Analysis record not found: {0}")]
    RecordNotFound(String),

    #[error("Confidence score {score} out of range [{min}, {max}]")]
    ScoreOutOfRange { score: i64, min: u8, max: u8 },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for ReviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::Catalog(err.to_string())
    }
}

impl From<::config::ConfigError> for ReviewError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReviewError::RecordNotFound("CER-1".to_string());
        assert_eq!(err.to_string(), "Analysis record not found: CER-1");

        let err = ReviewError::ScoreOutOfRange { score: 140, min: 0, max: 100 };
        assert_eq!(err.to_string(), "Confidence score 140 out of range [0, 100]");
    }

    #[test]
    fn test_from_serde_error() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ReviewError = parse.unwrap_err().into();
        assert!(matches!(err, ReviewError::Catalog(_)));
    }
}
