use thiserror::Error;

/// Main error type for rankmetrics
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Unrecognized DCG method token
    #[error("Invalid method: {0} (expected \"standard\" or \"industry\")")]
    InvalidMethod(String),

    /// TOML parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient Result type using MetricsError
pub type Result<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MetricsError::InvalidMethod("log".to_string());
        assert!(err.to_string().contains("Invalid method"));
        assert!(err.to_string().contains("log"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: MetricsError = toml_err.into();
        assert!(matches!(err, MetricsError::Parse(_)));
    }
}
