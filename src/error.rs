use thiserror::Error;

/// Error types for the pso-opt library.
#[derive(Error, Debug)]
pub enum PsoError {
    /// Error for an invalid optimization configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error indicating a mismatch between objective and bounds dimensions.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Generic error for cases that don't fit the other categories.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for pso-opt operations.
pub type Result<T> = std::result::Result<T, PsoError>;

/// Extensions for converting from other error types.
impl From<String> for PsoError {
    fn from(s: String) -> Self {
        PsoError::Other(s)
    }
}

impl From<&str> for PsoError {
    fn from(s: &str) -> Self {
        PsoError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PsoError::InvalidConfig("num_particles must be >= 1".to_string());
        assert!(format!("{}", err).contains("num_particles must be >= 1"));

        let err = PsoError::DimensionMismatch("expected 2 bounds, got 3".to_string());
        assert!(format!("{}", err).contains("expected 2 bounds, got 3"));
    }

    #[test]
    fn test_error_conversion() {
        let str_err: PsoError = "test error".into();
        match str_err {
            PsoError::Other(s) => assert_eq!(s, "test error"),
            _ => panic!("Expected Other variant"),
        }
    }
}
