//! Error types for the analysis and generation core

use thiserror::Error;

/// Errors returned by the nutrition analyzer and the routine generator.
///
/// Everything else (empty logs, empty exercise pools, nutrients without a
/// target) degrades to an empty or zeroed result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitnessError {
    /// Caller passed a structurally invalid parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FitnessError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FitnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = FitnessError::invalid("frequency must be between 2 and 7, got 9");
        assert_eq!(
            err.to_string(),
            "Invalid argument: frequency must be between 2 and 7, got 9"
        );
    }
}
