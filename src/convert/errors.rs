// ============================================================================
// Format Errors
// Error types for conversions and formatter lifecycle
// ============================================================================

use thiserror::Error;

/// Errors that can occur while formatting a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum FormatError {
    /// The value is outside the domain of the requested conversion
    #[error("invalid input for {operation}: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },

    /// Magnitude tier has no suffix and the overflow policy rejects clamping
    #[error("configuration exhausted: tier {tier} requested but only {available} suffixes configured")]
    ConfigurationExhausted { tier: usize, available: usize },

    /// Formatter configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The formatter was destroyed and can no longer be used
    #[error("formatter used after destroy")]
    UseAfterDestroy,
}

impl FormatError {
    pub(crate) fn invalid_input(operation: &'static str, reason: impl Into<String>) -> Self {
        FormatError::InvalidInput {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormatError::invalid_input("roman numeral", "must be >= 1").to_string(),
            "invalid input for roman numeral: must be >= 1"
        );
        assert_eq!(
            FormatError::ConfigurationExhausted {
                tier: 14,
                available: 13
            }
            .to_string(),
            "configuration exhausted: tier 14 requested but only 13 suffixes configured"
        );
        assert_eq!(
            FormatError::UseAfterDestroy.to_string(),
            "formatter used after destroy"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FormatError::UseAfterDestroy, FormatError::UseAfterDestroy);
        assert_ne!(
            FormatError::UseAfterDestroy,
            FormatError::InvalidConfig("x".to_string())
        );
    }
}
