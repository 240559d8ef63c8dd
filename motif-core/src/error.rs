//! Error types shared by every detector.

use thiserror::Error;

/// Result type alias for detector operations
pub type Result<T> = std::result::Result<T, VariationError>;

/// Failures a detector call can raise.
///
/// A window that simply does not match is never an error: detectors return
/// an empty list in that case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariationError {
    /// The pattern has no items, so no variation is defined
    #[error("invalid input: pattern must contain at least one item")]
    EmptyPattern,

    /// A configuration value is out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The value type cannot take part in the requested arithmetic
    #[error("unsupported operation: cannot {operation} {operand}")]
    UnsupportedOperation {
        operation: &'static str,
        operand: String,
    },

    /// Checked integer arithmetic overflowed
    #[error("arithmetic overflow: {lhs} {operation} {rhs}")]
    Overflow {
        operation: &'static str,
        lhs: String,
        rhs: String,
    },
}

impl VariationError {
    pub(crate) fn unsupported(operation: &'static str, operand: impl ToString) -> Self {
        VariationError::UnsupportedOperation {
            operation,
            operand: operand.to_string(),
        }
    }

    pub(crate) fn overflow(
        operation: &'static str,
        lhs: impl ToString,
        rhs: impl ToString,
    ) -> Self {
        VariationError::Overflow {
            operation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// True for the input-validation family (empty pattern, bad config)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            VariationError::EmptyPattern | VariationError::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            VariationError::EmptyPattern.to_string(),
            "invalid input: pattern must contain at least one item"
        );
        let err = VariationError::unsupported("subtract", "\"a\"");
        assert_eq!(err.to_string(), "unsupported operation: cannot subtract \"a\"");
        let err = VariationError::overflow("+", i64::MAX, 1);
        assert!(err.to_string().contains("9223372036854775807 + 1"));
    }

    #[test]
    fn test_invalid_input_family() {
        assert!(VariationError::EmptyPattern.is_invalid_input());
        assert!(VariationError::InvalidInput("epsilon".into()).is_invalid_input());
        assert!(!VariationError::unsupported("add", "x").is_invalid_input());
    }
}
