// ============================================================================
// Arithmetic Errors
// Error types for validated arithmetic operations
// ============================================================================

use std::fmt;

/// Errors signaled by arithmetic operations.
///
/// Every error is terminal for the call that produced it: the library never
/// retries, never recovers internally, and never returns a partial result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArithmeticError {
    /// A non-numeric operand reached an operation that validates its inputs.
    ///
    /// Only multiplication, division, and square root perform this check;
    /// the reason string names the violated requirement.
    InvalidOperand {
        /// Requirement the operand failed, e.g. "Both arguments must be numbers".
        reason: &'static str,
    },
    /// Division with a divisor of exactly zero.
    ///
    /// Carries the dividend so the message can name the value that could not
    /// be divided.
    DivisionByZero {
        /// The value that was to be divided.
        dividend: f64,
    },
    /// Square root of a negative value.
    NegativeInput,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::InvalidOperand { reason } => write!(f, "{}", reason),
            ArithmeticError::DivisionByZero { dividend } => {
                write!(f, "Cannot divide {} by zero.", dividend)
            },
            ArithmeticError::NegativeInput => {
                write!(f, "Cannot calculate the square root of a negative number.")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ArithmeticError::DivisionByZero { dividend: 10.0 }.to_string(),
            "Cannot divide 10 by zero."
        );
        assert_eq!(
            ArithmeticError::DivisionByZero { dividend: 2.5 }.to_string(),
            "Cannot divide 2.5 by zero."
        );
        assert_eq!(
            ArithmeticError::NegativeInput.to_string(),
            "Cannot calculate the square root of a negative number."
        );
        assert_eq!(
            ArithmeticError::InvalidOperand {
                reason: "Both arguments must be numbers"
            }
            .to_string(),
            "Both arguments must be numbers"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ArithmeticError::DivisionByZero { dividend: 10.0 },
            ArithmeticError::DivisionByZero { dividend: 10.0 }
        );
        assert_ne!(
            ArithmeticError::DivisionByZero { dividend: 10.0 },
            ArithmeticError::DivisionByZero { dividend: 3.0 }
        );
        assert_ne!(
            ArithmeticError::NegativeInput,
            ArithmeticError::DivisionByZero { dividend: 0.0 }
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(ArithmeticError::NegativeInput);
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "Cannot calculate the square root of a negative number."
        );
    }
}
