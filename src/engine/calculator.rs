// ============================================================================
// Calculator
// Dynamically typed entry point with runtime operand validation
// ============================================================================

use crate::domain::{BinaryOp, Operand, UnaryOp};
use crate::numeric::ops;
use crate::numeric::{ArithmeticError, ArithmeticResult};
use tracing::debug;

/// Stateless, loosely typed front end over the arithmetic operations.
///
/// Accepts anything convertible to [`Operand`] so callers can mix integers,
/// floats, and text. The validation contract is asymmetric: `multiply`,
/// `divide`, and `square_root` reject non-numeric operands with
/// [`ArithmeticError::InvalidOperand`], while `add`, `subtract`, and `power`
/// have no guard and let non-numeric operands propagate as NaN. Each method's
/// signature mirrors that contract — the unguarded operations return a plain
/// `f64`.
///
/// Every call is a single-step, side-effect-free computation; the type is
/// zero-sized and freely shareable across threads.
///
/// # Example
/// ```
/// use arith_ops::engine::Calculator;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.add(8, 4), 12.0);
/// assert_eq!(calc.divide(8, 4).unwrap(), 2.0);
/// assert!(calc.multiply(5, "three").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Adds two operands.
    ///
    /// Performs no validation: a non-numeric operand resolves to NaN and
    /// propagates through the sum.
    pub fn add(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "adding operands");
        ops::add(Self::number_or_nan(&a), Self::number_or_nan(&b))
    }

    /// Subtracts the second operand from the first.
    ///
    /// Performs no validation, like [`Calculator::add`].
    pub fn subtract(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "subtracting operands");
        ops::subtract(Self::number_or_nan(&a), Self::number_or_nan(&b))
    }

    /// Multiplies two operands after validating that both are numeric.
    ///
    /// # Errors
    /// Returns `InvalidOperand` if either operand is not an integer or float.
    pub fn multiply(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> ArithmeticResult<f64> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "multiplying operands");
        match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => Ok(ops::multiply(x, y)),
            _ => Err(ArithmeticError::InvalidOperand {
                reason: "Both arguments must be numbers",
            }),
        }
    }

    /// Divides the first operand by the second with validation.
    ///
    /// Operands are checked for numberness before the divisor is checked for
    /// zero, so a text operand reports `InvalidOperand` rather than
    /// `DivisionByZero`.
    ///
    /// # Errors
    /// Returns `InvalidOperand` if either operand is not numeric, or
    /// `DivisionByZero` (carrying the dividend) if the divisor equals zero.
    pub fn divide(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> ArithmeticResult<f64> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "dividing operands");
        match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => ops::divide(x, y),
            _ => Err(ArithmeticError::InvalidOperand {
                reason: "Division requires numeric inputs",
            }),
        }
    }

    /// Raises the first operand to the power of the second.
    ///
    /// Performs no validation: non-numeric operands resolve to NaN, and
    /// undefined domains follow native floating-point semantics.
    pub fn power(&self, base: impl Into<Operand>, exponent: impl Into<Operand>) -> f64 {
        let (base, exponent) = (base.into(), exponent.into());
        debug!(%base, %exponent, "raising to a power");
        ops::power(Self::number_or_nan(&base), Self::number_or_nan(&exponent))
    }

    /// Calculates the principal square root of an operand.
    ///
    /// # Errors
    /// Returns `InvalidOperand` if the operand is not numeric, or
    /// `NegativeInput` if it is below zero.
    pub fn square_root(&self, a: impl Into<Operand>) -> ArithmeticResult<f64> {
        let a = a.into();
        debug!(%a, "taking square root");
        match a.as_number() {
            Some(value) => ops::square_root(value),
            None => Err(ArithmeticError::InvalidOperand {
                reason: "Square root requires a numeric input",
            }),
        }
    }

    // ========================================================================
    // Operation dispatch
    // ========================================================================

    /// Apply a binary operation selected at runtime.
    ///
    /// The infallible operations are wrapped in `Ok` so callers can branch on
    /// a single result shape.
    pub fn evaluate(
        &self,
        op: BinaryOp,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> ArithmeticResult<f64> {
        let (a, b) = (a.into(), b.into());
        match op {
            BinaryOp::Add => Ok(self.add(a, b)),
            BinaryOp::Subtract => Ok(self.subtract(a, b)),
            BinaryOp::Multiply => self.multiply(a, b),
            BinaryOp::Divide => self.divide(a, b),
            BinaryOp::Power => Ok(self.power(a, b)),
        }
    }

    /// Apply a unary operation selected at runtime.
    pub fn evaluate_unary(&self, op: UnaryOp, a: impl Into<Operand>) -> ArithmeticResult<f64> {
        match op {
            UnaryOp::SquareRoot => self.square_root(a),
        }
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    /// Numeric view for the unguarded operations: text becomes NaN.
    #[inline]
    fn number_or_nan(operand: &Operand) -> f64 {
        operand.as_number().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_subtract() {
        let calc = Calculator::new();

        assert_eq!(calc.add(8, 4), 12.0);
        assert_eq!(calc.add(-1, -1), -2.0);
        assert_eq!(calc.add(2.5, 0.5), 3.0);
        assert_eq!(calc.subtract(8, 4), 4.0);
        assert_eq!(calc.subtract(3, 5), -2.0);
    }

    #[test]
    fn test_unguarded_operations_propagate_nan() {
        let calc = Calculator::new();

        assert!(calc.add(8, "three").is_nan());
        assert!(calc.subtract("a", "b").is_nan());
        assert!(calc.power(2, "x").is_nan());
    }

    #[test]
    fn test_multiply() {
        let calc = Calculator::new();

        assert_eq!(calc.multiply(8, 4), Ok(32.0));
        assert_eq!(calc.multiply(5, 2.5), Ok(12.5));
    }

    #[test]
    fn test_multiply_rejects_non_numeric_operands() {
        let calc = Calculator::new();
        let expected = Err(ArithmeticError::InvalidOperand {
            reason: "Both arguments must be numbers",
        });

        assert_eq!(calc.multiply(5, "three"), expected);
        // Text that spells a number is still text
        assert_eq!(calc.multiply("5", 3), expected);
    }

    #[test]
    fn test_divide() {
        let calc = Calculator::new();

        assert_eq!(calc.divide(8, 4), Ok(2.0));
        assert_eq!(calc.divide(-10, 2), Ok(-5.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator::new();

        let err = calc.divide(10, 0).unwrap_err();
        assert_eq!(err, ArithmeticError::DivisionByZero { dividend: 10.0 });
        assert_eq!(err.to_string(), "Cannot divide 10 by zero.");
    }

    #[test]
    fn test_divide_validates_operands_before_divisor() {
        let calc = Calculator::new();

        assert_eq!(
            calc.divide("10", 0),
            Err(ArithmeticError::InvalidOperand {
                reason: "Division requires numeric inputs",
            })
        );
    }

    #[test]
    fn test_power() {
        let calc = Calculator::new();

        assert_eq!(calc.power(2, 8), 256.0);
        assert_eq!(calc.power(2, -1), 0.5);
        assert!(calc.power(-8, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_square_root() {
        let calc = Calculator::new();

        assert_eq!(calc.square_root(64), Ok(8.0));
        assert_eq!(calc.square_root(0), Ok(0.0));
        assert_eq!(calc.square_root(-9), Err(ArithmeticError::NegativeInput));
        assert_eq!(
            calc.square_root("nine"),
            Err(ArithmeticError::InvalidOperand {
                reason: "Square root requires a numeric input",
            })
        );
    }

    #[test]
    fn test_evaluate_dispatch() {
        let calc = Calculator::new();

        for (op, expected) in [
            (BinaryOp::Add, 16.0),
            (BinaryOp::Subtract, 8.0),
            (BinaryOp::Multiply, 48.0),
            (BinaryOp::Divide, 3.0),
            (BinaryOp::Power, 20736.0),
        ] {
            assert_eq!(calc.evaluate(op, 12.0, 4.0), Ok(expected));
        }

        assert!(matches!(
            calc.evaluate(BinaryOp::Divide, 10, 0),
            Err(ArithmeticError::DivisionByZero { .. })
        ));
        assert_eq!(calc.evaluate_unary(UnaryOp::SquareRoot, 49), Ok(7.0));
    }
}
