// ============================================================================
// Arithmetic Operations
// The six core operations over double-precision floats
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};

/// Adds two numbers together.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtracts the second number from the first.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplies two numbers.
///
/// Typed callers cannot supply a non-numeric operand, so the runtime operand
/// check lives on the loosely typed [`Calculator`](crate::engine::Calculator)
/// front end rather than here.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides the first number by the second.
///
/// # Errors
/// Returns `DivisionByZero` carrying the dividend when `b` is zero
/// (negative zero included).
///
/// # Example
/// ```
/// use arith_ops::numeric::ops;
///
/// assert_eq!(ops::divide(10.0, 4.0).unwrap(), 2.5);
/// assert!(ops::divide(10.0, 0.0).is_err());
/// ```
#[inline]
pub fn divide(a: f64, b: f64) -> ArithmeticResult<f64> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// Raises the first number to the power of the second.
///
/// There is no domain guard: a negative base with a fractional exponent
/// propagates as NaN, and zero raised to a negative power propagates as
/// infinity, per native floating-point semantics.
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Calculates the principal square root of a number.
///
/// NaN input propagates as NaN; negative zero is not negative.
///
/// # Errors
/// Returns `NegativeInput` when `a` is below zero.
///
/// # Example
/// ```
/// use arith_ops::numeric::ops;
///
/// assert_eq!(ops::square_root(64.0).unwrap(), 8.0);
/// assert!(ops::square_root(-9.0).is_err());
/// ```
#[inline]
pub fn square_root(a: f64) -> ArithmeticResult<f64> {
    if a < 0.0 {
        return Err(ArithmeticError::NegativeInput);
    }
    Ok(a.sqrt())
}

// ============================================================================
// Tests
// ============================================================================
