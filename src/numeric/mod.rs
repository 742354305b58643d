// ============================================================================
// Numeric Module
// Validated arithmetic over double-precision floats
// ============================================================================
//
// This module provides:
// - ops: the six arithmetic operations (add, subtract, multiply, divide,
//   power, square root)
// - ArithmeticError: error types for arithmetic operations
//
// Design principles:
// - Every operation produces f64, regardless of whether inputs were integral
// - Fallible operations return Result (no panics)
// - Typed entry points take f64, so non-numeric operands cannot reach them;
//   runtime operand validation lives on the engine module's Calculator

mod errors;

pub mod ops;

pub use errors::{ArithmeticError, ArithmeticResult};
