// ============================================================================
// Arithmetic Operations Library
// Validated arithmetic with typed error signaling
// ============================================================================

//! # arith-ops
//!
//! A small library of arithmetic operations (addition, subtraction,
//! multiplication, division, exponentiation, square root) with input
//! validation and typed error signaling.
//!
//! ## Features
//!
//! - **Typed core** ([`numeric::ops`]): six pure functions over `f64`;
//!   `divide` and `square_root` return a `Result`, the rest cannot fail
//! - **Loosely typed boundary** ([`engine::Calculator`]): accepts mixed
//!   integer/float/text operands and performs the runtime validation the
//!   typed core cannot need
//! - **Typed errors** ([`numeric::ArithmeticError`]): callers branch on the
//!   variant (`InvalidOperand`, `DivisionByZero`, `NegativeInput`) rather
//!   than on message text
//! - **Runtime dispatch** ([`domain::BinaryOp`], [`domain::UnaryOp`]): apply
//!   an operation selected at runtime through a single result shape
//!
//! Every operation is a single-step, side-effect-free computation. There is
//! no shared state anywhere, so everything is safe to call from any number
//! of threads with no coordination.
//!
//! ## Example
//!
//! ```rust
//! use arith_ops::prelude::*;
//!
//! let calc = Calculator::new();
//!
//! assert_eq!(calc.add(8, 4), 12.0);
//! assert_eq!(calc.power(2, 8), 256.0);
//! assert_eq!(calc.square_root(64).unwrap(), 8.0);
//!
//! // Validation failures carry a typed variant and a formatted message
//! let err = calc.divide(10, 0).unwrap_err();
//! assert_eq!(err, ArithmeticError::DivisionByZero { dividend: 10.0 });
//! assert_eq!(err.to_string(), "Cannot divide 10 by zero.");
//!
//! assert!(matches!(
//!     calc.multiply(5, "three"),
//!     Err(ArithmeticError::InvalidOperand { .. })
//! ));
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{BinaryOp, Operand, UnaryOp};
    pub use crate::engine::Calculator;
    pub use crate::numeric::{ArithmeticError, ArithmeticResult};
}
