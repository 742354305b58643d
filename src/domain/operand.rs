// ============================================================================
// Operand Value Model
// Loosely typed operand union for the dynamically typed boundary
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value supplied to an arithmetic operation before validation.
///
/// Typed callers go straight to [`crate::numeric::ops`] with `f64` arguments;
/// this union exists for the boundaries that cannot rely on the type system
/// (text input, interop layers, callers that mix integers and floats). Only
/// the `Int` and `Float` variants are numeric — text is never treated as a
/// number, even when it happens to spell one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    /// Integer operand
    Int(i64),
    /// Floating-point operand
    Float(f64),
    /// Non-numeric text operand
    Text(String),
}

impl Operand {
    /// Classify user-supplied text into an operand.
    ///
    /// The text is trimmed for the numeric attempt; integers win over floats.
    /// Anything unparseable stays text, preserved verbatim.
    ///
    /// # Example
    /// ```
    /// use arith_ops::domain::Operand;
    ///
    /// assert_eq!(Operand::parse("42"), Operand::Int(42));
    /// assert_eq!(Operand::parse("3.5"), Operand::Float(3.5));
    /// assert_eq!(Operand::parse("three"), Operand::Text("three".to_string()));
    /// ```
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if let Ok(int) = trimmed.parse::<i64>() {
            return Operand::Int(int);
        }
        if let Ok(float) = trimmed.parse::<f64>() {
            return Operand::Float(float);
        }
        Operand::Text(text.to_string())
    }

    /// Numeric view of the operand.
    ///
    /// Integers beyond 2^53 lose precision in the conversion to f64.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Int(value) => Some(*value as f64),
            Operand::Float(value) => Some(*value),
            Operand::Text(_) => None,
        }
    }

    /// Check whether the operand is an integer or a float.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Operand::Text(_))
    }

    /// Short label for diagnostics and log fields.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Int(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Text(_) => "text",
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i32> for Operand {
    #[inline]
    fn from(value: i32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<i64> for Operand {
    #[inline]
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(value) => write!(f, "{}", value),
            Operand::Float(value) => write!(f, "{}", value),
            Operand::Text(value) => write!(f, "\"{}\"", value),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
