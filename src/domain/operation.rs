// ============================================================================
// Operation Identifiers
// Names the arithmetic operations for dispatch, display, and logging
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two-operand arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Every binary operation, in presentation order.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Power,
    ];

    /// Get the operation name for logging/metrics.
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
            BinaryOp::Power => "power",
        }
    }

    /// Infix symbol used when rendering an invocation.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
        }
    }

    /// Whether the operation validates operands at the loose boundary.
    ///
    /// Addition, subtraction, and exponentiation admit their operands without
    /// an explicit guard; only multiplication and division reject non-numeric
    /// input.
    pub fn validates_operands(&self) -> bool {
        matches!(self, BinaryOp::Multiply | BinaryOp::Divide)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The single-operand arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    SquareRoot,
}

impl UnaryOp {
    /// Every unary operation.
    pub const ALL: [UnaryOp; 1] = [UnaryOp::SquareRoot];

    /// Get the operation name for logging/metrics.
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::SquareRoot => "square_root",
        }
    }

    /// Prefix symbol used when rendering an invocation.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::SquareRoot => "sqrt",
        }
    }

    /// Whether the operation validates operands at the loose boundary.
    pub fn validates_operands(&self) -> bool {
        matches!(self, UnaryOp::SquareRoot)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_binary_op_round_trip() {
        for op in BinaryOp::ALL {
            let encoded = serde_json::to_string(&op).unwrap();
            let decoded: BinaryOp = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, op);
        }
    }
}
