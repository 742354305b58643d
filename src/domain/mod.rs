// ============================================================================
// Domain Models Module
// Value objects for the loosely typed operation boundary
// ============================================================================

pub mod operand;
pub mod operation;

pub use operand::Operand;
pub use operation::{BinaryOp, UnaryOp};
