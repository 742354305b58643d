// ============================================================================
// Engine Module
// Contains the loosely typed calculation entry point
// ============================================================================

mod calculator;

pub use calculator::Calculator;
