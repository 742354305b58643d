// ============================================================================
// Basic Usage Example
// ============================================================================

use arith_ops::prelude::*;

fn main() {
    // Make the calculator's debug instrumentation visible
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calculator Demonstration ===\n");

    let calc = Calculator::new();

    // Basic operations
    println!("--- Basic Operations ---");
    println!("8 + 4 = {}", calc.add(8, 4));
    println!("8 - 4 = {}", calc.subtract(8, 4));

    // Advanced operations
    println!("\n--- Advanced Operations ---");
    println!("8 * 4 = {}", calc.multiply(8, 4).unwrap());
    println!("8 / 4 = {}", calc.divide(8, 4).unwrap());
    println!("2 to the power of 8 = {}", calc.power(2, 8));
    println!("Square root of 64 = {}", calc.square_root(64).unwrap());

    // Error handling
    println!("\n--- Error Handling ---");

    println!("Attempting to divide by zero...");
    if let Err(e) = calc.divide(10, 0) {
        println!("Caught expected error: {}", e);
    }

    println!("Attempting square root of a negative number...");
    if let Err(e) = calc.square_root(-9) {
        println!("Caught expected error: {}", e);
    }

    println!("Attempting to multiply with text...");
    if let Err(e) = calc.multiply(5, "three") {
        println!("Caught expected error: {}", e);
    }

    // Runtime-selected operations through the single result shape
    println!("\n--- Operation Dispatch ---");
    for op in BinaryOp::ALL {
        match calc.evaluate(op, 9, 3) {
            Ok(result) => println!("9 {} 3 = {}", op, result),
            Err(e) => println!("9 {} 3 failed: {}", op, e),
        }
    }
    for op in UnaryOp::ALL {
        match calc.evaluate_unary(op, 9) {
            Ok(result) => println!("{}(9) = {}", op, result),
            Err(e) => println!("{}(9) failed: {}", op, e),
        }
    }
}
