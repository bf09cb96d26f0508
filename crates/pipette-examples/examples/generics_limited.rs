//! A type parameter bounded to numeric types.
//!
//! Usage: cargo run --example generics_limited

use pipette_typing::bounded::div;

fn main() {
    pipette_examples::init_tracing();

    match div(3.0, 2) {
        Ok(q) => println!("{q}"),
        Err(e) => eprintln!("{e}"),
    }
    // -> 1.5

    // `div(3.0, "2")` does not compile: &str is not a Number.

    match div(3.0, 0) {
        Ok(q) => println!("{q}"),
        Err(e) => eprintln!("{e}"),
    }
    // -> Typing error: Division by zero: 3 / 0
}
