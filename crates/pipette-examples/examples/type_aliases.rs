//! Type aliases for a float vector and a name/age tuple.
//!
//! Usage: cargo run --example type_aliases

use pipette_typing::aliases::{Human, scale};

fn main() {
    pipette_examples::init_tracing();

    println!("{:?}", scale(2.0, &vec![1.0, -4.2, 5.4]));
    // -> [2.0, -8.4, 10.8]

    let human: Human = ("amenoyoya".into(), 120);
    println!("{human:?}");
    // -> ("amenoyoya", 120)
}
