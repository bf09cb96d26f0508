//! A nominal colour type distinct from a bare tuple.
//!
//! Usage: cargo run --example new_type

use pipette_core::pipe::Pipe;
use pipette_typing::newtype::Color;

fn main() {
    pipette_examples::init_tracing();

    println!("{}", Color::new(100, 200, 255).to_rgb());
    // -> 64c8ff

    // A raw `(100, 200, 255)` must be converted explicitly first.
    let hex = Pipe::new((100_u8, 200_u8, 255_u8))
        .then(Color::from)
        .then(|c| c.to_rgb())
        .into_inner();
    println!("{hex}");
    // -> 64c8ff
}
