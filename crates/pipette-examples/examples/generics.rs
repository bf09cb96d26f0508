//! Printing values of any type, and a generic `first`.
//!
//! Usage: cargo run --example generics

use pipette_core::error::Result;
use pipette_typing::generics::{first, print_any};
use pipette_typing::newtype::Name;

fn main() -> Result<()> {
    pipette_examples::init_tracing();

    print_any(&["print", "any"]);
    // -> ["print", "any"]

    print_any(&vec!["print", "generics"]);
    // -> ["print", "generics"]

    println!("{}", first(&[99, 88, 77])?);
    // -> 99
    println!("{}", first(&["Hello", "World"])?);
    // -> Hello

    let harry = Name::new("Harry", "Potter");
    println!("{}", harry.first());
    // -> Harry

    if let Err(e) = first::<i32>(&[]) {
        tracing::info!(error = %e, "first() on an empty slice");
    }

    Ok(())
}
