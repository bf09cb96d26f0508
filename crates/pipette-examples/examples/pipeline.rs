//! Left-to-right chaining with `then` and `|`.
//!
//! Usage: cargo run --example pipeline
//!        RUST_LOG=pipette_core=debug cargo run --example pipeline

use pipette_core::prelude::*;
use pipette_typing::callable::sub;
use pipette_typing::generics::print_any;

fn main() -> Result<()> {
    pipette_examples::init_tracing();

    // (1 + 2) => print
    Pipe::new(1 + 2).then(|x| println!("{x}"));
    // -> 3

    let sub3 = |x: i32| x - 3;

    // 10 - 3
    Pipe::new(10) | sub3 | |x: i32| println!("{x}");
    // -> 7

    // 10 - 3, curried
    Pipe::new(10) | sub(3) | |x: i32| println!("{x}");
    // -> 7

    Pipe::new(vec![1, 2, 3])
        .and_then(compose(|x: i32| x * 2))
        .then(|v| print_any(&v));
    // -> [2, 4, 6]

    let name = Pipe::new("Harry").then(|s| s.to_uppercase()).into_inner();
    println!("{name}");
    // -> HARRY

    let config = TraceConfig::from_json(r#"{"label": "subtract", "tags": ["demo"]}"#)?;
    let traced = Pipe::new(10).traced(config).then(sub3).then(sub3);
    tracing::info!(steps = traced.steps(), "traced chain finished");
    println!("{}", traced.into_inner());
    // -> 4

    Ok(())
}
