//! Passing callbacks, as a function and as a closure binding.
//!
//! Usage: cargo run --example callable

use pipette_typing::callable::map;

fn main() {
    pipette_examples::init_tracing();

    println!("{:?}", map(&[1, 2, 3], |e| e * 2));
    // -> [2, 4, 6]

    let map2 = |array: &[i32], callback: &dyn Fn(i32) -> i32| -> Vec<i32> {
        array.iter().map(|&e| callback(e)).collect()
    };
    println!("{:?}", map2(&[1, 2, 3], &|e| e * 2));
    // -> [2, 4, 6]
}
