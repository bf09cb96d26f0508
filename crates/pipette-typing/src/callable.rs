/// Apply `callback` to each element, in order.
pub fn map(array: &[i32], callback: impl Fn(i32) -> i32) -> Vec<i32> {
    array.iter().map(|&e| callback(e)).collect()
}

/// Curried subtraction: `sub(n)(x) == x - n`.
pub fn sub(n: i32) -> impl Fn(i32) -> i32 + Copy {
    move |x| x - n
}
