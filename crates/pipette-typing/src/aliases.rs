/// A list of floats.
pub type Vector = Vec<f64>;

/// A name and an age.
pub type Human = (String, u32);

/// Multiply every component of `vector` by `scalar`.
pub fn scale(scalar: f64, vector: &Vector) -> Vector {
    vector.iter().map(|num| scalar * num).collect()
}
