use pipette_core::error::{Result, TypingError};

mod sealed {
    pub trait Sealed {}
}

/// Numeric types accepted by [`div`]: the integer and float primitives.
///
/// Sealed, so `div("3", 2)` and friends fail to compile.
pub trait Number: Copy + sealed::Sealed {
    fn to_f64(self) -> f64;
}

macro_rules! impl_number {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Number for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Float division over any pair of numbers.
pub fn div<X: Number, Y: Number>(x: X, y: Y) -> Result<f64> {
    let (dividend, divisor) = (x.to_f64(), y.to_f64());
    if divisor == 0.0 {
        tracing::warn!(dividend, "division by zero");
        return Err(TypingError::DivisionByZero { dividend }.into());
    }
    Ok(dividend / divisor)
}
