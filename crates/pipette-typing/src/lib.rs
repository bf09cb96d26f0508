pub mod aliases;
pub mod bounded;
pub mod callable;
pub mod generics;
pub mod newtype;

pub mod prelude {
    pub use crate::aliases::{Human, Vector, scale};
    pub use crate::bounded::{Number, div};
    pub use crate::callable::{map, sub};
    pub use crate::generics::{Pair, describe, first, print_any};
    pub use crate::newtype::{Color, Name};
}
