use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use pipette_core::error::{Result, TypingError};

/// Render any value with its `Debug` representation.
pub fn describe<T: Debug>(arg: &T) -> String {
    format!("{arg:?}")
}

/// Print any value. Usable as a terminal pipe step via `|v| print_any(&v)`.
pub fn print_any<T: Debug>(arg: &T) {
    println!("{}", describe(arg));
}

/// First element of any slice.
pub fn first<T: Clone>(items: &[T]) -> Result<T> {
    items
        .first()
        .cloned()
        .ok_or_else(|| TypingError::EmptySequence.into())
}

/// Two values of the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<T> {
    values: (T, T),
}

impl<T> Pair<T> {
    pub fn new(v1: T, v2: T) -> Self {
        Self { values: (v1, v2) }
    }

    pub fn get1(&self) -> &T {
        &self.values.0
    }

    pub fn get2(&self) -> &T {
        &self.values.1
    }

    pub fn into_tuple(self) -> (T, T) {
        self.values
    }
}
