use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generics::Pair;

/// A person's name: a nominal wrapper over a pair of strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(Pair<String>);

impl Name {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self(Pair::new(first.into(), last.into()))
    }

    pub fn first(&self) -> &str {
        self.0.get1()
    }

    pub fn last(&self) -> &str {
        self.0.get2()
    }

    pub fn as_pair(&self) -> &Pair<String> {
        &self.0
    }
}

impl From<Pair<String>> for Name {
    fn from(pair: Pair<String>) -> Self {
        Self(pair)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first(), self.last())
    }
}

/// An RGB colour. Distinct from a bare `(u8, u8, u8)`: functions taking a
/// `Color` reject raw tuples until they are converted explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color((u8, u8, u8));

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self((r, g, b))
    }

    pub fn channels(&self) -> (u8, u8, u8) {
        self.0
    }

    /// Concatenate the channels as lower-case hex.
    ///
    /// Channels are not zero-padded: `Color::new(0, 0, 0)` gives `"000"`.
    pub fn to_rgb(&self) -> String {
        let (r, g, b) = self.0;
        format!("{r:x}{g:x}{b:x}")
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Self(rgb)
    }
}
