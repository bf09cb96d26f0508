use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::config::TraceConfig;
use crate::traced::TracedPipe;

/// A single-value container that chains unary functions left to right.
///
/// Each step runs immediately and wraps its result in a new `Pipe`, so the
/// wrapped type may change from one step to the next:
///
/// ```
/// use pipette_core::pipe::Pipe;
///
/// let len = Pipe::new("Harry")
///     .then(|s| s.to_uppercase())
///     .then(|s| s.len())
///     .into_inner();
/// assert_eq!(len, 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pipe<T> {
    value: T,
}

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Apply `f` to the wrapped value and wrap the result.
    pub fn then<U, F>(self, f: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe::new(f(self.value))
    }

    /// Apply a step that itself returns a `Pipe`, without nesting.
    pub fn and_then<U, F>(self, f: F) -> Pipe<U>
    where
        F: FnOnce(T) -> Pipe<U>,
    {
        f(self.value)
    }

    /// Apply a fallible step.
    ///
    /// The error is returned exactly as `f` produced it.
    pub fn try_then<U, E, F>(self, f: F) -> Result<Pipe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        f(self.value).map(Pipe::new)
    }

    /// Apply `f` to a borrow of the wrapped value, leaving `self` intact.
    pub fn then_ref<U, F>(&self, f: F) -> Pipe<U>
    where
        F: FnOnce(&T) -> U,
    {
        Pipe::new(f(&self.value))
    }

    /// Run a side effect on the wrapped value and pass the pipe through.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        f(&self.value);
        self
    }

    /// Continue the chain with every step logged under `config`.
    pub fn traced(self, config: TraceConfig) -> TracedPipe<T> {
        TracedPipe::new(self.value, config)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for Pipe<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// `pipe | f` is `pipe.then(f)`.
impl<T, U, F> BitOr<F> for Pipe<T>
where
    F: FnOnce(T) -> U,
{
    type Output = Pipe<U>;

    fn bitor(self, f: F) -> Pipe<U> {
        self.then(f)
    }
}

/// Extension trait providing `.into_pipe()` on any value.
pub trait IntoPipe: Sized {
    fn into_pipe(self) -> Pipe<Self> {
        Pipe::new(self)
    }
}

impl<T> IntoPipe for T {}
