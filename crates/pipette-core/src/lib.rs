pub mod compose;
pub mod config;
pub mod error;
pub mod pipe;
pub mod traced;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compose::compose;
    pub use crate::config::TraceConfig;
    pub use crate::error::{PipetteError, Result, TypingError};
    pub use crate::pipe::{IntoPipe, Pipe};
    pub use crate::traced::TracedPipe;
}
