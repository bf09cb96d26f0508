//! Shared setup for the pipette demos.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
///
/// Run with `RUST_LOG=pipette_core=debug` to see every traced step.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
