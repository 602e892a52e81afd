//! Logging setup for the `quark` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber.
///
/// Nothing is installed unless `RUST_LOG` is set, so the default output of
/// `quark` stays clean. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
