//! The `fcalc` command-line calculator.
//!
//! The binary in `main.rs` only parses arguments; the work lives in
//! [`commands`] so integration tests can drive whole sessions.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the diagnostic log subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Logs go to stderr so they never
/// mix with calculator output. With `tree`, spans are printed as an indented
/// call tree instead of flat lines. Only the first call has any effect.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
