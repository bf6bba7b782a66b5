//! Tracing subscriber for the CLI.
//!
//! Nothing is installed unless `RUST_LOG` is set, so normal runs pay
//! nothing for the parser's `trace!`/`debug!` calls. With
//! `KEEL_LOG_TREE=1` events are printed as an indented tree, which follows
//! the parser's recursion.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Environment variable selecting the hierarchical layer.
pub const LOG_TREE_ENV: &str = "KEEL_LOG_TREE";

/// Install the subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
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
