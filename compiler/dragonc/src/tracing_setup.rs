//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set. Otherwise `--verbose` selects `debug` and the
//! default is `warn`. `--debug` swaps the flat formatter for an indented
//! span tree. All output goes to stderr.

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool, tree: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        let registry = tracing_subscriber::registry().with(filter);

        // A subscriber installed elsewhere (tests, embedding) is left alone.
        let _ = if tree {
            registry
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(io::stderr)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .try_init()
        };
    });
}
