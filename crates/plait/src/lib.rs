//! The `plait` command-line driver.
//!
//! Command handlers live in [`commands`] and return plain values; the
//! binary prints them through [`report`].

pub mod commands;
mod error;
pub mod report;

use std::sync::Once;

pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=plait_comb=trace` or `RUST_LOG=debug`. Setting
/// `PLAIT_LOG_TREE` switches to indented, span-nested output, which is
/// easier to follow for rule resolution.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = std::env::var_os("PLAIT_LOG_TREE").is_some();
            tracing_subscriber::registry()
                .with(tree.then(|| HierarchicalLayer::new(2).with_targets(true)))
                .with((!tree).then(|| fmt::layer().with_target(true).with_level(true)))
                .with(filter)
                .init();
        }
    });
}
