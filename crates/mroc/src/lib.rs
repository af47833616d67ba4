//! Library half of the `mroc` command-line tool.
//!
//! Reads a hierarchy file into a [`ClassRegistry`](mro_ir::ClassRegistry),
//! resolves command-line type expressions, and drives the linearizer. The
//! binary in `main.rs` only parses arguments and sets the exit code.

pub mod commands;
pub mod hierarchy;
mod reporter;
pub mod type_expr;

pub use hierarchy::{Hierarchy, HierarchyError, HierarchyWarning};
pub use reporter::Reporter;
pub use type_expr::{parse_type_expr, TypeExprError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber. Does nothing unless `RUST_LOG` is set,
/// and only ever runs once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
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
