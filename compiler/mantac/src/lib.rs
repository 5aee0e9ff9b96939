//! Manta command-line driver.
//!
//! The library half of the `manta` binary: argument parsing, the prelude
//! host scripts run against, conversion of compile and runtime errors into
//! diagnostics, and the command handlers.
//!
//! ```text
//! source ──► manta_eval::compile ──► Program
//!                 │                     │ evaluate(prelude, args)
//!                 ▼                     ▼
//!            CompileError          Vec<Value> / EvalError
//!                 └──────► problem ◄────┘
//!                             │
//!                             ▼
//!                   Diagnostic ──► TerminalEmitter
//! ```

pub mod commands;
pub mod options;
pub mod prelude;
pub mod problem;

pub use options::RunOptions;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=manta_eval=debug` or `RUST_LOG=manta_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
