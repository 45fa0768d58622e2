//! Log output for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` picks the filter, defaulting to `warn`. With `trace` set,
/// every engine step is logged regardless of `RUST_LOG`.
pub fn init(trace: bool) {
    let filter = if trace {
        EnvFilter::new("warn,bootcode_vm=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
