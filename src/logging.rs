//! Logger initialisation for the binary and tests.

use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence when set. Otherwise `verbose` selects
/// `trace` output for this crate, which includes per-tick friction and
/// tick reports, and `info` when unset.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    let default_filter = format!("warn,{}={level}", env!("CARGO_CRATE_NAME"));
    let env = Env::default().default_filter_or(default_filter);
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // `try_init` fails only once a logger is installed; tests call `init`
    // repeatedly.
    if builder.try_init().is_err() {
        debug!("logger already installed");
    }
}
