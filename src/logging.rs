//! Logger bootstrap for the demo binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence. Without it, this crate logs at debug when
/// `verbose` is set and info otherwise; the per-frame jump and landing traces
/// need `RUST_LOG=locomotion=trace`.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let default_filter = format!("warn,{}={level}", env!("CARGO_CRATE_NAME"));
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.format_timestamp_millis();

    // A logger may already be installed by an earlier test.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
