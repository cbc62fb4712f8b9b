//! Logging setup for the CLI

use log::LevelFilter;
use std::env;

/// Initialize the `env_logger` backend
///
/// Logs at `Warn` by default and `Debug` with `verbose`. `RUST_LOG`, when
/// set, overrides both. Calling this twice is a no-op.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
