//! Diagnostics setup
//!
//! Per-file diagnostics go through the `log` facade to stderr. Warnings are
//! always shown; `--verbose` adds per-file progress and soft skips. `RUST_LOG`
//! overrides both.

use chrono::Local;
use log::LevelFilter;
use std::io::Write;

/// Level used when no `RUST_LOG` is set
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level(verbose));
    builder.parse_default_env();

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}",
            Local::now().format("%H:%M:%S"),
            record.level(),
            record.args()
        )
    });

    // A logger may already be installed (e.g. by a test harness)
    let _ = builder.try_init();
}
