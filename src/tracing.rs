//! Diagnostic logging
//!
//! The terminal belongs to the table, so nothing is logged to the console.
//! Records go to `~/.config/csvview/logs/csvview.log` with daily rotation.
//!
//! Filtering follows `RUST_LOG`, defaulting to `info`:
//! - `RUST_LOG=debug` - filter/sort/header decisions
//! - `RUST_LOG=csvview::table=trace` - viewport anchor flips

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the file subscriber.
///
/// Failing to create the log directory is not fatal; the viewer runs without
/// logging and a warning is printed before the terminal is taken over.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "csvview.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(filter),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry().with(file_layer).init();
}
