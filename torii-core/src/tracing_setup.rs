//! Tracing setup for Torii
//!
//! Console output at a caller-chosen level, with an optional file layer
//! capturing everything at TRACE so a clean UI log can coexist with
//! complete diagnostics on disk.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Initialize tracing for an embedding application.
///
/// Console output respects `RUST_LOG` when set and falls back to
/// `console_level` otherwise. When `logs_dir` is given, a second layer
/// writes full TRACE output to `torii-last-run.log` inside it, overwriting
/// the previous run.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If the logs directory cannot be created,
///   the log file cannot be opened, or a global subscriber is already set
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    let registry = tracing_subscriber::registry().with(console_layer);

    match logs_dir {
        Some(dir) => {
            create_dir_all(dir)?;
            let log_file = File::create(dir.join("torii-last-run.log"))?;

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(EnvFilter::new("trace"));

            registry.with(file_layer).try_init()?;
        }
        None => registry.try_init()?,
    }

    Ok(())
}
