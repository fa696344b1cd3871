use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable naming the log file for the terminal UI
pub const LOG_FILE_ENV: &str = "LENDING_LOG_FILE";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Log to the file named by `LENDING_LOG_FILE`, if set.
///
/// The terminal UI owns stdout and stderr, so nothing is installed when the
/// variable is absent. Returns the log path when file logging was enabled.
pub fn init_file_tracing() -> std::io::Result<Option<PathBuf>> {
    let Some(log_path) = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from) else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(env_filter("debug"));

    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    Ok(Some(log_path))
}

/// Log to stderr; used by the headless CLI so stdout stays clean JSON
pub fn init_stderr_tracing(default_directive: &str) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(default_directive));

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
