use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Environment variable that overrides `log.level`.
pub const LOG_ENV: &str = "TRACKLISTER_LOG";

/// Install the global `tracing` subscriber.
///
/// Logs go to `log.file` when set. Otherwise headless runs log to stderr and
/// interactive runs do not log at all, as the alternate screen owns the
/// terminal.
pub fn init(settings: &LogSettings, interactive: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.level.trim()));

    let file = settings.file.as_ref().map(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| (path, e))
    });

    match file {
        Some(Ok(file)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Some(Err((path, e))) => {
            if !interactive {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            tracing::warn!(path = %path.display(), error = %e, "cannot open log file");
        }
        None if !interactive => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        None => {}
    }
}
