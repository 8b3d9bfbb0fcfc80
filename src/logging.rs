//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so interactive sessions log to a file under the
//! local data directory. CLI runs log to stderr. `RUST_LOG` overrides the
//! configured level in both cases.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// ~/.local/share/recipetui/recipetui.log, or stderr when no data dir exists
    pub fn default_file() -> Self {
        dirs::data_local_dir()
            .map(|p| LogTarget::File(p.join("recipetui").join("recipetui.log")))
            .unwrap_or(LogTarget::Stderr)
    }
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Never fails the program: if the log file cannot be opened, logging is
/// simply not installed. Calling it twice keeps the first subscriber.
pub fn init(level: &str, target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter(level))
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }

            let file = match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => file,
                Err(_) => return,
            };

            let _ = tracing_subscriber::registry()
                .with(filter(level))
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_to_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("recipetui.log");

        init("debug", LogTarget::File(path.clone()));
        init("debug", LogTarget::File(path.clone()));
        tracing::info!("hello from test");

        assert!(path.exists());
    }
}
