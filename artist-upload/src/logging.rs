//! Log sinks for a run: timestamped lines to standard output and to the log file.
//!
//! The subscriber is returned as a [`Dispatch`] rather than installed
//! globally; the caller makes it the default for the lifetime of the run.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

pub fn build_dispatch(log_file: &Path) -> Result<Dispatch> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(std::io::stdout().is_terminal())
                .with_writer(std::io::stdout),
        )
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)));

    Ok(Dispatch::new(subscriber))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_reach_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let dispatch = build_dispatch(&path).expect("log file should open");

        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!("hello from the log test");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the log test"));
        assert!(contents.contains("INFO"));
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("run.log");
        let err = build_dispatch(&path).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
