//! Error types for the file logger

use std::io;

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the file logger.
///
/// Log calls themselves are fire-and-forget; I/O failures show up when the
/// affected sink is flushed, typically from [`close`](crate::FileLogger::close).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while opening, writing, or flushing a log file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// One or more sinks failed to flush during a close sweep. The sweep is
    /// best-effort: every sink is flushed and every failure is kept.
    #[error("failed to flush {} log file(s): {}", failures.len(), describe(failures))]
    Flush {
        /// Every `(category, error)` pair collected during the sweep.
        failures: Vec<(String, io::Error)>,
    },

    /// The process-wide default logger was already installed.
    #[error("default logger already initialized")]
    AlreadyInitialized,
}

fn describe(failures: &[(String, io::Error)]) -> String {
    failures
        .iter()
        .map(|(category, err)| format!("{category}: {err}"))
        .collect::<Vec<_>>()
        .join(", ")
}
