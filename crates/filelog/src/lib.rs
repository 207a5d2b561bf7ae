//! Leveled logging with per-category daily files
//!
//! Each log line carries a bitmask [`Level`]; each file category carries a
//! mask of the levels it receives. A line is appended to every category
//! whose mask contains the line's level, so one file can collect any
//! combination of levels. A fresh logger routes debug/info/warn/error
//! one-to-one to same-named files.
//!
//! Files land in `<dir>/<YYYY-MM-DD>_<category>.log`, append-only; lines
//! written after midnight land in the next day's file automatically. Sinks
//! are buffered, so call [`close`] (or [`FileLogger::close`]) before
//! shutdown to push pending lines to disk.
//!
//! # Example
//!
//! ```no_run
//! use filelog::{FileLogger, Level};
//!
//! let logger = FileLogger::new().with_dir("logs");
//! logger.info("service started");
//! logger.set_file_levels("alerts", Level::WARN | Level::ERROR);
//! logger.warn("disk almost full");
//! logger.close()?;
//! # Ok::<(), filelog::Error>(())
//! ```
//!
//! A process-wide default instance is available through the free functions
//! and the [`debug!`]/[`info!`]/[`warn!`]/[`error!`] macros; [`init`] can
//! install a configured instance before first use.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

pub mod compat;
mod error;
mod format;
mod level;
mod logger;
mod macros;
mod record;
mod sink;

pub use error::{Error, Result};
pub use format::FormatFlags;
pub use level::Level;
pub use logger::{DEFAULT_LOG_DIR, FileLogger};
pub use record::Record;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

static DEFAULT: OnceLock<FileLogger> = OnceLock::new();

/// Install a configured logger as the process-wide default.
///
/// Fails with [`Error::AlreadyInitialized`] if the default instance already
/// exists, including the implicit one built on first use.
pub fn init(logger: FileLogger) -> Result<()> {
    DEFAULT.set(logger).map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide default logger, built with default configuration on
/// first use unless [`init`] installed one earlier.
pub fn default_logger() -> &'static FileLogger {
    DEFAULT.get_or_init(FileLogger::new)
}

/// Log a message at debug level to the default logger.
#[track_caller]
pub fn debug(message: impl Into<Cow<'static, str>>) {
    default_logger().debug(message);
}

/// Log a message at info level to the default logger.
#[track_caller]
pub fn info(message: impl Into<Cow<'static, str>>) {
    default_logger().info(message);
}

/// Log a message at warn level to the default logger.
#[track_caller]
pub fn warn(message: impl Into<Cow<'static, str>>) {
    default_logger().warn(message);
}

/// Log a message at error level to the default logger.
#[track_caller]
pub fn error(message: impl Into<Cow<'static, str>>) {
    default_logger().error(message);
}

/// Info-level alias on the default logger.
#[track_caller]
pub fn print(message: impl Into<Cow<'static, str>>) {
    default_logger().print(message);
}

/// Set the level mask for a file category on the default logger.
pub fn set_file_levels(category: impl Into<String>, mask: Level) {
    default_logger().set_file_levels(category, mask);
}

/// Snapshot of the default logger's category-to-mask table.
pub fn file_levels() -> HashMap<String, Level> {
    default_logger().file_levels()
}

/// Change the formatting flags for one level on the default logger.
#[track_caller]
pub fn set_flags(level: Level, flags: FormatFlags) {
    default_logger().set_flags(level, flags);
}

/// Flush every sink of the default logger.
pub fn close() -> Result<()> {
    default_logger().close()
}
