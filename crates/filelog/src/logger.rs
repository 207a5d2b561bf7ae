//! The dispatcher: routes rendered lines to per-category sinks

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::format::{self, FormatFlags};
use crate::sink::FileSink;
use crate::{Error, Level, Record, Result};

/// Default log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "filelogs";

/// A leveled logger that appends each line to every file category whose
/// configured mask contains the line's level.
///
/// All mutable state sits behind a mutex, so a shared reference can be
/// logged to from any thread. Log calls never return an error; I/O failures
/// surface from [`close`](Self::close).
pub struct FileLogger {
    dir: PathBuf,
    default_flags: FormatFlags,
    state: Mutex<State>,
}

struct State {
    /// Category name to the mask of levels it receives.
    levels: HashMap<String, Level>,
    /// Per-level formatting flags, populated on first log at that level.
    flags: HashMap<Level, FormatFlags>,
    /// Per-category sinks, created on first matching write, never removed.
    sinks: HashMap<String, FileSink>,
}

impl FileLogger {
    /// Create a logger with the default directory and flags, and the four
    /// default categories `debug`, `info`, `warn`, and `error`, each mapped
    /// to its same-named level.
    pub fn new() -> Self {
        let levels = [
            ("debug".to_string(), Level::DEBUG),
            ("info".to_string(), Level::INFO),
            ("warn".to_string(), Level::WARN),
            ("error".to_string(), Level::ERROR),
        ]
        .into();
        Self {
            dir: PathBuf::from(DEFAULT_LOG_DIR),
            default_flags: FormatFlags::default(),
            state: Mutex::new(State {
                levels,
                flags: HashMap::new(),
                sinks: HashMap::new(),
            }),
        }
    }

    /// Write log files under `dir` instead of the default directory. The
    /// directory is fixed for the lifetime of the logger.
    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_owned();
        self
    }

    /// Use `flags` as the starting formatting flags for every level.
    pub fn with_flags(mut self, flags: FormatFlags) -> Self {
        self.default_flags = flags;
        self
    }

    /// Route one record to every category whose mask contains its level.
    ///
    /// Zero matching categories produce zero output. A failed buffer write
    /// to one sink does not stop writes to the remaining matches; the error
    /// resurfaces when that sink is flushed.
    pub fn log(&self, record: Record) {
        let mut state = self.state.lock();
        let flags = *state
            .flags
            .entry(record.level)
            .or_insert(self.default_flags);
        let line = format::render(&record, flags);

        let matching: Vec<String> = state
            .levels
            .iter()
            .filter(|(_, mask)| mask.routes(record.level))
            .map(|(category, _)| category.clone())
            .collect();

        for category in matching {
            let sink = state
                .sinks
                .entry(category.clone())
                .or_insert_with(|| FileSink::new(self.dir.clone(), category));
            let _ = sink.write(line.as_bytes());
        }
    }

    /// Log a message at [`Level::DEBUG`].
    #[track_caller]
    pub fn debug(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Record::new(Level::DEBUG, message));
    }

    /// Log a message at [`Level::INFO`].
    #[track_caller]
    pub fn info(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Record::new(Level::INFO, message));
    }

    /// Log a message at [`Level::WARN`].
    #[track_caller]
    pub fn warn(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Record::new(Level::WARN, message));
    }

    /// Log a message at [`Level::ERROR`].
    #[track_caller]
    pub fn error(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Record::new(Level::ERROR, message));
    }

    /// Info-level alias, kept for callers porting from `print`-style APIs.
    #[track_caller]
    pub fn print(&self, message: impl Into<Cow<'static, str>>) {
        self.log(Record::new(Level::INFO, message));
    }

    /// Set or overwrite the level mask for a file category. Takes effect on
    /// the next log call. Any mask is accepted, including empty and
    /// combined ones.
    pub fn set_file_levels(&self, category: impl Into<String>, mask: Level) {
        self.state.lock().levels.insert(category.into(), mask);
    }

    /// Snapshot of the category-to-mask table. Mutating the returned map
    /// does not affect routing.
    pub fn file_levels(&self) -> HashMap<String, Level> {
        self.state.lock().levels.clone()
    }

    /// Change the formatting flags for one level. The change is announced
    /// with a log line at that level, written through normal routing with
    /// the flags in effect before the call.
    #[track_caller]
    pub fn set_flags(&self, level: Level, flags: FormatFlags) {
        self.log(Record::new(level, format!("setflags {}", flags.bits())));
        self.state.lock().flags.insert(level, flags);
    }

    /// Flush every sink created so far.
    ///
    /// Best-effort sweep: every sink is flushed even when an earlier one
    /// fails, and all failures are returned together. The logger stays
    /// usable afterwards; this does not close anything.
    pub fn close(&self) -> Result<()> {
        let mut failures = Vec::new();
        for (category, sink) in self.state.lock().sinks.iter_mut() {
            if let Err(err) = sink.flush() {
                failures.push((category.clone(), err));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Flush { failures })
        }
    }
}

impl Default for FileLogger {
    fn default() -> Self {
        Self::new()
    }
}
