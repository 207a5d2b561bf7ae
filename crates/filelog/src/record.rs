//! A single log event

use crate::Level;
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::panic::Location;

/// One log event: how severe, what happened, when, and where in the source.
#[derive(Debug, Clone)]
pub struct Record {
    /// Severity of the event. Expected to be a single-bit [`Level`].
    pub level: Level,
    /// The message text.
    pub message: Cow<'static, str>,
    /// When the record was created.
    pub timestamp: DateTime<Local>,
    /// Source file of the call site, when known.
    pub file: Option<&'static str>,
    /// Line number of the call site, when known.
    pub line: Option<u32>,
}

impl Record {
    /// Create a record, capturing the caller's location.
    #[track_caller]
    pub fn new(level: Level, message: impl Into<Cow<'static, str>>) -> Self {
        let location = Location::caller();
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            file: Some(location.file()),
            line: Some(location.line()),
        }
    }

    /// Override the captured call site, e.g. when forwarding records from
    /// another logging facade.
    pub fn with_location(mut self, file: &'static str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }
}
