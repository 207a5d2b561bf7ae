//! Line rendering and per-level formatting flags

use crate::Record;
use bitflags::bitflags;
use std::fmt::Write as _;

bitflags! {
    /// Controls the optional prefixes on each rendered line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatFlags: u8 {
        /// Include a `YYYY-MM-DD HH:MM:SS` timestamp.
        const TIMESTAMP = 1 << 0;
        /// Include the `file:line` call site.
        const LOCATION = 1 << 1;
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        FormatFlags::TIMESTAMP | FormatFlags::LOCATION
    }
}

/// Render one record as a line of text, trailing newline included.
pub(crate) fn render(record: &Record, flags: FormatFlags) -> String {
    let mut line = String::with_capacity(64 + record.message.len());
    if let Some(name) = record.level.name() {
        line.push_str(name);
        line.push(' ');
    }
    if flags.contains(FormatFlags::TIMESTAMP) {
        let _ = write!(line, "{} ", record.timestamp.format("%Y-%m-%d %H:%M:%S"));
    }
    if flags.contains(FormatFlags::LOCATION) {
        if let (Some(file), Some(line_no)) = (record.file, record.line) {
            let _ = write!(line, "{file}:{line_no}: ");
        }
    }
    line.push_str(&record.message);
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn flags_control_prefixes() {
        let record = Record::new(Level::INFO, "hello");

        let bare = render(&record, FormatFlags::empty());
        assert_eq!(bare, "info hello\n");

        let full = render(&record, FormatFlags::default());
        assert!(full.starts_with("info "));
        assert!(full.contains("format.rs"));
        assert!(full.ends_with("hello\n"));

        let timestamp_only = render(&record, FormatFlags::TIMESTAMP);
        assert!(!timestamp_only.contains("format.rs"));
    }

    #[test]
    fn unknown_location_is_omitted() {
        let mut record = Record::new(Level::WARN, "somewhere");
        record.file = None;
        record.line = None;

        let rendered = render(&record, FormatFlags::LOCATION);
        assert_eq!(rendered, "warn somewhere\n");
    }

    #[test]
    fn unnamed_level_has_no_prefix() {
        let record = Record::new(Level::empty(), "orphan");
        assert_eq!(render(&record, FormatFlags::empty()), "orphan\n");
    }
}
