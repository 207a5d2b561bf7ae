//! Log level bitmask

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Severity bitmask attached to log calls and to per-file routing masks.
    ///
    /// Unlike a linear level filter, categories are matched by mask
    /// containment, so a single file can be configured to collect any
    /// combination of levels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Level: u8 {
        /// Diagnostic chatter.
        const DEBUG = 1 << 0;
        /// Routine events.
        const INFO = 1 << 1;
        /// Suspicious but recoverable conditions.
        const WARN = 1 << 2;
        /// Failures.
        const ERROR = 1 << 3;
    }
}

impl Level {
    /// Lowercase name of a single-bit level, used as the line prefix and as
    /// the default file category. Combined or empty masks have no name.
    pub fn name(self) -> Option<&'static str> {
        if self == Level::DEBUG {
            Some("debug")
        } else if self == Level::INFO {
            Some("info")
        } else if self == Level::WARN {
            Some("warn")
        } else if self == Level::ERROR {
            Some("error")
        } else {
            None
        }
    }

    /// Whether a file configured with `self` as its mask receives `level`.
    #[inline]
    pub fn routes(self, level: Level) -> bool {
        self.contains(level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "level({:#06b})", self.bits()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_disjoint_powers_of_two() {
        let all = [Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR];
        for (i, a) in all.iter().enumerate() {
            assert_eq!(a.bits().count_ones(), 1);
            for b in &all[i + 1..] {
                assert!((*a & *b).is_empty());
            }
        }
    }

    #[test]
    fn single_bit_names() {
        assert_eq!(Level::DEBUG.name(), Some("debug"));
        assert_eq!(Level::INFO.name(), Some("info"));
        assert_eq!(Level::WARN.name(), Some("warn"));
        assert_eq!(Level::ERROR.name(), Some("error"));
        assert_eq!((Level::WARN | Level::ERROR).name(), None);
        assert_eq!(Level::empty().name(), None);
    }

    #[test]
    fn mask_containment_routing() {
        let mask = Level::WARN | Level::ERROR;
        assert!(mask.routes(Level::WARN));
        assert!(mask.routes(Level::ERROR));
        assert!(!mask.routes(Level::INFO));
        assert!(!mask.routes(Level::DEBUG));
        assert!(!Level::empty().routes(Level::WARN));
    }
}
