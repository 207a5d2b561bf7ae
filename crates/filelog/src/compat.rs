//! Bridge from the `log` crate
//!
//! Lets third-party code using the `log` macros route through the
//! process-wide default [`FileLogger`] and its category files.

use log::{Log, Metadata, Record as LogRecord, SetLoggerError};

use crate::{FileLogger, Level, Record};

/// Implements the `log` crate's [`Log`] trait over a [`FileLogger`].
pub struct LogBridge {
    logger: &'static FileLogger,
}

impl LogBridge {
    /// Bridge over the given logger.
    pub fn new(logger: &'static FileLogger) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        // Filtering happens at routing time via category masks.
        true
    }

    fn log(&self, record: &LogRecord<'_>) {
        self.logger.log(convert(record));
    }

    fn flush(&self) {
        let _ = self.logger.close();
    }
}

fn convert(record: &LogRecord<'_>) -> Record {
    let mut ours = Record::new(map_level(record.level()), record.args().to_string());
    match (record.file_static(), record.line()) {
        (Some(file), Some(line)) => ours = ours.with_location(file, line),
        // A non-static file name would otherwise render this bridge's own
        // call site, so the location is dropped instead.
        _ => {
            ours.file = None;
            ours.line = None;
        }
    }
    ours
}

/// Map `log` levels to our bitmask levels. `Trace` folds into `Debug`,
/// which is the lowest severity we route.
fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info => Level::INFO,
        log::Level::Debug | log::Level::Trace => Level::DEBUG,
    }
}

/// Register the process-wide default logger with the `log` crate.
///
/// # Example
/// ```no_run
/// filelog::compat::init_log_bridge().expect("failed to set log bridge");
/// log::info!("routed into filelog's info category");
/// ```
pub fn init_log_bridge() -> Result<(), SetLoggerError> {
    // log::set_logger requires 'static, so the bridge is leaked once.
    let bridge = Box::leak(Box::new(LogBridge::new(crate::default_logger())));
    log::set_logger(bridge)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
