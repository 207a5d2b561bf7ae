//! Formatting macros over the process-wide default logger

/// Log a formatted line at debug level to the default logger.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::default_logger().debug(format!($($arg)*))
    };
}

/// Log a formatted line at info level to the default logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::default_logger().info(format!($($arg)*))
    };
}

/// Log a formatted line at warn level to the default logger.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::default_logger().warn(format!($($arg)*))
    };
}

/// Log a formatted line at error level to the default logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::default_logger().error(format!($($arg)*))
    };
}
