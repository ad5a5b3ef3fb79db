//! Process-wide log sink and severity filter.
//!
//! The only global state in the crate. Frustum objects and cullers carry
//! no reference to it; the `cull_*!` macros reach it directly.

use std::sync::{OnceLock, RwLock};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::SystemTime;
use crate::error::Error;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Lowest severity forwarded to the logger
static MAX_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

/// Entry point for logging configuration
///
/// # Example
///
/// ```no_run
/// use frustum_culling::culling::{Diagnostics, log::{Logger, LogEntry, LogSeverity}};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// Diagnostics::set_logger(FileLogger);
/// Diagnostics::set_max_severity(LogSeverity::Debug);
/// ```
pub struct Diagnostics;

impl Diagnostics {
    fn logger() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
    }

    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the lowest severity that reaches the logger. Defaults to `Info`.
    pub fn set_max_severity(severity: LogSeverity) {
        MAX_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Current severity filter
    pub fn max_severity() -> LogSeverity {
        match MAX_SEVERITY.load(Ordering::Relaxed) {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }

    /// Whether a message of this severity would be forwarded
    pub fn enabled(severity: LogSeverity) -> bool {
        severity as u8 >= MAX_SEVERITY.load(Ordering::Relaxed)
    }

    /// Forward a message without file:line information
    ///
    /// Used by the `cull_trace!` .. `cull_warn!` macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Forward a message with file:line information (used by `cull_error!`)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }

    /// Log an error before handing it back to the caller
    pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
        crate::log::cull_error!(source, "{}", error);
        error
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
