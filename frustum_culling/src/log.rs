//! Logging for the frustum culling crate
//!
//! - Customizable sink via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - ERROR logs carry file and line information
//!
//! Nothing on a classification path logs. Messages come from plane
//! extraction, configuration, API-edge conversions and per-frame culler
//! statistics.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use frustum_culling::culling::log::{Logger, LogEntry};
///
/// struct FrameLogger;
///
/// impl Logger for FrameLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the application's log...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "frustum::FrustumIntersection", "frustum::CoherentCuller")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (per-frame culler statistics)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (degenerate planes, suspicious input)
    Warn,

    /// Error messages (rejected input, with file:line details)
    Error,
}

/// Default logger writing colored lines to stdout
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====
//
// Each macro checks the severity filter before formatting, so a filtered
// message costs one atomic load and no allocation.

/// Log a TRACE message
macro_rules! cull_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Diagnostics::enabled($crate::culling::log::LogSeverity::Trace) {
            $crate::culling::Diagnostics::log(
                $crate::culling::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message
macro_rules! cull_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Diagnostics::enabled($crate::culling::log::LogSeverity::Debug) {
            $crate::culling::Diagnostics::log(
                $crate::culling::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message
macro_rules! cull_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Diagnostics::enabled($crate::culling::log::LogSeverity::Warn) {
            $crate::culling::Diagnostics::log(
                $crate::culling::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
macro_rules! cull_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Diagnostics::enabled($crate::culling::log::LogSeverity::Error) {
            $crate::culling::Diagnostics::log_detailed(
                $crate::culling::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

pub(crate) use cull_trace;
pub(crate) use cull_debug;
pub(crate) use cull_warn;
pub(crate) use cull_error;

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
