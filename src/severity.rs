//! Log severities and the single place that turns them into `tracing` events.
//!
//! `tracing` has no critical or exception level, so both are written at
//! `ERROR` and told apart by the `severity` field every record carries.

use std::backtrace::Backtrace;

use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Error,
    Critical,
    /// An error was caught; the record carries a backtrace.
    Exception,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Exception => "exception",
        }
    }
}

/// Writes one record at `severity`.
pub fn emit(severity: Severity, message: &str) {
    let tag = severity.as_str();
    match severity {
        Severity::Info => info!(severity = tag, "{message}"),
        Severity::Error | Severity::Critical => error!(severity = tag, "{message}"),
        Severity::Exception => {
            let backtrace = Backtrace::force_capture();
            error!(severity = tag, backtrace = %backtrace, "{message}");
        }
    }
}

/// Writes one exception record for a caught error, with a backtrace taken here.
pub fn emit_exception(message: &str, err: &anyhow::Error) {
    let backtrace = Backtrace::force_capture();
    let cause = format!("{err:#}");
    error!(
        severity = Severity::Exception.as_str(),
        error = %cause,
        backtrace = %backtrace,
        "{message}"
    );
}
