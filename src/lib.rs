// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous logging engine.
//!
//! Application threads emit records without blocking on disk I/O; a single
//! background worker per [`LogWorker`] serializes and persists them. The
//! process-wide registry decides which worker a call site addresses, the
//! handshake layer gives producers synchronous request/response against the
//! worker (file path queries, flush-and-stop), and the fatal dispatcher
//! guarantees that nothing enqueued before a fatal condition is lost when
//! the process terminates.
//!
//! Typical embedding:
//!
//! ```ignore
//! let worker = ferrolog::LogWorker::new("relay", "/var/log/relay")?;
//! ferrolog::initialize_logging(&worker);
//!
//! log_info!("started with {} rules", rules.len());
//! check!(rules.len() < MAX_RULES);
//!
//! ferrolog::shutdown_logging();
//! drop(worker); // drains and joins
//! ```

mod fatal;
mod handshake;
#[macro_use]
mod macros;
mod queue;
mod record;
mod registry;
mod severity;
mod sink;
mod stream;
mod worker;

#[cfg(unix)]
pub mod crash_handler;
pub mod test_support;

pub use fatal::{reset_fatal_hook, set_fatal_hook, FatalMessage, FatalReason};
pub use handshake::{HandshakeError, Waiter};
pub use record::LogRecord;
pub use registry::{initialize_logging, shutdown_logging, shutdown_logging_for_active_only};
pub use severity::Severity;
pub use sink::{FileSink, LogSink};
pub use stream::LogStream;
pub use worker::{LogWorker, LoggerHandle};

/// Leveled log entry point over a finished message.
///
/// Non-fatal records go to the active worker's queue; with no active logger
/// the call is a silent no-op. Fatal records are routed through the fatal
/// dispatcher instead. The macros in this crate are sugar over this
/// function, capturing `file!()` and `line!()` at the call site.
pub fn log(severity: Severity, file: &'static str, line: u32, message: impl Into<String>) {
    let record = LogRecord::new(severity, file, line, message);
    if record.severity.is_fatal() {
        fatal::fatal_record(record);
    } else if let Some(handle) = registry::active() {
        handle.log(record);
    }
}

#[doc(hidden)]
pub fn check_failed(
    condition: &'static str,
    file: &'static str,
    line: u32,
    message: Option<String>,
) {
    fatal::check_failed(condition, file, line, message);
}
