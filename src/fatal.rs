// SPDX-License-Identifier: Apache-2.0 OR MIT
// Fatal dispatcher: builds the fatal message, guarantees the flush, and
// funnels every terminating condition through one substitutable hook

use crate::record::LogRecord;
use crate::registry;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Why the process is terminating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatalReason {
    /// Explicit fatal-level log call
    FatalLog,
    /// A `check!` condition evaluated to false
    FailedCheck,
    /// An OS-level fatal signal was intercepted
    Signal,
}

/// Immutable description of one fatal event.
///
/// An empty `message` is the "no fatal event yet" sentinel; `signal_id` is
/// -1 except for [`FatalReason::Signal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalMessage {
    pub message: String,
    pub reason: FatalReason,
    pub signal_id: i32,
}

impl Default for FatalMessage {
    fn default() -> Self {
        Self {
            message: String::new(),
            reason: FatalReason::FatalLog,
            signal_id: -1,
        }
    }
}

impl FatalMessage {
    /// True while no fatal event has been observed
    pub fn is_sentinel(&self) -> bool {
        self.message.is_empty()
    }
}

type FatalHook = Box<dyn Fn(FatalMessage) + Send + Sync>;

// None means the production hook (flush then terminate). Tests substitute a
// recording hook that returns normally so the process survives.
static HOOK: RwLock<Option<FatalHook>> = RwLock::new(None);

/// Replace the fatal-handling hook.
///
/// Intended for tests: the substituted hook receives the [`FatalMessage`]
/// and returns, and the process keeps running. Restoring the default via
/// [`reset_fatal_hook`] between tests is the embedder's responsibility.
pub fn set_fatal_hook(hook: impl Fn(FatalMessage) + Send + Sync + 'static) {
    *write_hook() = Some(Box::new(hook));
}

/// Restore the default hook, which flushes the active worker and terminates
/// the process, never returning.
pub fn reset_fatal_hook() {
    *write_hook() = None;
}

fn write_hook() -> std::sync::RwLockWriteGuard<'static, Option<FatalHook>> {
    HOOK.write().unwrap_or_else(|e| e.into_inner())
}

/// Entry point for an explicit fatal-level log record
pub(crate) fn fatal_record(record: LogRecord) {
    fatal_call(FatalMessage {
        message: trigger_text("LOG(FATAL) entry", &record),
        reason: FatalReason::FatalLog,
        signal_id: -1,
    });
}

/// Entry point for a failed `check!` condition
pub(crate) fn check_failed(
    condition: &'static str,
    file: &'static str,
    line: u32,
    message: Option<String>,
) {
    let text = match message {
        Some(msg) => format!("CHECK({condition}) failed: {msg}"),
        None => format!("CHECK({condition}) failed"),
    };
    let record = LogRecord::new(Severity::Fatal, file, line, text);
    fatal_call(FatalMessage {
        message: trigger_text("broken check", &record),
        reason: FatalReason::FailedCheck,
        signal_id: -1,
    });
}

/// Entry point for the signal-interception collaborator, called once it has
/// identified the fatal signal
pub(crate) fn signal_fatal(signal_id: i32, name: &str) {
    let record = LogRecord::new(
        Severity::Fatal,
        file!(),
        line!(),
        format!("received fatal signal {name} ({signal_id})"),
    );
    fatal_call(FatalMessage {
        message: trigger_text(&format!("fatal signal {name}"), &record),
        reason: FatalReason::Signal,
        signal_id,
    });
}

/// The fatal text embeds the fully formatted record, so it always carries
/// the severity name, the source location, and the caller's literal message.
fn trigger_text(trigger: &str, record: &LogRecord) -> String {
    format!("EXIT trigger caused by {trigger}:\n\t{}", record.formatted())
}

/// Invoke the registered hook with the finished fatal message
fn fatal_call(fatal: FatalMessage) {
    let hook = HOOK.read().unwrap_or_else(|e| e.into_inner());
    match hook.as_ref() {
        Some(hook) => hook(fatal),
        None => default_fatal_hook(fatal),
    }
}

/// Production path: persist the fatal record, flush everything queued before
/// it, then terminate. Never returns.
fn default_fatal_hook(fatal: FatalMessage) -> ! {
    if let Some(handle) = registry::active() {
        handle.log(LogRecord::new(
            Severity::Fatal,
            file!(),
            line!(),
            fatal.message.clone(),
        ));
        // Block until the worker has written everything enqueued before the
        // fatal condition, plus the fatal record itself
        let _ = handle.flush().wait();
    } else {
        eprintln!("{}", fatal.message);
    }

    match fatal.reason {
        FatalReason::Signal => {
            #[cfg(unix)]
            crate::crash_handler::exit_with_default_signal_handler(fatal.signal_id);
            #[cfg(not(unix))]
            std::process::exit(128 + fatal.signal_id);
        }
        FatalReason::FatalLog | FatalReason::FailedCheck => std::process::exit(1),
    }
}
