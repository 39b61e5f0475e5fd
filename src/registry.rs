// SPDX-License-Identifier: Apache-2.0 OR MIT
// Process-wide active-logger slot

use crate::worker::{LoggerHandle, LogWorker};
use std::sync::{Mutex, MutexGuard};

// At most one active logger at any instant. The slot holds a non-owning
// handle; it never destroys workers and a stale handle (worker already
// stopped) degrades to silent no-op logging.
static ACTIVE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<LoggerHandle>> {
    ACTIVE.lock().unwrap_or_else(|e| e.into_inner())
}

/// Make `worker` the active logger every log and fatal call resolves to.
///
/// Re-initializing while another logger is active simply replaces the slot;
/// tearing down the previous worker first is the caller's job.
pub fn initialize_logging(worker: &LogWorker) {
    *slot() = Some(worker.handle());
}

/// Clear the active logger unconditionally. Idempotent: calling it twice,
/// or with no logger active, is a no-op.
pub fn shutdown_logging() {
    *slot() = None;
}

/// Clear the slot only if `worker` is exactly the active logger.
///
/// Returns true iff it was and the slot is now empty. A different active
/// logger is left untouched. The compare and the clear happen as one step
/// under the slot lock, so no other logger can slip in between.
pub fn shutdown_logging_for_active_only(worker: &LogWorker) -> bool {
    let mut active = slot();
    match active.as_ref() {
        Some(handle) if handle.id() == worker.handle().id() => {
            *active = None;
            true
        }
        _ => false,
    }
}

/// Resolve the current worker for a log or fatal call. None means the call
/// is a safe no-op.
pub(crate) fn active() -> Option<LoggerHandle> {
    slot().clone()
}
