// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test helpers: a fatal hook that records instead of terminating.
//!
//! Installing the recording hook lets a test process exercise the fatal path
//! many times and assert on the last observed [`FatalMessage`] without
//! dying. Production code should never install it.

use crate::fatal::{set_fatal_hook, FatalMessage};
use std::sync::Mutex;

static LAST_FATAL: Mutex<Option<FatalMessage>> = Mutex::new(None);

fn last() -> std::sync::MutexGuard<'static, Option<FatalMessage>> {
    LAST_FATAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// Install a hook that stores each fatal message and returns normally.
/// Also clears any previously recorded message.
pub fn install_recording_hook() {
    *last() = None;
    set_fatal_hook(|fatal| {
        *last() = Some(fatal);
    });
}

/// The last fatal message observed by the recording hook, or the empty
/// sentinel when none has occurred
pub fn last_fatal_message() -> FatalMessage {
    last().clone().unwrap_or_default()
}

/// Forget any recorded fatal message, restoring the sentinel
pub fn clear_recorded_fatal() {
    *last() = None;
}
