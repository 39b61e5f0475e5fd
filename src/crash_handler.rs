// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OS fatal-signal interception (unix only).
//!
//! Platform plumbing around the fatal dispatcher: the installed handlers
//! build a fatal message naming the signal and hand it to the dispatcher,
//! which flushes the active worker before the process goes down. The default
//! fatal hook then restores the default disposition and re-raises, so core
//! dumps and crash reporting behave as if no handler had been installed.

use anyhow::{Context, Result};
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

const FATAL_SIGNALS: [Signal; 5] = [
    Signal::SIGSEGV,
    Signal::SIGABRT,
    Signal::SIGFPE,
    Signal::SIGILL,
    Signal::SIGTERM,
];

/// Install handlers for the fatal signals. Call once at startup, after the
/// log worker is initialized.
pub fn install_signal_handlers() -> Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(fatal_signal_handler),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for sig in FATAL_SIGNALS {
        unsafe { signal::sigaction(sig, &action) }
            .with_context(|| format!("cannot install handler for {sig}"))?;
    }
    Ok(())
}

extern "C" fn fatal_signal_handler(signal_id: libc::c_int) {
    let name = Signal::try_from(signal_id)
        .map(Signal::as_str)
        .unwrap_or("UNKNOWN");
    crate::fatal::signal_fatal(signal_id, name);
}

/// Re-raise `signal_id` with its default disposition. Used by the default
/// fatal hook after the flush so the process dies the way the OS intended.
pub(crate) fn exit_with_default_signal_handler(signal_id: i32) -> ! {
    unsafe {
        libc::signal(signal_id, libc::SIG_DFL);
        libc::raise(signal_id);
    }
    // Default disposition for every signal we trap is termination; if the
    // raise somehow returns, exit with the conventional signal status
    std::process::exit(128 + signal_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_succeeds() {
        install_signal_handlers().unwrap();
    }

    #[test]
    fn test_signal_names_resolve() {
        assert_eq!(Signal::try_from(11).unwrap().as_str(), "SIGSEGV");
        assert_eq!(Signal::try_from(6).unwrap().as_str(), "SIGABRT");
    }
}
