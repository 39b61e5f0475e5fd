//! Shared fixture: a scratch logger that is registered as the active logger
//! on construction and fully torn down (registry cleared, default fatal hook
//! restored) at scope end, no matter how the test exits.

use ferrolog::{initialize_logging, reset_fatal_hook, shutdown_logging, test_support, LogWorker};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

// The registry and the fatal hook are process-wide; tests in one binary must
// not see each other's logger
static SERIAL: Mutex<()> = Mutex::new(());

#[allow(dead_code)]
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

pub struct RestoreLogger {
    pub worker: Option<LogWorker>,
    log_file: String,
    _dir: TempDir,
    _serial: MutexGuard<'static, ()>,
}

impl RestoreLogger {
    pub fn new() -> Self {
        let serial = serial();
        test_support::install_recording_hook();

        let dir = tempfile::tempdir().expect("scratch log directory");
        let worker = LogWorker::new("unit-test-logger", dir.path()).expect("log worker");
        initialize_logging(&worker);
        let log_file = worker
            .log_file_name()
            .wait()
            .expect("file name query against a fresh worker");

        Self {
            worker: Some(worker),
            log_file,
            _dir: dir,
            _serial: serial,
        }
    }

    #[allow(dead_code)]
    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    /// Tear down the worker: drains everything enqueued, joins the thread.
    /// The registry is deliberately left pointing at the stale handle, the
    /// way an embedder that forgets the order would leave it.
    pub fn reset(&mut self) {
        self.worker = None;
    }

    /// Read the artifact as written so far
    pub fn content(&self) -> String {
        std::fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

impl Drop for RestoreLogger {
    fn drop(&mut self) {
        self.reset();
        shutdown_logging();
        reset_fatal_hook();
    }
}
