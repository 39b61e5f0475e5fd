// SPDX-License-Identifier: Apache-2.0 OR MIT
// Log record: one fully rendered log event

use crate::severity::Severity;
use chrono::{DateTime, Utc};

/// One log event, ready for persistence.
///
/// Built on the producer thread at the call site, moved through the queue,
/// consumed and discarded by the worker after writing. The message text is
/// preserved byte-for-byte; only the line prefix is added at render time.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub file: &'static str,
    pub line: u32,
    pub timestamp: DateTime<Utc>,
    pub thread_id: u64,
}

impl LogRecord {
    /// Create a new record, stamping time and originating thread
    pub fn new(
        severity: Severity,
        file: &'static str,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            file,
            line,
            timestamp: Utc::now(),
            thread_id: current_thread_id(),
        }
    }

    /// Render the persisted line: timestamp, level, location, verbatim message
    pub fn formatted(&self) -> String {
        format!(
            "{} {:<7} [{}:{}] {}",
            self.timestamp.format("%Y/%m/%d %H:%M:%S%.6f"),
            self.severity.as_str(),
            self.file,
            self.line,
            self.message
        )
    }
}

/// Get current thread ID (truncated to u64)
fn current_thread_id() -> u64 {
    #[cfg(target_os = "linux")]
    {
        unsafe { libc::gettid() as u64 }
    }
    #[cfg(not(target_os = "linux"))]
    {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        std::thread::current().id().hash(&mut hasher);
        hasher.finish()
    }
}
