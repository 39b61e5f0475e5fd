// SPDX-License-Identifier: Apache-2.0 OR MIT
// Severity levels for log records

use serde::{Deserialize, Serialize};

/// Log severity levels (0-3, higher is more severe)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Debug-level messages (verbose diagnostics)
    Debug = 0,
    /// Informational (normal operation)
    Info = 1,
    /// Warning conditions (unexpected but recoverable)
    Warning = 2,
    /// Fatal conditions (routed through the fatal dispatcher, terminates in production)
    Fatal = 3,
}

impl Severity {
    /// Get severity level as u8 (0-3)
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Get severity name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Fatal => "FATAL",
        }
    }

    /// Create from u8 value (returns None if invalid)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Whether a record at this level must go through the fatal dispatcher
    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Severity::Fatal)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
