// SPDX-License-Identifier: Apache-2.0 OR MIT
// Stream-style message builder: collect fragments, dispatch when finished

use crate::severity::Severity;
use std::fmt::{Display, Write};

/// Transient builder for incrementally assembled log messages.
///
/// Fragments are appended with [`add`](LogStream::add); the finished record
/// is dispatched when the builder is dropped. A builder created with a false
/// guard ([`new_if`](LogStream::new_if)) never formats anything and never
/// dispatches, which is what makes guarded call sites zero-cost.
pub struct LogStream {
    severity: Severity,
    file: &'static str,
    line: u32,
    text: String,
    active: bool,
}

impl LogStream {
    pub fn new(severity: Severity, file: &'static str, line: u32) -> Self {
        Self {
            severity,
            file,
            line,
            text: String::new(),
            active: true,
        }
    }

    /// Guarded variant: with `condition` false the builder is inert
    pub fn new_if(severity: Severity, condition: bool, file: &'static str, line: u32) -> Self {
        Self {
            severity,
            file,
            line,
            text: String::new(),
            active: condition,
        }
    }

    /// Append one fragment via its `Display` impl
    pub fn add(mut self, value: impl Display) -> Self {
        if self.active {
            // Writing to a String cannot fail
            let _ = write!(self.text, "{value}");
        }
        self
    }
}

impl Drop for LogStream {
    fn drop(&mut self) {
        if self.active {
            let message = std::mem::take(&mut self.text);
            crate::log(self.severity, self.file, self.line, message);
        }
    }
}
