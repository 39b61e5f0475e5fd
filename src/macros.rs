// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging macros: leveled, guarded, checked and stream-built call sites

/// Log a formatted message with info severity
///
/// # Examples
/// ```ignore
/// log_info!("worker {} started", id);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Info, file!(), line!(), format!($($arg)*))
    };
}

/// Log a formatted message with debug severity
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Debug, file!(), line!(), format!($($arg)*))
    };
}

/// Log a formatted message with warning severity
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Warning, file!(), line!(), format!($($arg)*))
    };
}

/// Log a formatted message with fatal severity.
///
/// Routed through the fatal dispatcher: with the default hook installed the
/// process flushes and terminates.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Fatal, file!(), line!(), format!($($arg)*))
    };
}

/// Guarded info log: the message is only formatted when the guard is true
///
/// # Examples
/// ```ignore
/// log_info_if!(packets > 0, "relayed {} packets", packets);
/// ```
#[macro_export]
macro_rules! log_info_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            $crate::log_info!($($arg)*);
        }
    };
}

/// Guarded debug log
#[macro_export]
macro_rules! log_debug_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            $crate::log_debug!($($arg)*);
        }
    };
}

/// Guarded warning log
#[macro_export]
macro_rules! log_warning_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            $crate::log_warning!($($arg)*);
        }
    };
}

/// Guarded fatal log: a false guard builds no message and never touches the
/// fatal hook
#[macro_export]
macro_rules! log_fatal_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            $crate::log_fatal!($($arg)*);
        }
    };
}

/// Evaluate a condition; a false result is a fatal event naming the
/// stringified condition, optionally with a caller-supplied message.
///
/// # Examples
/// ```ignore
/// check!(index < buffers.len());
/// check!(fd >= 0, "socket setup failed for {}", iface);
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !($cond) {
            $crate::check_failed(stringify!($cond), file!(), line!(), None);
        }
    };
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::check_failed(stringify!($cond), file!(), line!(), Some(format!($($arg)*)));
        }
    };
}

/// Start a stream-built message at the given level; fragments appended with
/// `.add(..)` are dispatched as one record when the builder drops
///
/// # Examples
/// ```ignore
/// log_stream!(Info).add("rule ").add(rule_id).add(" installed");
/// ```
#[macro_export]
macro_rules! log_stream {
    ($level:ident) => {
        $crate::LogStream::new($crate::Severity::$level, file!(), line!())
    };
}

/// Guarded stream-built message: with a false guard nothing is formatted or
/// dispatched
#[macro_export]
macro_rules! log_stream_if {
    ($level:ident, $cond:expr) => {
        $crate::LogStream::new_if($crate::Severity::$level, $cond, file!(), line!())
    };
}
