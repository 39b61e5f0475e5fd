//! Fatal dispatcher tests: hook substitution, check semantics, the empty
//! sentinel, and the flush guarantee for records queued before the fatal.

mod common;

use common::RestoreLogger;
use ferrolog::test_support::last_fatal_message;
use ferrolog::{check, log_fatal, log_fatal_if, log_info, log_stream, log_stream_if, FatalReason};

#[test]
fn sentinel_is_empty_before_any_fatal_call() {
    let _logger = RestoreLogger::new();
    assert!(last_fatal_message().is_sentinel());
    assert_eq!(last_fatal_message().signal_id, -1);
}

#[test]
fn formatted_fatal_reaches_hook_without_terminating() {
    let mut logger = RestoreLogger::new();
    log_info!("queued before the fatal condition");
    log_fatal!("This message is fatal {}", 0);

    // Still alive: the recording hook returned instead of terminating
    let fatal = last_fatal_message();
    assert!(fatal.message.contains("EXIT trigger caused by "));
    assert!(fatal.message.contains("FATAL"));
    assert!(fatal.message.contains("This message is fatal"));
    assert_eq!(fatal.reason, FatalReason::FatalLog);

    // Records queued before the fatal are intact in the artifact
    logger.reset();
    assert!(logger.content().contains("queued before the fatal condition"));
}

#[test]
fn stream_fatal_reaches_hook() {
    let _logger = RestoreLogger::new();
    assert!(last_fatal_message().is_sentinel());
    log_stream!(Fatal).add("This message is fatal");

    let fatal = last_fatal_message();
    assert!(fatal.message.contains("EXIT trigger caused by "));
    assert!(fatal.message.contains("FATAL"));
    assert!(fatal.message.contains("This message is fatal"));
}

#[test]
fn guarded_fatal_with_false_guard_has_no_observable_effect() {
    let mut logger = RestoreLogger::new();
    let two = 2;
    log_fatal_if!(two > 3, "This message{}should NOT trigger", " ");
    assert!(last_fatal_message().is_sentinel());

    log_stream_if!(Fatal, two > 3).add("Nor should this one");
    assert!(last_fatal_message().is_sentinel());

    logger.reset();
    assert!(!logger.content().contains("should NOT trigger"));
    assert!(!logger.content().contains("Nor should this one"));
}

#[test]
fn guarded_fatal_with_true_guard_fires() {
    let _logger = RestoreLogger::new();
    let two = 2;
    log_fatal_if!(two < 3, "This message{}is fatal", " ");

    let fatal = last_fatal_message();
    assert!(fatal.message.contains("EXIT trigger caused by "));
    assert!(fatal.message.contains("FATAL"));
    assert!(fatal.message.contains("This message is fatal"));
}

#[test]
fn mixed_guards_record_only_the_true_one() {
    let _logger = RestoreLogger::new();
    let left = "test INFO ";
    let right = "test INFO 123";

    log_stream_if!(Warning, left == right).add("This message should NOT be written");
    log_stream_if!(Fatal, left != right).add("This message is fatal");

    let fatal = last_fatal_message();
    assert!(fatal.message.contains("This message is fatal"));
    assert!(!fatal.message.contains("This message should NOT be written"));
}

#[test]
fn failed_check_is_fatal_and_names_the_condition() {
    let _logger = RestoreLogger::new();
    assert!(last_fatal_message().is_sentinel());
    let one = 1;
    check!(one == 2);

    let fatal = last_fatal_message();
    assert!(fatal.message.contains("EXIT trigger caused by "));
    assert!(fatal.message.contains("FATAL"));
    assert!(fatal.message.contains("CHECK(one == 2) failed"));
    assert_eq!(fatal.reason, FatalReason::FailedCheck);
}

#[test]
fn failed_check_carries_the_caller_message() {
    let _logger = RestoreLogger::new();
    let one = 1;
    check!(one >= 2, "This message is added to {} and {}", "throw", "log");

    let fatal = last_fatal_message();
    assert!(fatal.message.contains("EXIT trigger caused by "));
    assert!(fatal.message.contains("FATAL"));
    assert!(fatal
        .message
        .contains("This message is added to throw and log"));
}

#[test]
fn passing_checks_never_touch_the_hook() {
    let _logger = RestoreLogger::new();
    let one = 1;
    check!(one == 1);
    check!(one >= 1, "This {} should never appear in the {}", "message", "log");

    assert!(last_fatal_message().is_sentinel());
}
