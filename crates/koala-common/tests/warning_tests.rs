//! Tests for the deduplicating warning system.

use koala_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_records_message() {
    assert!(!has_warned("TEST", "first unsupported thing"));
    warn_once("TEST", "first unsupported thing");
    assert!(has_warned("TEST", "first unsupported thing"));
}

#[test]
fn test_warn_once_is_keyed_by_component() {
    warn_once("TEST-A", "shared message");
    assert!(has_warned("TEST-A", "shared message"));
    assert!(!has_warned("TEST-B", "shared message"));
}

#[test]
fn test_warn_once_repeated_is_harmless() {
    warn_once("TEST", "repeated message");
    warn_once("TEST", "repeated message");
    assert!(has_warned("TEST", "repeated message"));
}
