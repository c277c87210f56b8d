//! Tests for the deduplicated warning registry.

use selkit_common::warning::{Warning, clear_warnings, take_warnings, warn_once};

// The registry is process-wide, so the whole lifecycle is exercised in one test.
#[test]
fn test_warning_lifecycle() {
    clear_warnings();

    warn_once("Selector", "cannot rename id to class");
    warn_once("Selector", "cannot rename id to class");
    warn_once("Cli", "cannot rename id to class");

    let drained = take_warnings();
    assert_eq!(drained.len(), 2);
    assert_eq!(
        drained[0],
        Warning {
            component: "Selector".to_string(),
            message: "cannot rename id to class".to_string(),
        }
    );
    assert_eq!(drained[1].to_string(), "[Cli] cannot rename id to class");

    // Drained, but still deduplicated
    warn_once("Selector", "cannot rename id to class");
    assert!(take_warnings().is_empty());

    // Clearing allows the message to be reported again
    clear_warnings();
    warn_once("Selector", "cannot rename id to class");
    assert_eq!(take_warnings().len(), 1);
}
