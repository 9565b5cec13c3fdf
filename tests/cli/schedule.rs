//! Tests for `fnsamples schedule`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_schedule_literal() {
    let t = Test::new();

    let output = t.schedule("timer_blob_wiping_function", 3);
    assert_success(&output);
    assert_stdout_contains(&output, "0 59 0 * * *");
    assert_eq!(stdout(&output).matches("T00:59:00+00:00").count(), 3);
}

#[test]
fn test_schedule_from_setting() {
    let t = Test::with_settings(SAMPLE_SETTINGS);

    let output = t.schedule("timer_blob_appending_function", 2);
    assert_success(&output);
    assert_stdout_contains(&output, "0 */5 * * * *");
    assert_eq!(stdout(&output).matches("  • ").count(), 2);
}

#[test]
fn test_schedule_invalid_setting() {
    let t = Test::with_settings(&[("Schedule", "every five minutes")]);

    let output = t.schedule("timer_blob_appending_function", 1);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid schedule");
}

#[test]
fn test_schedule_on_http_function() {
    let t = Test::new();

    let output = t.schedule("http_function_sample", 1);
    assert_failure(&output);
    assert_stderr_contains(&output, "is not timer-triggered");
}

#[test]
fn test_schedule_count_out_of_range() {
    let t = Test::new();

    t.cmd()
        .args(["schedule", "timer_blob_wiping_function", "-n", "18446744073709551615"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_schedule_count_upper_bound() {
    let t = Test::new();

    t.cmd()
        .args(["schedule", "timer_function_sample", "-n", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 */5 * * * *"));
}
