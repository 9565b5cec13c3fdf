//! Tests for `fnsamples resolve`.

use crate::support::*;

#[test]
fn test_resolve_missing() {
    let t = Test::new();

    let output = t.resolve("ExampleSecret");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "no variable with name \"ExampleSecret\"");
    assert_stderr_contains(&output, "[settings]");
}

#[test]
fn test_resolve_unresolved_reference() {
    let t = Test::with_settings(&[("ExampleSecret", UNRESOLVED_REFERENCE)]);

    let output = t.resolve("ExampleSecret");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "signatures indicating an unresolved secret");
}

#[test]
fn test_resolve_success_does_not_print_value() {
    let t = Test::with_settings(&[("ExampleSecret", "1234")]);

    let output = t.resolve("ExampleSecret");
    assert_success(&output);
    assert_stdout_contains(&output, "ExampleSecret resolved");
    assert_stdout_excludes(&output, "1234");
}

#[test]
fn test_resolve_falls_back_to_process_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("ExampleSecret", "from-env")
        .args(["resolve", "ExampleSecret"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_config_overrides_process_env() {
    let t = Test::with_settings(&[("ExampleSecret", UNRESOLVED_REFERENCE)]);

    let output = t
        .cmd()
        .env("ExampleSecret", "from-env")
        .args(["resolve", "ExampleSecret"])
        .output()
        .unwrap();
    assert_failure(&output);
}
