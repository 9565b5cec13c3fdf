//! Tests for `fnsamples invoke` and `fnsamples route`.

use crate::support::*;

#[test]
fn test_http_sample_without_name() {
    let t = Test::new();

    let output = t.invoke("http_function_sample", &[]);
    assert_success(&output);
    assert_http_status(&output, 200);
    assert_stdout_contains(&output, "executed successfully");
}

#[test]
fn test_http_sample_name_from_query() {
    let t = Test::new();

    let output = t.invoke("http_function_sample", &["--query", "name=Bob"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Hello, Bob");
}

#[test]
fn test_http_sample_name_from_body() {
    let t = Test::new();

    let output = t.invoke(
        "http_function_sample",
        &["--method", "POST", "--body", r#"{"name": "Bob"}"#],
    );
    assert_success(&output);
    assert_stdout_contains(&output, "Hello, Bob");
}

#[test]
fn test_keyvault_sample_missing_setting() {
    let t = Test::new();

    let output = t.invoke("keyvault_function_sample", &[]);
    assert_exit_code(&output, 1);
    assert_http_status(&output, 500);
    assert_stdout_contains(&output, "no variable with name \"ExampleSecret\"");
}

#[test]
fn test_keyvault_sample_unresolved_reference() {
    let t = Test::with_settings(&[("ExampleSecret", UNRESOLVED_REFERENCE)]);

    let output = t.invoke("keyvault_function_sample", &[]);
    assert_failure(&output);
    assert_http_status(&output, 500);
    assert_stdout_contains(&output, "signatures indicating an unresolved secret");
}

#[test]
fn test_keyvault_sample_resolved() {
    let t = Test::with_settings(&[("ExampleSecret", "1234")]);

    let output = t.invoke("keyvault_function_sample", &[]);
    assert_success(&output);
    assert_http_status(&output, 200);
    assert_stdout_contains(&output, "has been logged");
    assert_stdout_excludes(&output, "1234");
}

#[test]
fn test_route_dispatch() {
    let t = Test::new();

    let output = t.route("/api/req", &["-q", "name=Alice"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Hello, Alice");
}

#[test]
fn test_route_unknown() {
    let t = Test::new();

    let output = t.route("/api/nothing-here", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no function is bound to route");
}

#[test]
fn test_route_method_not_allowed() {
    let t = Test::new();

    let output = t.route("/api/req", &["--method", "DELETE"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "DELETE is not allowed");
}

#[test]
fn test_blob_replication() {
    let t = Test::with_settings(SAMPLE_SETTINGS);
    t.put_blob(REPLICATION_INPUT, "replicate me");

    let output = t.route("/api/file", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "Copied the given input blob");
    assert_eq!(t.blob(REPLICATION_OUTPUT).as_deref(), Some("replicate me"));
}

#[test]
fn test_blob_replication_missing_input() {
    let t = Test::with_settings(SAMPLE_SETTINGS);

    let output = t.route("/api/file", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "input blob not found");
    assert_eq!(t.blob(REPLICATION_OUTPUT), None);
}

#[test]
fn test_timer_sample() {
    let t = Test::new();

    let output = t.invoke("timer_function_sample", &["--past-due"]);
    assert_success(&output);
    assert_stdout_contains(&output, "timer_function_sample completed");
}

#[test]
fn test_appending_then_wiping() {
    let t = Test::with_settings(SAMPLE_SETTINGS);
    t.put_blob(LOG_BLOB, "start");

    assert_success(&t.invoke("timer_blob_appending_function", &[]));
    assert_success(&t.invoke("timer_blob_appending_function", &[]));

    let log = t.blob(LOG_BLOB).unwrap();
    assert!(log.starts_with("start\n"));
    assert_eq!(log.matches("Timer-triggered function ran at").count(), 2);

    assert_success(&t.invoke("timer_blob_wiping_function", &[]));
    assert_eq!(t.blob(LOG_BLOB).as_deref(), Some(""));
}

#[test]
fn test_wiping_without_blob_path_setting() {
    let t = Test::new();

    let output = t.invoke("timer_blob_wiping_function", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "%BlobOutpath%");
}

#[test]
fn test_invoke_by_name_uses_function_route() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "invoke", "http_function_sample"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "url=/api/req");
    assert!(!stderr(&output).contains("/api/http_function_sample"));
}
