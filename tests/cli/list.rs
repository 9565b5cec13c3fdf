//! Tests for `fnsamples list`.

use crate::support::*;

const SAMPLE_NAMES: &[&str] = &[
    "http_blob_replication_function_sample",
    "http_function_sample",
    "keyvault_function_sample",
    "timer_blob_appending_function",
    "timer_blob_wiping_function",
    "timer_function_sample",
];

#[test]
fn test_list_shows_every_sample() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "Functions (6)");
    for name in SAMPLE_NAMES {
        assert_stdout_contains(&output, name);
    }
    assert_stdout_contains(&output, "/api/req");
    assert_stdout_contains(&output, "%BlobOutpath%/log.txt");
}

#[test]
fn test_list_json() {
    let t = Test::new();

    let output = t.cmd().args(["list", "--json"]).output().unwrap();
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let functions = parsed.as_array().unwrap();
    assert_eq!(functions.len(), SAMPLE_NAMES.len());

    let names: Vec<&str> = functions
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, SAMPLE_NAMES);

    let replication = &functions[0];
    assert_eq!(replication["trigger"]["type"], "http");
    assert_eq!(replication["bindings"][0]["direction"], "in");
    assert_eq!(replication["bindings"][1]["direction"], "out");
}
