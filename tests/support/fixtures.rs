//! Test fixtures and constants.

/// A key vault reference the host failed to resolve.
pub const UNRESOLVED_REFERENCE: &str =
    "@Microsoft.KeyVault(SecretUri=https://kvname-kv.vault.azure.net/secrets/ExampleSecret)";

/// Settings that make every sample runnable.
pub const SAMPLE_SETTINGS: &[(&str, &str)] = &[
    ("ExampleSecret", "1234"),
    ("BlobOutpath", "test-slot-blobcontainer"),
    ("Schedule", "0 */5 * * * *"),
];

/// Input of the replication sample.
pub const REPLICATION_INPUT: &str = "blob-replication-container/input.txt";

/// Output of the replication sample.
pub const REPLICATION_OUTPUT: &str = "blob-replication-container/replicated_output.txt";

/// Log blob used by the timer blob samples under SAMPLE_SETTINGS.
pub const LOG_BLOB: &str = "test-slot-blobcontainer/log.txt";
