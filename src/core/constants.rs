//! Constants used throughout fnsamples.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (fnsamples.toml).
pub const CONFIG_FILE: &str = "fnsamples.toml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "FNSAMPLES_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "FNSAMPLES_LOG";

/// Default local blob storage directory, relative to the working directory.
pub const DEFAULT_BLOB_ROOT: &str = ".blobs";

/// Substrings that mark a setting value as an unresolved key vault reference.
///
/// A value that still contains one of these was never swapped for the
/// secret it points to.
pub const UNRESOLVED_REFERENCE_SIGNATURES: &[&str] = &[
    "@Microsoft.KeyVault",
    "(SecretUri=",
    ".vault.azure.net/secrets",
];

/// App setting read by the key vault sample.
pub const EXAMPLE_SECRET: &str = "ExampleSecret";

/// Route prefix hosts put in front of HTTP function routes.
pub const ROUTE_PREFIX: &str = "api";

/// Upper bound for `schedule --count`.
pub const MAX_SCHEDULE_PREVIEW: u64 = 1000;
