//! Error types.
//!
//! Each concern has its own error enum; [`Error`] aggregates them so the
//! CLI can report any failure through a single path.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("function returned HTTP {0}")]
    HttpStatus(u16),
}

/// Errors loading `fnsamples.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting name {0:?}: names cannot be empty or contain '%'")]
    InvalidSettingName(String),
}

/// Errors expanding `%Name%` placeholders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("placeholder %{0}% does not match any app setting")]
    Unresolved(String),

    #[error("unterminated placeholder in {0:?}")]
    Malformed(String),
}

/// Failures resolving a secret from the app settings.
///
/// Exactly two kinds exist; both name the offending key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    #[error("There is no variable with name \"{key}\" configured in the appsettings.")]
    MissingConfiguration { key: String },

    #[error("The value retrieved from the appsettings under \"{key}\" contains signatures indicating an unresolved secret.")]
    UnresolvedReference { key: String },
}

impl SecretError {
    /// Name of the setting that failed to resolve.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingConfiguration { key } | Self::UnresolvedReference { key } => key,
        }
    }
}

/// Function registration and invocation errors.
#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("function not found: {0}")]
    NotFound(String),

    #[error("function already registered: {0}")]
    AlreadyExists(String),

    #[error("no function is bound to route {0:?}")]
    RouteNotFound(String),

    #[error("route {route:?} is already bound to {existing}")]
    RouteConflict { route: String, existing: String },

    #[error("{method} is not allowed on route {route:?}")]
    MethodNotAllowed { route: String, method: String },

    #[error("function {name} is not {expected}-triggered")]
    TriggerMismatch { name: String, expected: &'static str },

    #[error("invalid schedule {expr:?}: {reason}")]
    InvalidSchedule { expr: String, reason: String },

    #[error("input blob not found: {0}")]
    BlobNotFound(String),

    #[error("invalid blob path {0:?}: expected <container>/<name>")]
    InvalidBlobPath(String),

    #[error("binding {path:?}: {source}")]
    Binding {
        path: String,
        #[source]
        source: SettingsError,
    },

    #[error("blob storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl FunctionError {
    /// HTTP status a host would answer with when this error escapes a handler.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::RouteNotFound(_) => 404,
            Self::AlreadyExists(_) | Self::RouteConflict { .. } => 409,
            Self::MethodNotAllowed { .. } => 405,
            Self::TriggerMismatch { .. } | Self::InvalidSchedule { .. } => 400,
            Self::BlobNotFound(_)
            | Self::InvalidBlobPath(_)
            | Self::Binding { .. }
            | Self::Storage(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
