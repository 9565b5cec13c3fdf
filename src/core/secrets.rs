//! Secret resolution from app settings.
//!
//! A setting configured as a key vault reference is replaced by the host with
//! the secret it points to. When that replacement fails (missing access
//! policy, wrong URI, disabled identity) the function sees the reference text
//! itself. [`resolve`] catches both that case and a missing setting.

use tracing::debug;

use crate::core::constants::UNRESOLVED_REFERENCE_SIGNATURES;
use crate::core::diagnostics::{Diagnostics, Level, TracingDiagnostics};
use crate::core::settings::Settings;
use crate::error::SecretError;

static TRACING: TracingDiagnostics = TracingDiagnostics;

/// Check whether a value still looks like an unresolved key vault reference.
pub fn is_unresolved_reference(value: &str) -> bool {
    UNRESOLVED_REFERENCE_SIGNATURES
        .iter()
        .any(|signature| value.contains(signature))
}

/// Resolve `key` from `settings`, reporting through `tracing` when `verbose`.
///
/// Resolved values are masked in the diagnostics; use [`Resolver`] with
/// `reveal_values(true)` to echo them.
///
/// # Errors
///
/// Returns `SecretError::MissingConfiguration` if the key is not set, or
/// `SecretError::UnresolvedReference` if its value contains a reference
/// signature.
pub fn resolve(settings: &dyn Settings, key: &str, verbose: bool) -> Result<String, SecretError> {
    Resolver::new(settings).verbose(verbose).resolve(key)
}

/// Configurable secret resolver.
pub struct Resolver<'a> {
    settings: &'a dyn Settings,
    diagnostics: &'a dyn Diagnostics,
    verbose: bool,
    reveal_values: bool,
}

impl<'a> Resolver<'a> {
    /// Quiet resolver reporting to `tracing`.
    pub fn new(settings: &'a dyn Settings) -> Self {
        Self {
            settings,
            diagnostics: &TRACING,
            verbose: false,
            reveal_values: false,
        }
    }

    /// Route diagnostics somewhere other than `tracing`.
    pub fn diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Emit diagnostics on every path. Never changes the outcome.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Echo resolved secret values in plain text instead of masking them.
    pub fn reveal_values(mut self, reveal: bool) -> Self {
        self.reveal_values = reveal;
        self
    }

    /// Look up `key` and reject values that are still vault references.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, key: &str) -> Result<String, SecretError> {
        debug!(key, "resolving secret");

        let Some(value) = self.settings.get(key) else {
            let err = SecretError::MissingConfiguration {
                key: key.to_string(),
            };
            self.emit(Level::Error, &err.to_string());
            return Err(err);
        };

        if is_unresolved_reference(&value) {
            let err = SecretError::UnresolvedReference {
                key: key.to_string(),
            };
            self.emit(Level::Warn, &err.to_string());
            self.emit(
                Level::Warn,
                &format!("The value of \"{}\" is \"{}\".", key, value),
            );
            return Err(err);
        }

        if self.verbose {
            let shown = if self.reveal_values {
                value.clone()
            } else {
                mask(&value)
            };
            self.emit(
                Level::Warn,
                &format!("The resolved secret value of \"{}\" is \"{}\".", key, shown),
            );
        }

        Ok(value)
    }

    fn emit(&self, level: Level, message: &str) {
        if self.verbose {
            self.diagnostics.emit(level, message);
        }
    }
}

/// Replace a secret with a placeholder that only reveals its length.
fn mask(value: &str) -> String {
    format!("<redacted, {} chars>", value.chars().count())
}
