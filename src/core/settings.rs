//! App settings access.
//!
//! Functions never read the process environment directly. Everything goes
//! through [`Settings`], so tests can hand in a fixed map instead of mutating
//! global state.

use std::collections::BTreeMap;

use crate::error::SettingsError;

/// Read-only key/value source for app settings.
pub trait Settings: Send + Sync {
    /// Look up a setting. `None` when the key is not configured.
    fn get(&self, key: &str) -> Option<String>;
}

/// Settings backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Settings for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory settings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapSettings {
    values: BTreeMap<String, String>,
}

impl MapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, String>> for MapSettings {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl Settings for MapSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Two sources stacked: `primary` wins, `fallback` fills the gaps.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A: Settings, B: Settings> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: Settings, B: Settings> Settings for Layered<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.primary.get(key).or_else(|| self.fallback.get(key))
    }
}

/// Replace every `%Name%` placeholder in `template` with the setting `Name`.
///
/// `%%` produces a literal `%`.
///
/// # Errors
///
/// Returns `SettingsError::Unresolved` for a name with no setting, and
/// `SettingsError::Malformed` when a `%` is never closed.
pub fn expand(template: &str, settings: &dyn Settings) -> Result<String, SettingsError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('%')
            .ok_or_else(|| SettingsError::Malformed(template.to_string()))?;
        let name = &after[..end];

        if name.is_empty() {
            out.push('%');
        } else {
            let value = settings
                .get(name)
                .ok_or_else(|| SettingsError::Unresolved(name.to_string()))?;
            out.push_str(&value);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
