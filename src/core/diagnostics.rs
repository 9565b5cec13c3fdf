//! Diagnostic sink.
//!
//! The resolver reports what it found through [`Diagnostics`] rather than
//! calling the logging macros itself, which lets callers observe exactly
//! what was emitted.

use std::sync::Mutex;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
}

/// Fire-and-forget receiver of leveled messages.
pub trait Diagnostics: Send + Sync {
    fn emit(&self, level: Level, message: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Error => tracing::error!("{}", message),
            Level::Warn => tracing::warn!("{}", message),
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct Recorded {
    entries: Mutex<Vec<(Level, String)>>,
}

impl Recorded {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Diagnostics for Recorded {
    fn emit(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
