//! # Function Registry
//!
//! The dispatch table a host consults: functions by name and HTTP functions
//! by route.

use std::collections::BTreeMap;
use tracing::debug;

use super::function::{FunctionDef, Handler};
use super::samples;
use super::schedule::Schedule;
use super::trigger::{normalize_route, HttpMethod, Trigger};
use crate::error::FunctionError;

/// Registered functions.
#[derive(Debug, Default)]
pub struct FunctionApp {
    /// Functions by name
    by_name: BTreeMap<String, FunctionDef>,

    /// Function names by normalized route
    by_route: BTreeMap<String, String>,
}

impl FunctionApp {
    /// Create an empty app
    pub fn new() -> Self {
        Self::default()
    }

    /// App with every sample function registered.
    ///
    /// # Errors
    ///
    /// Fails only if the sample table itself is inconsistent.
    pub fn samples() -> Result<Self, FunctionError> {
        let mut app = Self::new();
        for def in samples::definitions() {
            app.register(def)?;
        }
        Ok(app)
    }

    /// Register a function
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` for a duplicate name
    /// - `RouteConflict` for an HTTP route already taken
    /// - `TriggerMismatch` when the handler kind does not fit the trigger
    /// - `InvalidSchedule` for a literal schedule that does not parse
    pub fn register(&mut self, def: FunctionDef) -> Result<(), FunctionError> {
        if self.by_name.contains_key(&def.name) {
            return Err(FunctionError::AlreadyExists(def.name));
        }

        if def.handler.kind() != def.trigger.kind() {
            return Err(FunctionError::TriggerMismatch {
                name: def.name,
                expected: def.handler.kind(),
            });
        }

        match &def.trigger {
            Trigger::Http { route, .. } => {
                let key = normalize_route(route);
                if let Some(existing) = self.by_route.get(&key) {
                    return Err(FunctionError::RouteConflict {
                        route: route.clone(),
                        existing: existing.clone(),
                    });
                }
                self.by_route.insert(key, def.name.clone());
            }
            // Placeholders are checked when the schedule is resolved.
            Trigger::Timer { schedule } if !schedule.contains('%') => {
                Schedule::parse(schedule)?;
            }
            Trigger::Timer { .. } => {}
        }

        debug!(name = %def.name, trigger = %def.trigger, "registered function");
        self.by_name.insert(def.name.clone(), def);
        Ok(())
    }

    /// Get function by name
    pub fn get(&self, name: &str) -> Result<&FunctionDef, FunctionError> {
        self.by_name
            .get(name)
            .ok_or_else(|| FunctionError::NotFound(name.to_string()))
    }

    /// Find the HTTP function serving `route` for `method`.
    ///
    /// # Errors
    ///
    /// `RouteNotFound` when nothing is bound, `MethodNotAllowed` when the
    /// function does not accept `method`.
    pub fn find_route(&self, route: &str, method: HttpMethod) -> Result<&FunctionDef, FunctionError> {
        let def = self
            .by_route
            .get(&normalize_route(route))
            .and_then(|name| self.by_name.get(name))
            .ok_or_else(|| FunctionError::RouteNotFound(route.to_string()))?;

        if !def.trigger.accepts(method) {
            return Err(FunctionError::MethodNotAllowed {
                route: route.to_string(),
                method: method.to_string(),
            });
        }
        Ok(def)
    }

    /// All functions, ordered by name
    pub fn list(&self) -> impl Iterator<Item = &FunctionDef> {
        self.by_name.values()
    }

    /// Timer-triggered functions, ordered by name
    pub fn timers(&self) -> impl Iterator<Item = &FunctionDef> {
        self.list()
            .filter(|def| matches!(def.handler, Handler::Timer(_)))
    }

    /// Get function count
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
