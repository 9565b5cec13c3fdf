//! Local function host.
//!
//! Runs one invocation at a time: resolve binding paths against the app
//! settings, load inputs, call the handler, persist outputs.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::blob::BlobStore;
use super::function::{Bindings, Context, FunctionDef, Handler, TimerInfo};
use super::http::{HttpRequest, HttpResponse};
use super::registry::FunctionApp;
use super::schedule::Schedule;
use super::trigger::Trigger;
use crate::core::settings::{expand, Settings};
use crate::error::FunctionError;

/// Executes functions from a [`FunctionApp`].
pub struct Host {
    app: FunctionApp,
    settings: Arc<dyn Settings>,
    blobs: Arc<dyn BlobStore>,
}

impl Host {
    pub fn new(app: FunctionApp, settings: Arc<dyn Settings>, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            app,
            settings,
            blobs,
        }
    }

    pub fn app(&self) -> &FunctionApp {
        &self.app
    }

    /// Invoke an HTTP function by name.
    ///
    /// # Errors
    ///
    /// `NotFound`, `TriggerMismatch`, or any binding error. A handler's own
    /// failure is a normal response, not an error.
    pub fn invoke_http(&self, name: &str, req: &HttpRequest) -> Result<HttpResponse, FunctionError> {
        let def = self.app.get(name)?;
        let Handler::Http(handler) = def.handler else {
            return Err(FunctionError::TriggerMismatch {
                name: name.to_string(),
                expected: "http",
            });
        };

        let response = self.run(def, |ctx| handler(req, ctx))?;
        info!(
            function = %def.name,
            status = response.status(),
            "http function returned"
        );
        Ok(response)
    }

    /// Invoke the HTTP function bound to `route`.
    ///
    /// # Errors
    ///
    /// `RouteNotFound`, `MethodNotAllowed`, or see [`Host::invoke_http`].
    pub fn dispatch_http(&self, route: &str, req: &HttpRequest) -> Result<HttpResponse, FunctionError> {
        let name = self.app.find_route(route, req.method)?.name.clone();
        self.invoke_http(&name, req)
    }

    /// Invoke a timer function by name.
    ///
    /// # Errors
    ///
    /// `NotFound`, `TriggerMismatch`, or any binding error.
    pub fn invoke_timer(&self, name: &str, timer: &TimerInfo) -> Result<(), FunctionError> {
        let def = self.app.get(name)?;
        let Handler::Timer(handler) = def.handler else {
            return Err(FunctionError::TriggerMismatch {
                name: name.to_string(),
                expected: "timer",
            });
        };

        self.run(def, |ctx| handler(timer, ctx))
    }

    /// The schedule of a timer function, with placeholders resolved.
    ///
    /// # Errors
    ///
    /// `TriggerMismatch` for HTTP functions, `Binding` for an unknown
    /// placeholder, `InvalidSchedule` for a bad expression.
    pub fn schedule(&self, name: &str) -> Result<Schedule, FunctionError> {
        let def = self.app.get(name)?;
        let Trigger::Timer { schedule } = &def.trigger else {
            return Err(FunctionError::TriggerMismatch {
                name: name.to_string(),
                expected: "timer",
            });
        };

        let expr = self.expand(schedule)?;
        Schedule::parse(&expr)
    }

    fn expand(&self, template: &str) -> Result<String, FunctionError> {
        expand(template, self.settings.as_ref()).map_err(|source| FunctionError::Binding {
            path: template.to_string(),
            source,
        })
    }

    fn run<R>(
        &self,
        def: &FunctionDef,
        call: impl FnOnce(&mut Context<'_>) -> R,
    ) -> Result<R, FunctionError> {
        let mut bindings = Bindings::new();
        for binding in def.inputs() {
            let path = self.expand(&binding.path)?;
            let contents = self
                .blobs
                .read(&path)?
                .ok_or_else(|| FunctionError::BlobNotFound(path.clone()))?;
            bindings = bindings.with_input(binding.name.as_str(), contents);
        }

        let mut targets = Vec::new();
        for binding in def.outputs() {
            targets.push((binding.name.as_str(), self.expand(&binding.path)?));
            bindings = bindings.with_output(binding.name.as_str());
        }

        let mut ctx = Context::new(&def.name, self.settings.as_ref(), bindings);
        info!(
            function = %def.name,
            invocation = %ctx.invocation_id,
            "executing function"
        );
        let started = Instant::now();

        let result = call(&mut ctx);

        // Written in declaration order; a failed write leaves earlier outputs in place.
        for (name, path) in targets {
            match ctx.bindings.output(name) {
                Some(contents) => self.blobs.write(&path, contents)?,
                None => debug!(binding = name, "output not set, leaving blob untouched"),
            }
        }

        let elapsed = started.elapsed();
        if elapsed.as_secs() >= 5 {
            warn!(function = %def.name, ?elapsed, "slow invocation");
        }
        info!(
            function = %def.name,
            invocation = %ctx.invocation_id,
            duration_ms = elapsed.as_millis() as u64,
            "executed function"
        );

        Ok(result)
    }
}
