//! Function definitions and the context handed to handlers.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use super::http::{HttpRequest, HttpResponse};
use super::trigger::{BlobBinding, Direction, Trigger};
use crate::core::settings::Settings;

/// Timer invocation details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerInfo {
    /// The invocation is running later than scheduled
    pub past_due: bool,
}

/// Blob values for one invocation.
///
/// Inputs are loaded before the handler runs. Outputs start empty; whatever
/// the handler sets is written back afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bindings {
    inputs: BTreeMap<String, String>,
    outputs: BTreeMap<String, Option<String>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an input value.
    pub fn with_input(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.inputs.insert(name.into(), contents.into());
        self
    }

    /// Declare an output slot.
    pub fn with_output(mut self, name: impl Into<String>) -> Self {
        self.outputs.insert(name.into(), None);
        self
    }

    pub fn input(&self, name: &str) -> Option<&str> {
        self.inputs.get(name).map(String::as_str)
    }

    /// Set an output value. Ignored when no such output is bound.
    pub fn set(&mut self, name: &str, contents: impl Into<String>) {
        if let Some(slot) = self.outputs.get_mut(name) {
            *slot = Some(contents.into());
        }
    }

    /// Value set for an output, if any.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).and_then(|v| v.as_deref())
    }
}

/// Everything a handler can see about the current invocation.
pub struct Context<'a> {
    pub invocation_id: Uuid,
    pub function_name: &'a str,
    pub settings: &'a dyn Settings,
    pub bindings: Bindings,
    /// Invocation start time
    pub now: DateTime<Utc>,
}

impl<'a> Context<'a> {
    pub fn new(function_name: &'a str, settings: &'a dyn Settings, bindings: Bindings) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            function_name,
            settings,
            bindings,
            now: Utc::now(),
        }
    }
}

pub type HttpHandler = fn(&HttpRequest, &mut Context<'_>) -> HttpResponse;
pub type TimerHandler = fn(&TimerInfo, &mut Context<'_>);

/// Entry point of a function.
#[derive(Clone, Copy)]
pub enum Handler {
    Http(HttpHandler),
    Timer(TimerHandler),
}

impl Handler {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Timer(_) => "timer",
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::{}", self.kind())
    }
}

/// A registered function: name, trigger, bindings and handler.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: String,
    pub trigger: Trigger,
    pub bindings: Vec<BlobBinding>,
    pub handler: Handler,
}

impl FunctionDef {
    pub fn http(name: impl Into<String>, route: impl Into<String>, handler: HttpHandler) -> Self {
        Self {
            name: name.into(),
            trigger: Trigger::http(route),
            bindings: Vec::new(),
            handler: Handler::Http(handler),
        }
    }

    pub fn timer(
        name: impl Into<String>,
        schedule: impl Into<String>,
        handler: TimerHandler,
    ) -> Self {
        Self {
            name: name.into(),
            trigger: Trigger::timer(schedule),
            bindings: Vec::new(),
            handler: Handler::Timer(handler),
        }
    }

    /// Attach a blob binding.
    pub fn bind(mut self, binding: BlobBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    pub fn inputs(&self) -> impl Iterator<Item = &BlobBinding> {
        self.bindings.iter().filter(|b| b.direction == Direction::In)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &BlobBinding> {
        self.bindings.iter().filter(|b| b.direction == Direction::Out)
    }
}
