//! List registered functions.

use serde::Serialize;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::functions::{BlobBinding, FunctionDef, Trigger};
use crate::error::Result;

/// Serializable view of a function definition.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    name: &'a str,
    trigger: &'a Trigger,
    bindings: &'a [BlobBinding],
}

impl<'a> From<&'a FunctionDef> for Summary<'a> {
    fn from(def: &'a FunctionDef) -> Self {
        Self {
            name: &def.name,
            trigger: &def.trigger,
            bindings: &def.bindings,
        }
    }
}

/// List functions with their triggers and bindings.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let host = crate::cli::host(config)?;
    let app = host.app();

    if json {
        let summaries: Vec<Summary<'_>> = app.list().map(Summary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    output::section(&format!("Functions ({})", app.len()));
    for def in app.list() {
        println!("{}", output::name(&def.name));
        output::kv("trigger:", &def.trigger);
        for binding in def.inputs() {
            output::kv("in:     ", &binding.path);
        }
        for binding in def.outputs() {
            output::kv("out:    ", &binding.path);
        }
    }

    Ok(())
}
