//! Command-line interface.
//!
//! The binary stands in for the function host: it loads `fnsamples.toml`,
//! builds the sample app and runs whatever the command asks for.

pub mod invoke;
pub mod list;
pub mod output;
pub mod resolve;
pub mod schedule;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::functions::{FsBlobStore, FunctionApp, Host, HttpMethod};
use crate::error::Result;

/// fnsamples - serverless function samples with a local host.
#[derive(Parser)]
#[command(
    name = "fnsamples",
    about = "Run serverless function samples against local settings and blob storage",
    version
)]
pub struct Cli {
    /// Enable debug logging and resolver diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(long, global = true, env = constants::CONFIG_ENV, default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List registered functions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Invoke a function by name
    Invoke {
        /// Function name (e.g., http_function_sample)
        name: String,
        #[command(flatten)]
        request: RequestArgs,
        /// Mark a timer invocation as past due
        #[arg(long)]
        past_due: bool,
    },

    /// Invoke the HTTP function bound to a route
    Route {
        /// Route path (e.g., /api/req)
        path: String,
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Resolve an app setting as a secret
    Resolve {
        /// Setting name (e.g., ExampleSecret)
        key: String,
        /// Echo the resolved value in diagnostics instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// Show upcoming runs of a timer function
    Schedule {
        /// Timer function name
        name: String,
        /// Number of runs to show
        #[arg(
            short = 'n',
            long,
            default_value_t = 5,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=constants::MAX_SCHEDULE_PREVIEW)
        )]
        count: usize,
    },
}

/// HTTP request options shared by `invoke` and `route`.
#[derive(clap::Args, Debug, Clone)]
pub struct RequestArgs {
    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_parser = parse_pair)]
    pub query: Vec<(String, String)>,

    /// Request body
    #[arg(short, long)]
    pub body: Option<String>,

    /// HTTP method
    #[arg(short, long, default_value = "GET")]
    pub method: HttpMethod,
}

fn parse_pair(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {:?}", s))
}

/// Build a host from the configuration file.
pub fn host(config: &Config) -> Result<Host> {
    let app = FunctionApp::samples()?;
    let settings = Arc::new(config.app_settings());
    let blobs = Arc::new(FsBlobStore::new(config.blob_root()));
    Ok(Host::new(app, settings, blobs))
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::List { json } => list::execute(&config, json),
        Command::Invoke {
            name,
            request,
            past_due,
        } => invoke::by_name(&config, &name, &request, past_due),
        Command::Route { path, request } => invoke::by_route(&config, &path, &request),
        Command::Resolve { key, reveal } => resolve::execute(&config, &key, cli.verbose, reveal),
        Command::Schedule { name, count } => schedule::execute(&config, &name, count),
    }
}
