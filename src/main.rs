//! fnsamples - serverless function samples with a local host.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fnsamples::cli::output;
use fnsamples::cli::{execute, Cli};
use fnsamples::core::constants;
use fnsamples::error::{Error, FunctionError, SecretError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("fnsamples=debug")
        } else {
            EnvFilter::new("fnsamples=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Function(FunctionError::NotFound(_))
            | Error::Function(FunctionError::RouteNotFound(_)) => Some("run: fnsamples list"),
            Error::Secret(SecretError::MissingConfiguration { .. }) => {
                Some("add it under [settings] in fnsamples.toml or export it")
            }
            Error::Function(FunctionError::Binding { .. }) => {
                Some("binding paths and schedules read %Name% from the app settings")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
