//! Resolve an app setting as a secret.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::secrets::Resolver;
use crate::error::Result;

/// Resolve `key` and confirm it holds a usable value.
///
/// The value itself is never printed; with `--verbose` the resolver reports
/// it (masked unless `reveal`) through the log.
pub fn execute(config: &Config, key: &str, verbose: bool, reveal: bool) -> Result<()> {
    let settings = config.app_settings();

    Resolver::new(&settings)
        .verbose(verbose)
        .reveal_values(reveal)
        .resolve(key)?;

    output::success(&format!(
        "{} resolved to a secret value",
        output::name(key)
    ));
    Ok(())
}
