//! Preview timer schedules.

use chrono::Utc;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::Result;

/// Print the next `count` runs of a timer function.
pub fn execute(config: &Config, name: &str, count: usize) -> Result<()> {
    let host = crate::cli::host(config)?;
    let schedule = host.schedule(name)?;

    output::section(&format!("{} ({})", name, schedule.as_str()));
    for time in schedule.upcoming(&Utc::now(), count)? {
        output::list_item(&time.to_rfc3339());
    }

    Ok(())
}
