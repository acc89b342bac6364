//! Probe-only command: report liveness through the exit code.

use anyhow::Result;
use colored::Colorize;

use crate::config::WatchConfig;
use crate::probe;

/// Probe the configured endpoint once. Exits 1 when the port is dead so the
/// result is usable from shell scripts and cron.
pub fn execute(config: &WatchConfig) -> Result<()> {
    if probe::is_alive(&config.host, config.port, config.timeout()) {
        println!("{}", "alive".green().bold());
        Ok(())
    } else {
        println!("{}", "dead".red().bold());
        std::process::exit(1);
    }
}
