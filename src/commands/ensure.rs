//! The core watchdog flow: probe once, launch the server if the port is dead.

use anyhow::Result;
use colored::Colorize;

use crate::config::WatchConfig;
use crate::launch;
use crate::probe;

/// What a single watchdog pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The probe connected; nothing was launched
    AlreadyRunning,
    /// The probe failed and the server was launched, detached
    Launched { pid: u32 },
}

/// Probe the configured endpoint and launch the server iff the probe fails.
///
/// One probe, one branch: the launch happens exactly once when the port is
/// dead and never when it is alive. There is no re-probe after launching.
pub fn run(config: &WatchConfig) -> Result<EnsureOutcome> {
    if probe::is_alive(&config.host, config.port, config.timeout()) {
        return Ok(EnsureOutcome::AlreadyRunning);
    }

    let pid = launch::launch_detached(&config.server)?;
    Ok(EnsureOutcome::Launched { pid })
}

/// Run the watchdog pass and report the outcome
pub fn execute(config: &WatchConfig) -> Result<()> {
    match run(config)? {
        EnsureOutcome::AlreadyRunning => {
            println!("{}", "Server is already running, nothing to do.".green());
        }
        EnsureOutcome::Launched { pid } => {
            println!(
                "{} (pid {pid})",
                "Server was down, launched it detached.".yellow()
            );
        }
    }
    Ok(())
}
