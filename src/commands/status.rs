//! Detailed liveness report
//!
//! Goes beyond the raw port probe: also checks that the server binary is
//! where the config says it is, and looks for a matching process. Purely
//! informational; this command never launches anything.

use anyhow::Result;
use colored::Colorize;

use crate::config::WatchConfig;
use crate::probe;
use crate::shell::run_command;

pub fn execute(config: &WatchConfig) -> Result<()> {
    println!("{}", "Vigil Status".bold().blue());
    println!("{}", "=".repeat(40));

    let alive = probe::is_alive(&config.host, config.port, config.timeout());

    println!("\n{}", "Port".bold());
    let port_state = if alive {
        "listening".green()
    } else {
        "not listening".red()
    };
    println!("  {}:{}  {port_state}", config.host, config.port);

    println!("\n{}", "Server binary".bold());
    let bin_path = config.server.dir.join(&config.server.bin);
    if bin_path.exists() {
        println!("  {}  {}", bin_path.display(), "found".green());
    } else {
        println!("  {}  {}", bin_path.display(), "missing".red());
    }

    println!("\n{}", "Process".bold());
    match server_pids(config)? {
        Some(pids) => println!("  running (pid {pids})"),
        None => println!("  {}", "no matching process".yellow()),
    }

    println!();
    Ok(())
}

/// Look up PIDs of processes matching the server binary name.
///
/// Returns `None` when nothing matches (or when pgrep itself is absent —
/// a missing tool should not fail the report).
fn server_pids(config: &WatchConfig) -> Result<Option<String>> {
    let name = match config.server.bin.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(None),
    };

    // Quote the name so binaries with spaces or metacharacters stay one argument
    let quoted = shell_escape::escape(name.into());
    let result = run_command(&format!("pgrep -x {quoted}"), None)?;
    if result.success() && !result.output.is_empty() {
        Ok(Some(result.output.lines().collect::<Vec<_>>().join(", ")))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use std::path::PathBuf;

    #[test]
    fn test_server_pids_none_for_unknown_name() {
        let config = WatchConfig {
            server: ServerConfig {
                bin: PathBuf::from("./definitely-not-a-process"),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(server_pids(&config).unwrap().is_none());
    }

    #[test]
    fn test_server_pids_quotes_metacharacters() {
        // A hostile binary name must stay a single pgrep argument, not
        // become extra shell commands
        let config = WatchConfig {
            server: ServerConfig {
                bin: PathBuf::from("./no such; echo owned"),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(server_pids(&config).unwrap().is_none());
    }

    #[test]
    fn test_server_pids_none_for_empty_binary_name() {
        let config = WatchConfig {
            server: ServerConfig {
                bin: PathBuf::from(".."),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(server_pids(&config).unwrap().is_none());
    }
}
