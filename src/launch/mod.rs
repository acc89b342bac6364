//! Detached server launch
//!
//! Fire-and-forget process spawning: the child is placed in its own session
//! with all standard streams discarded, and the caller gets the PID back
//! immediately without waiting on or monitoring the child.

use anyhow::{Context, Result};
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use std::thread;

use crate::config::ServerConfig;

/// Spawn a background thread to reap a child process when it exits.
///
/// Ensures `wait()` is eventually called so the child cannot linger as a
/// zombie while this process is still running. The thread exits with the
/// process if the child outlives us, at which point init adopts the child.
fn spawn_reaper_thread(mut child: std::process::Child) {
    thread::spawn(move || {
        let _ = child.wait();
    });
}

/// Launch the configured server, detached from this process.
///
/// The server is started in its working directory with stdin, stdout, and
/// stderr all redirected to null, and `setsid()` called between fork and
/// exec so it owns its own session and survives our exit.
///
/// Returns the child PID. The launch is not verified beyond the spawn
/// itself succeeding: no exit-code check, no re-probe.
pub fn launch_detached(server: &ServerConfig) -> Result<u32> {
    let mut command = Command::new(&server.bin);
    command
        .args(&server.args)
        .current_dir(&server.dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // SAFETY: setsid is async-signal-safe, which is all pre_exec requires.
    unsafe {
        command.pre_exec(|| {
            nix::unistd::setsid().map_err(std::io::Error::from)?;
            Ok(())
        });
    }

    let child = command.spawn().with_context(|| {
        format!(
            "Failed to launch {} in {}",
            server.bin.display(),
            server.dir.display()
        )
    })?;

    let pid = child.id();
    tracing::info!(pid, bin = %server.bin.display(), "launched server");

    spawn_reaper_thread(child);

    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn server_running(dir: PathBuf, bin: &str, args: &[&str]) -> ServerConfig {
        ServerConfig {
            dir,
            bin: PathBuf::from(bin),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_launch_returns_pid_without_waiting() {
        let dir = TempDir::new().unwrap();
        let config = server_running(dir.path().to_path_buf(), "/bin/sh", &["-c", "sleep 5"]);

        let start = std::time::Instant::now();
        let pid = launch_detached(&config).unwrap();

        assert!(pid > 0);
        // Fire-and-forget: we must not have waited on the child
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_launch_runs_in_configured_directory() {
        let dir = TempDir::new().unwrap();
        let marker = dir.path().join("started");
        let config = server_running(
            dir.path().to_path_buf(),
            "/bin/sh",
            &["-c", "touch started"],
        );

        launch_detached(&config).unwrap();

        // The child writes relative to its working directory
        for _ in 0..50 {
            if marker.exists() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        panic!("marker file never appeared in {}", dir.path().display());
    }

    #[test]
    fn test_launch_missing_binary_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = server_running(dir.path().to_path_buf(), "./no-such-binary", &[]);

        assert!(launch_detached(&config).is_err());
    }
}
