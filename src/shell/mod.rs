//! Shell command execution with combined-output capture

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of a shell command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    /// Combined stdout and stderr, trailing newline trimmed
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a shell command and capture its combined stdout and stderr.
///
/// The command runs under `sh -c` with stderr merged into stdout, so callers
/// see output in the order the shell produced it. Anything the shell itself
/// writes to stderr (a syntax error in the command string, for instance) is
/// appended to the capture. A trailing newline is trimmed.
pub fn run_command(command: &str, working_dir: Option<&Path>) -> Result<CommandOutput> {
    let merged = format!("{{ {command}; }} 2>&1");

    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(&merged)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }

    let output = cmd
        .output()
        .with_context(|| format!("Failed to spawn command: {command}"))?;

    let mut text = String::from_utf8_lossy(&output.stdout).to_string();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(CommandOutput {
        exit_code: output.status.code().unwrap_or(-1),
        output: text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_captures_stdout() {
        let result = run_command("echo hello", None).unwrap();

        assert!(result.success());
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "hello");
    }

    #[test]
    fn test_captures_stderr_merged() {
        let result = run_command("echo oops 1>&2", None).unwrap();

        assert!(result.success());
        assert_eq!(result.output, "oops");
    }

    #[test]
    fn test_reports_exit_code() {
        let result = run_command("exit 3", None).unwrap();

        assert!(!result.success());
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn test_shell_syntax_error_is_captured() {
        // `fi` alone is a parse error, reported by the shell itself
        let result = run_command("fi", None).unwrap();

        assert!(!result.success());
        assert!(result.output.to_lowercase().contains("syntax error"));
    }

    #[test]
    fn test_runs_in_working_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("probe.txt"), "x").unwrap();

        let result = run_command("ls", Some(dir.path())).unwrap();

        assert!(result.output.contains("probe.txt"));
    }

    #[test]
    fn test_multiline_output_keeps_inner_newlines() {
        let result = run_command("printf 'a\\nb\\n'", None).unwrap();

        assert_eq!(result.output, "a\nb");
    }
}
