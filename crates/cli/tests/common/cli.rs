//! CLI command execution helpers with automatic timing
//!
//! This module provides a wrapper around the `tw` CLI binary that
//! points it at a private config file, measures execution time, and
//! provides convenient assertion methods.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// CLI command builder with timing
pub struct TwCommand {
    binary_path: PathBuf,
    config_path: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
}

impl TwCommand {
    /// Create a new command using the config file at `config_path`
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_tw")),
            config_path: config_path.as_ref().to_path_buf(),
            args: Vec::new(),
            env: HashMap::new(),
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Execute command and return result with timing
    pub fn execute(&self) -> Result<CommandResult> {
        let start = Instant::now();

        let output = Command::new(&self.binary_path)
            .args(&self.args)
            .env("TICKWISE_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .envs(&self.env)
            .stdin(Stdio::null())
            .output()
            .context("Failed to execute command")?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            duration: start.elapsed(),
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }
}

/// Command execution result with timing
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl CommandResult {
    /// Check if command succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Check if stdout contains text
    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    /// Check if stderr contains text
    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }

    /// Non-empty stdout lines, trimmed
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Count replay lines ending in `verdict` ("accepted" / "suppressed")
    pub fn count_verdicts(&self, verdict: &str) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.contains("ms") && line.ends_with(verdict))
            .count()
    }
}

/// Scratch directory with a config path that does not exist yet
pub fn scratch_config() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

/// Macro for convenient command construction
///
/// Usage:
/// ```ignore
/// tw!(&config_path, "ordinal", "21").assert_success()?;
/// ```
#[macro_export]
macro_rules! tw {
    ($config:expr, $($arg:expr),*) => {{
        let mut cmd = $crate::common::cli::TwCommand::new($config);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(stdout: &str) -> CommandResult {
        CommandResult {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
            duration: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_count_verdicts() {
        let out = result(
            "  1000ms  accepted\n  1100ms  suppressed\n  1400ms  accepted\n2 of 3 accepted (window 300ms)\n",
        );
        assert_eq!(out.count_verdicts("accepted"), 2);
        assert_eq!(out.count_verdicts("suppressed"), 1);
    }

    #[test]
    fn test_lines_skip_blank() {
        let out = result("a\n\n  b  \n");
        assert_eq!(out.lines(), vec!["a", "b"]);
    }
}
