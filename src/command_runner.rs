//! Execution of `networksetup` commands.
//!
//! All calls to the network configuration utility go through the
//! [`CommandRunner`] trait. The editor only ever sees this trait, which is
//! what lets tests drive it with a recording fake instead of the real OS.
//!
//! # Failure Modes
//!
//! - Spawn failure (binary missing, permission): `Err(PrefNetError::Command)`
//! - Non-zero exit: `Ok(CommandOutput { success: false, .. })`. Whether that
//!   matters is the caller's decision.

use crate::error::{PrefNetError, Result};
use crate::netcmd::{DEFAULT_NETWORKSETUP, NetworkCommand};
use crate::process_guard::{ChildRegistry, CommandProcessGroup};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Capability: run one network configuration command and report what it printed.
pub trait CommandRunner {
    fn run(&self, command: &NetworkCommand) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &NetworkCommand) -> Result<CommandOutput> {
        (**self).run(command)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, command: &NetworkCommand) -> Result<CommandOutput> {
        (**self).run(command)
    }
}

/// Output from one command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    pub success: bool,
    /// True if the command was skipped by dry-run mode.
    pub dry_run: bool,
}

impl CommandOutput {
    /// Successful output carrying `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
            success: true,
            dry_run: false,
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
            success: false,
            dry_run: false,
        }
    }

    /// Placeholder for a destructive command skipped in dry-run mode.
    pub fn skipped(command: &NetworkCommand) -> Self {
        Self {
            stdout: format!("[DRY RUN] Skipped: {}\n", command),
            stderr: String::new(),
            exit_code: Some(0),
            success: true,
            dry_run: true,
        }
    }

    /// Check if the command succeeded and return an error if not.
    pub fn ensure_success(&self, context: &str) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(PrefNetError::command(format!(
                "{} failed (exit code {}): {}",
                context,
                self.exit_code.unwrap_or(-1),
                self.stderr.trim()
            )))
        }
    }

    /// Short human-readable reason for a failure: stderr, else stdout.
    ///
    /// `networksetup` prints some errors (e.g. "not found in preferred
    /// networks") on stdout with exit status 0 or 1 depending on release.
    pub fn detail(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Runs commands against the real `networksetup` binary.
#[derive(Debug, Clone)]
pub struct NetworkSetup {
    program: PathBuf,
}

impl NetworkSetup {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for NetworkSetup {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORKSETUP)
    }
}

impl CommandRunner for NetworkSetup {
    fn run(&self, command: &NetworkCommand) -> Result<CommandOutput> {
        let args = command.to_cli_args();
        debug!(program = %self.program.display(), ?args, "spawning");

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .in_new_process_group()
            .spawn()
            .map_err(|e| {
                PrefNetError::command(format!("failed to spawn {}: {}", self.program.display(), e))
            })?;
        let pid = child.id();

        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.register(pid);
        }

        let waited = child.wait_with_output();

        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.unregister(pid);
        }

        let output = waited
            .map_err(|e| PrefNetError::command(format!("failed waiting for {}: {}", command, e)))?;

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
            success: output.status.success(),
            dry_run: false,
        };
        debug!(%command, exit_code = ?result.exit_code, "finished");
        Ok(result)
    }
}

/// Wraps a runner and skips destructive commands.
///
/// Read-only commands still reach the inner runner so the preview shows the
/// real device and preferred list.
#[derive(Debug, Clone)]
pub struct DryRunRunner<R> {
    inner: R,
}

impl<R: CommandRunner> DryRunRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: CommandRunner> CommandRunner for DryRunRunner<R> {
    fn run(&self, command: &NetworkCommand) -> Result<CommandOutput> {
        if command.is_destructive() {
            info!(%command, "[DRY RUN] skipping");
            Ok(CommandOutput::skipped(command))
        } else {
            self.inner.run(command)
        }
    }
}
