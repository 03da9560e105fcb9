//! Process runner backed by `std::process::Command`.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use sprig_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::{CommandLine, CommandOutput},
    error::SprigResult,
};

/// Production runner: one blocking child process per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandLine, working_dir: &Path) -> SprigResult<CommandOutput> {
        debug!(
            program = command.program(),
            args = ?command.args(),
            cwd = %working_dir.display(),
            "running command"
        );

        let output = Command::new(command.program())
            .args(command.args())
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.to_string(),
                exit_code: None,
                output: e.to_string(),
            })?;

        let captured = CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(exit_code = captured.exit_code, "command finished");

        if output.status.success() {
            Ok(captured)
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                // None here means killed by a signal.
                exit_code: output.status.code(),
                output: captured.combined(),
            }
            .into())
        }
    }
}
