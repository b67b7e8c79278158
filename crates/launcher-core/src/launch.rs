//! Child process execution
//!
//! Spawns the interpreter once with inherited standard streams, waits for it and
//! turns the result into a plain [`LaunchOutcome`]. A non-zero exit is an
//! expected result here, not an error.

use crate::error::LaunchError;
use crate::spec::LaunchSpec;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// Exit code used when the child never started or left no status
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Result of one launch
#[derive(Debug)]
pub struct LaunchOutcome {
    /// Code the launcher should exit with
    pub exit_code: i32,
    /// Set when no child status was available
    pub spawn_error: Option<LaunchError>,
}

impl LaunchOutcome {
    /// Outcome of a child that exited with `code`
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: code,
            spawn_error: None,
        }
    }

    /// Outcome of a launch that produced no usable status
    pub fn failed(error: LaunchError) -> Self {
        Self {
            exit_code: FAILURE_EXIT_CODE,
            spawn_error: Some(error),
        }
    }

    /// Whether the tool ran and reported success
    pub fn success(&self) -> bool {
        self.spawn_error.is_none() && self.exit_code == 0
    }
}

/// Run the tool described by `spec` and wait for it to exit
pub async fn launch(spec: &LaunchSpec) -> LaunchOutcome {
    let program = &spec.interpreter_path;
    debug!(
        command = %spec.command_line(),
        cwd = %spec.working_directory.display(),
        "spawning"
    );

    let mut child = match TokioCommand::new(program)
        .args(spec.args())
        .current_dir(&spec.working_directory)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return LaunchOutcome::failed(LaunchError::spawn(program, e)),
    };

    match child.wait().await {
        Ok(status) => outcome_from_status(spec, status),
        Err(e) => LaunchOutcome::failed(LaunchError::Io(e)),
    }
}

fn outcome_from_status(spec: &LaunchSpec, status: ExitStatus) -> LaunchOutcome {
    debug!(%status, "child exited");
    match status.code() {
        Some(code) => LaunchOutcome::exited(code),
        None => LaunchOutcome::failed(LaunchError::NoStatus {
            program: spec.interpreter_path.clone(),
        }),
    }
}
