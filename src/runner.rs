//! Blocking subprocess execution behind a trait seam.
//!
//! The orchestrator only talks to [`ProcessRunner`], so tests can substitute a
//! recording implementation and count spawns without touching the real
//! toolchain.

use crate::error::ExecutionError;
use crate::models::{CommandLine, ProcessOutput};
use std::path::Path;
use std::process::Command;

/// Seam for spawning external commands.
///
/// Implementations must block until the process exits and its output streams
/// reach end-of-stream, and must release the process handle on every exit
/// path.
pub trait ProcessRunner {
    /// Run `command` to completion, optionally inside `cwd`, capturing its
    /// output in full.
    fn run(&self, command: &CommandLine, cwd: Option<&Path>)
        -> Result<ProcessOutput, ExecutionError>;
}

/// Production runner backed by `std::process::Command`.
///
/// `output()` waits for exit and drains stdout/stderr to EOF, so captured
/// output becomes available exactly once per process, after it closes its
/// streams. It also reaps the child on every path, success or error.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(
        &self,
        command: &CommandLine,
        cwd: Option<&Path>,
    ) -> Result<ProcessOutput, ExecutionError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| ExecutionError::SpawnFailed {
            command: command.to_string(),
            source: e,
        })?;

        Ok(ProcessOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.status.code(),
            success: output.status.success(),
        })
    }
}
