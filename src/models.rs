//! Core data structures for one orchestration run.
//!
//! Everything here lives only for the duration of a single run: the immutable
//! [`BuildConfig`] supplied by the caller, the [`CommandLine`]/[`CommandSet`]
//! values selected from the detected platform, and the [`ProcessOutput`]
//! captured from each spawned subprocess.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Build-script marker that identifies a frontend project root.
pub const GRUNT_FILE_NAME: &str = "Gruntfile.js";

/// Package-manifest marker that identifies a frontend project root.
pub const GRUNT_FILE_CONFIG: &str = "package.json";

/// Configuration for one orchestration run.
///
/// Field names on the wire match the property names of the original build-tool
/// integration (`gruntPath`, `outputDir`, `copyTo`, `autoUpdate`). All fields
/// are defaultable so a partial JSON file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Working directory for the frontend toolchain. Unset means the entire
    /// run is a no-op.
    pub grunt_path: Option<PathBuf>,

    /// Directory produced by the build step, used as the copy source.
    pub output_dir: Option<PathBuf>,

    /// Destination directory the build output is staged into.
    pub copy_to: Option<PathBuf>,

    /// Whether to run dependency install + update before the build.
    pub auto_update: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            grunt_path: None,
            output_dir: None,
            copy_to: None,
            auto_update: true,
        }
    }
}

/// One external command: program plus argument vector.
///
/// Arguments are always passed separately, never interpolated into a shell
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: &str, args: &[&str]) -> Self {
        CommandLine {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The fixed triple of platform commands used by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSet {
    pub install: CommandLine,
    pub update: CommandLine,
    pub build: CommandLine,
}

/// Captured result of one spawned subprocess.
///
/// Consumed immediately for logging after the process exits; the output bytes
/// are never parsed.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub code: Option<i32>,
    pub success: bool,
}

impl ProcessOutput {
    /// A successful, silent process result. Used by test runners.
    pub fn succeeded() -> Self {
        ProcessOutput {
            stdout: Vec::new(),
            stderr: Vec::new(),
            code: Some(0),
            success: true,
        }
    }

    /// A failed process result with the given exit code. Used by test runners.
    pub fn failed(code: i32) -> Self {
        ProcessOutput {
            stdout: Vec::new(),
            stderr: Vec::new(),
            code: Some(code),
            success: false,
        }
    }
}

/// Terminal state of a run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every configured stage ran to completion.
    Completed,
    /// No working directory was configured; nothing was done.
    Skipped,
}
