//! Unified error type hierarchy for grunt-bridge
//!
//! Provides structured error handling with ConfigError, ExecutionError, and the
//! top-level BuildError. Config failures (bad paths, missing markers) and
//! execution failures (subprocess spawn/exit) stay distinguishable all the way
//! up to the caller.

use std::io;
use thiserror::Error;

/// Configuration and filesystem validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid JSON in config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Working directory does not exist: {0}")]
    WorkdirMissing(String),

    #[error("Not found {markers} in {dir}")]
    MarkersMissing { dir: String, markers: String },

    #[error("Output directory does not exist: {0}")]
    OutputDirMissing(String),

    #[error("Failed to create copy destination {path}: {source}")]
    DestinationCreateFailed { path: String, source: io::Error },

    #[error("IO error during config operations: {0}")]
    IoError(#[from] io::Error),
}

/// Subprocess execution errors.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Failed to spawn '{command}': {source}")]
    SpawnFailed { command: String, source: io::Error },

    #[error("Command '{command}' exited with {}", exit_code_label(.code))]
    CommandFailed { command: String, code: Option<i32> },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Top-level error for one orchestration run.
///
/// Tagged by failure cause so callers (and tests) can tell validation problems
/// apart from subprocess failures.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

impl BuildError {
    /// True when the failure came from validating paths or config, not from a
    /// spawned process.
    pub fn is_config(&self) -> bool {
        matches!(self, BuildError::Config(_))
    }
}

/// Crate-level result type for fallible orchestration operations.
pub type Result<T> = std::result::Result<T, BuildError>;
