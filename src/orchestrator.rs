//! The build pipeline: validate, install, update, build, copy.
//!
//! A linear sequence of blocking stages with no retries and no branching
//! back. Each stage gates the next; the first error aborts the run. Callers
//! must not execute concurrent runs against the same working or destination
//! directory - nothing here locks the filesystem.

use crate::error::{BuildError, ConfigError, ExecutionError, Result};
use crate::models::{
    BuildConfig, CommandLine, ProcessOutput, RunOutcome, GRUNT_FILE_CONFIG, GRUNT_FILE_NAME,
};
use crate::platform::Platform;
use crate::runner::ProcessRunner;
use std::fs;
use std::path::{Path, PathBuf};

/// Orchestrates one end-to-end frontend build for a single configuration.
///
/// The platform is detected once at construction; the OS does not change
/// mid-run.
pub struct BuildOrchestrator<R: ProcessRunner> {
    config: BuildConfig,
    platform: Platform,
    runner: R,
}

impl<R: ProcessRunner> BuildOrchestrator<R> {
    /// Create an orchestrator for the current host platform.
    pub fn new(config: BuildConfig, runner: R) -> Self {
        Self::with_platform(config, Platform::detect(), runner)
    }

    /// Create an orchestrator for an explicit platform. Exposed for tests and
    /// for embedders that classify the host themselves.
    pub fn with_platform(config: BuildConfig, platform: Platform, runner: R) -> Self {
        BuildOrchestrator {
            config,
            platform,
            runner,
        }
    }

    /// Run the pipeline: marker validation, optional install/update, build,
    /// optional output copy.
    ///
    /// Returns [`RunOutcome::Skipped`] without spawning anything when no
    /// working directory is configured.
    pub fn run(&self) -> Result<RunOutcome> {
        let Some(workdir) = self.config.grunt_path.clone() else {
            log::info!("Cannot find gruntPath, skip grunt process.");
            return Ok(RunOutcome::Skipped);
        };

        self.validate_workdir(&workdir)?;

        let commands = self.platform.command_set();

        if self.config.auto_update {
            log::info!("Updating grunt...");
            self.run_logged(&commands.install, Some(&workdir))?;

            log::info!("Updating grunt plugins and build...");
            self.run_logged(&commands.update, Some(&workdir))?;
        }

        log::info!("Running grunt...");
        self.run_logged(&commands.build, Some(&workdir))?;

        self.copy_output()?;

        log::info!("Process finished.");
        log::info!("Configuration: {:?}", self.config);
        Ok(RunOutcome::Completed)
    }

    /// Check the working directory exists and holds both marker files
    /// (compared case-insensitively against its immediate entries).
    fn validate_workdir(&self, workdir: &Path) -> Result<()> {
        if !workdir.exists() {
            return Err(ConfigError::WorkdirMissing(workdir.display().to_string()).into());
        }

        let mut has_gruntfile = false;
        let mut has_manifest = false;
        for entry in fs::read_dir(workdir).map_err(ConfigError::IoError)? {
            let entry = entry.map_err(ConfigError::IoError)?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.eq_ignore_ascii_case(GRUNT_FILE_NAME) {
                has_gruntfile = true;
            } else if name.eq_ignore_ascii_case(GRUNT_FILE_CONFIG) {
                has_manifest = true;
            }
        }

        if !(has_gruntfile && has_manifest) {
            return Err(ConfigError::MarkersMissing {
                dir: workdir.display().to_string(),
                markers: format!("{GRUNT_FILE_NAME} and {GRUNT_FILE_CONFIG}"),
            }
            .into());
        }

        Ok(())
    }

    /// Stage the build output into the copy destination, when both ends are
    /// configured. Creates the destination tree if absent.
    fn copy_output(&self) -> Result<()> {
        let (Some(output_dir), Some(copy_to)) = (&self.config.output_dir, &self.config.copy_to)
        else {
            log::info!("outputDir or copyTo is null, skip copy resource.");
            return Ok(());
        };

        if !output_dir.exists() {
            return Err(ConfigError::OutputDirMissing(output_dir.display().to_string()).into());
        }

        if !copy_to.exists() {
            fs::create_dir_all(copy_to).map_err(|e| ConfigError::DestinationCreateFailed {
                path: copy_to.display().to_string(),
                source: e,
            })?;
        }

        // The copy runs without a cwd, so both arguments must be absolute.
        let src = absolute(output_dir)?;
        let dest = absolute(copy_to)?;
        log::info!(
            "copying resources from {} to {}",
            src.display(),
            dest.display()
        );
        self.run_logged(&self.platform.copy_command(&src, &dest), None)?;
        Ok(())
    }

    /// Run one command to completion, log its captured output in full, and
    /// fail on spawn error or non-zero exit.
    fn run_logged(&self, command: &CommandLine, cwd: Option<&Path>) -> Result<()> {
        let output = self.runner.run(command, cwd).map_err(BuildError::from)?;
        log_captured(command, &output);

        if !output.success {
            return Err(ExecutionError::CommandFailed {
                command: command.to_string(),
                code: output.code,
            }
            .into());
        }
        Ok(())
    }
}

/// Emit the captured stdout/stderr of a finished process as log lines.
///
/// Output is logged once per drain-to-EOF cycle, after the process exits,
/// never incrementally per line.
fn log_captured(command: &CommandLine, output: &ProcessOutput) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.is_empty() {
        log::info!("[{}] stdout: {}", command.program, stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
        log::info!("[{}] stderr: {}", command.program, stderr);
    }
}

/// Absolutize without resolving symlinks or adding verbatim `\\?\` prefixes;
/// the result is handed to `xcopy`/`cp` as a plain command-line argument.
fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| ConfigError::IoError(e).into())
}
