//! End-to-end pipeline tests through the public API.
//!
//! Drives the orchestrator with a recording runner so subprocess counts and
//! ordering can be asserted without a real npm/grunt toolchain, and wires the
//! config loader in front of it the way the binary does.

use grunt_bridge::{
    load_config_from_file, BuildConfig, BuildError, BuildOrchestrator, CommandLine, ConfigError,
    ExecutionError, Platform, ProcessOutput, ProcessRunner, RunOutcome,
};
use std::fs;
use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records every command line instead of spawning it. The log is shared so it
/// stays readable after the runner moves into the orchestrator.
#[derive(Default)]
struct RecordingRunner {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingRunner {
    fn log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(
        &self,
        command: &CommandLine,
        _cwd: Option<&Path>,
    ) -> Result<ProcessOutput, ExecutionError> {
        self.calls.lock().unwrap().push(command.to_string());
        Ok(ProcessOutput::succeeded())
    }
}

fn frontend_project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    File::create(dir.path().join("Gruntfile.js")).expect("Gruntfile.js");
    File::create(dir.path().join("package.json")).expect("package.json");
    dir
}

#[test]
fn full_pipeline_from_config_file() {
    let project = frontend_project();
    let dist = project.path().join("dist");
    fs::create_dir(&dist).expect("dist");
    File::create(dist.join("app.min.js")).expect("artifact");
    let staging = project.path().join("target/classes/static");

    let config_path = project.path().join("grunt-bridge.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"gruntPath": {:?}, "outputDir": {:?}, "copyTo": {:?}}}"#,
            project.path().display().to_string(),
            dist.display().to_string(),
            staging.display().to_string(),
        ),
    )
    .expect("write config");

    let config = load_config_from_file(&config_path).expect("load config");
    assert!(config.auto_update, "autoUpdate defaults to true");

    let runner = RecordingRunner::default();
    let log = runner.log();
    let orchestrator = BuildOrchestrator::with_platform(config, Platform::Posix, runner);
    let outcome = orchestrator.run().expect("pipeline should complete");
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(staging.exists(), "copy destination must be created");

    // install, update, build, copy - in that order.
    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], "npm install grunt --save-dev");
    assert_eq!(calls[1], "npm install");
    assert_eq!(calls[2], "grunt");
    assert!(calls[3].starts_with("cp -rf "));
}

#[test]
fn windows_platform_runs_everything_through_cmd() {
    let project = frontend_project();
    let runner = RecordingRunner::default();
    let log = runner.log();
    let config = BuildConfig {
        grunt_path: Some(project.path().to_path_buf()),
        ..BuildConfig::default()
    };
    let orchestrator = BuildOrchestrator::with_platform(config, Platform::Windows, runner);
    orchestrator.run().expect("pipeline should complete");

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.starts_with("cmd.exe /c ")));
}

#[test]
fn skipped_run_spawns_nothing() {
    let runner = RecordingRunner::default();
    let log = runner.log();
    let orchestrator =
        BuildOrchestrator::with_platform(BuildConfig::default(), Platform::Posix, runner);
    assert_eq!(orchestrator.run().unwrap(), RunOutcome::Skipped);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn marker_validation_failure_is_a_config_error() {
    let dir = TempDir::new().expect("tempdir");
    File::create(dir.path().join("Gruntfile.js")).expect("marker");
    // package.json deliberately missing

    let runner = RecordingRunner::default();
    let log = runner.log();
    let config = BuildConfig {
        grunt_path: Some(dir.path().to_path_buf()),
        ..BuildConfig::default()
    };
    let orchestrator = BuildOrchestrator::with_platform(config, Platform::Posix, runner);
    match orchestrator.run() {
        Err(BuildError::Config(ConfigError::MarkersMissing { dir: reported, .. })) => {
            assert_eq!(reported, dir.path().display().to_string());
        }
        other => panic!("expected MarkersMissing, got {other:?}"),
    }
    assert!(log.lock().unwrap().is_empty(), "no subprocess may spawn");
}

#[test]
fn missing_output_dir_is_a_config_error() {
    let project = frontend_project();
    let config = BuildConfig {
        grunt_path: Some(project.path().to_path_buf()),
        output_dir: Some(project.path().join("never-built")),
        copy_to: Some(project.path().join("staging")),
        auto_update: false,
    };
    let orchestrator =
        BuildOrchestrator::with_platform(config, Platform::Posix, RecordingRunner::default());
    match orchestrator.run() {
        Err(BuildError::Config(ConfigError::OutputDirMissing(_))) => {}
        other => panic!("expected OutputDirMissing, got {other:?}"),
    }
}
