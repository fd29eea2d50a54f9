//! grunt-bridge: frontend build orchestration for packaging pipelines.
//!
//! Runs the npm/grunt toolchain inside a configured working directory and
//! stages the build output into a destination tree. One [`BuildOrchestrator`]
//! run is a linear pipeline: platform detection, marker-file validation,
//! optional dependency install/update, build invocation, optional recursive
//! output copy. Every stage blocks on its subprocess; the first error aborts
//! the rest.
//!
//! The system is organized into functional modules:
//! - **error**: Unified error type hierarchy
//! - **models**: Configuration and per-run data structures
//! - **platform**: OS family classification and command tables
//! - **runner**: Blocking subprocess execution behind a trait seam
//! - **config**: Config file loading and serialization
//! - **orchestrator**: The sequential build pipeline
//! - **logging**: Stderr sink for the `log` facade
//!
//! Concurrent runs against the same working or destination directory are not
//! supported; callers are responsible for serializing invocations.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod platform;
pub mod runner;

// Re-export the log crate for macro usage
pub use log;

pub use config::{load_config_from_file, save_config_to_file};
pub use error::{BuildError, ConfigError, ExecutionError, Result};
pub use models::{BuildConfig, CommandLine, CommandSet, ProcessOutput, RunOutcome};
pub use orchestrator::BuildOrchestrator;
pub use platform::Platform;
pub use runner::{ProcessRunner, SystemRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports_accessible() {
        let _: Result<RunOutcome> = Ok(RunOutcome::Skipped);
        let _ = Platform::from_os_name("linux");
        let _ = BuildConfig::default();
    }
}
