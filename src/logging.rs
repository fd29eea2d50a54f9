//! Minimal timestamped stderr logger behind the `log` facade.
//!
//! The library only ever logs through `log::*` macros; this module gives the
//! binary a concrete sink. Subprocess output captured by the orchestrator is
//! re-emitted verbatim through the same pipeline.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

fn level_enabled(level: Level, max: LevelFilter) -> bool {
    level <= max
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        level_enabled(metadata.level(), log::max_level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        let level = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        eprintln!("[{timestamp}] [{level}] {}", record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger as the global `log` sink.
///
/// Fails if another logger was already installed (e.g. in tests).
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
