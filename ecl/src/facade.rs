use ecl_core::{Level, Severity};
use log::{LevelFilter, Log, SetLoggerError};

use crate::Logger;

/// Adapter routing `log` macros to a [`Logger`].
struct FacadeLogger(Logger);

fn level_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

fn level_filter(severity: Severity) -> LevelFilter {
    match severity {
        Severity::All | Severity::Trace => LevelFilter::Trace,
        Severity::Debug => LevelFilter::Debug,
        Severity::Info => LevelFilter::Info,
        Severity::Warn => LevelFilter::Warn,
        Severity::Error => LevelFilter::Error,
    }
}

impl Log for FacadeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.0.enabled(level_of(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let level = level_of(record.level());
        if self.0.enabled(level) {
            self.0.emit(level, &record.args().to_string());
        }
    }

    fn flush(&self) {
        let _ = self.0.flush();
    }
}

impl Logger {
    /// Registers this logger as the backend of the `log` crate macros.
    ///
    /// Fails if another `log` backend is already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max_level = level_filter(self.min_severity());
        log::set_boxed_logger(Box::new(FacadeLogger(self)))?;
        log::set_max_level(max_level);
        Ok(())
    }
}
