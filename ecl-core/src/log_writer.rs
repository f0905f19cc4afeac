use std::io::{self, Write};

use crate::{
    config::EnvConfig,
    record::LogRecord,
    style::{Style, format_record},
};

/// A destination for log records.
///
/// Streams are shared between loggers, so `write` takes `&self`; implementations
/// serialize access internally when they hold mutable state.
pub trait LogStream: Send + Sync {
    fn write(&self, record: &LogRecord) -> io::Result<()>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Prints formatted records to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStdout {
    style: Style,
}

impl LogStdout {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Uses the style named by `LOG_STYLE`, or the default style.
    pub fn from_env() -> Self {
        Self::new(EnvConfig::load().style().unwrap_or_default())
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

impl LogStream for LogStdout {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        let line = format_record(record, self.style);
        // console output is best effort
        let _ = io::stdout().lock().write_all(line.as_bytes());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        let _ = io::stdout().flush();
        Ok(())
    }
}
