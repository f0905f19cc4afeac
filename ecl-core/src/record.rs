use chrono::{DateTime, Local};
use colored::Color;

/// Minimum severity a logger lets through.
///
/// `Log`, `Fatal` and `Panic` records have no severity and are never filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    All,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Level of an emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Log,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    /// Tag printed in the level column.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Level::Log => Color::Green,
            Level::Trace => Color::Magenta,
            Level::Debug => Color::Blue,
            Level::Info => Color::Cyan,
            Level::Warn => Color::Yellow,
            Level::Error | Level::Fatal | Level::Panic => Color::Red,
        }
    }

    /// Severity used for threshold filtering, `None` for levels that always pass.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Level::Trace => Some(Severity::Trace),
            Level::Debug => Some(Severity::Debug),
            Level::Info => Some(Severity::Info),
            Level::Warn => Some(Severity::Warn),
            Level::Error => Some(Severity::Error),
            Level::Log | Level::Fatal | Level::Panic => None,
        }
    }

    /// Whether a logger with threshold `min` emits this level.
    pub fn passes(self, min: Severity) -> bool {
        self.severity().is_none_or(|severity| severity >= min)
    }
}

/// A single log event, built once per call and shared by every stream.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub app_name: String,
    pub name: String,
    pub time: DateTime<Local>,
    pub color: Color,
    pub level: Level,
    pub message: String,
}

impl LogRecord {
    pub fn new(app_name: &str, name: &str, level: Level, message: &str) -> Self {
        Self::at(Local::now(), app_name, name, level, message)
    }

    /// Builds a record with an explicit timestamp.
    pub fn at(
        time: DateTime<Local>,
        app_name: &str,
        name: &str,
        level: Level,
        message: &str,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            name: name.into(),
            time,
            color: level.color(),
            level,
            message: message.into(),
        }
    }
}
