use std::{fmt, io, sync::Arc};

use ecl_core::{EnvConfig, Level, LogRecord, LogStdout, LogStream, Severity, Style};

use crate::global::{self, Defaults};

/// Options for a new [`Logger`]. Unset options fall back to the global defaults.
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub name: String,
    /// Skip the stdout stream.
    pub silent: bool,
    /// Streams attached after the global extra streams.
    pub extra_streams: Vec<Arc<dyn LogStream>>,
    pub style: Option<Style>,
    pub min_severity: Option<Severity>,
    pub app_name: Option<String>,
}

impl LoggerOptions {
    /// Sets the logger name.
    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }
    /// Do not print to stdout.
    pub fn silent(self) -> Self {
        Self {
            silent: true,
            ..self
        }
    }
    /// Dynamically set the silent flag.
    pub fn with_silent(self, yes: bool) -> Self {
        Self {
            silent: yes,
            ..self
        }
    }
    /// Adds a stream.
    pub fn with_stream(mut self, stream: Arc<dyn LogStream>) -> Self {
        self.extra_streams.push(stream);
        self
    }
    /// Adds several streams.
    pub fn with_streams<I>(mut self, streams: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn LogStream>>,
    {
        self.extra_streams.extend(streams);
        self
    }
    pub fn with_style(self, style: Style) -> Self {
        Self {
            style: Some(style),
            ..self
        }
    }
    pub fn with_min_severity(self, severity: Severity) -> Self {
        Self {
            min_severity: Some(severity),
            ..self
        }
    }
    /// Sets the app name prefix.
    pub fn with_app_name(self, app_name: &str) -> Self {
        Self {
            app_name: Some(app_name.into()),
            ..self
        }
    }
    /// Builds the logger against the global defaults.
    pub fn build(self) -> Logger {
        Logger::new(self)
    }
}

/// A named logger dispatching records to its streams.
///
/// Loggers are immutable once built and cheap to clone; clones share streams.
#[derive(Clone)]
pub struct Logger {
    name: String,
    app_name: String,
    min_severity: Severity,
    style: Style,
    streams: Vec<Arc<dyn LogStream>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("app_name", &self.app_name)
            .field("min_severity", &self.min_severity)
            .field("style", &self.style)
            .field("streams", &self.streams.len())
            .finish()
    }
}

impl Logger {
    /// Builds a logger from a snapshot of the global defaults.
    ///
    /// `LOG_STYLE` is consulted only when neither `options` nor the global
    /// defaults pick a style for the stdout stream.
    pub fn new(options: LoggerOptions) -> Self {
        let mut defaults = global::defaults();
        if !options.silent && options.style.is_none() && defaults.style.is_none() {
            defaults.style = EnvConfig::load().style();
        }
        Self::with_defaults(options, &defaults)
    }

    /// Builds a logger from explicit defaults, without touching global state.
    pub fn with_defaults(options: LoggerOptions, defaults: &Defaults) -> Self {
        let LoggerOptions {
            name,
            silent,
            extra_streams,
            style,
            min_severity,
            app_name,
        } = options;
        let style = style.or(defaults.style).unwrap_or_default();
        let mut streams: Vec<Arc<dyn LogStream>> =
            Vec::with_capacity(1 + defaults.extra_streams.len() + extra_streams.len());
        if !silent {
            streams.push(Arc::new(LogStdout::new(style)));
        }
        streams.extend(defaults.extra_streams.iter().cloned());
        streams.extend(extra_streams);
        Self {
            name,
            app_name: app_name.unwrap_or_else(|| defaults.app_name.clone()),
            min_severity: min_severity.unwrap_or(defaults.min_severity),
            style,
            streams,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Style of the stdout stream, even when the logger is silent.
    pub fn style(&self) -> Style {
        self.style
    }

    pub fn streams(&self) -> &[Arc<dyn LogStream>] {
        &self.streams
    }

    /// Whether a record of `level` would reach the streams.
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.min_severity)
    }

    /// Sends one record to every stream in order, stopping at the first error.
    pub fn try_emit(&self, level: Level, message: &str) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let record = LogRecord::new(&self.app_name, &self.name, level, message);
        for stream in &self.streams {
            stream.write(&record)?;
        }
        Ok(())
    }

    /// Like [`Logger::try_emit`], but panics if a stream fails.
    ///
    /// `Fatal` and `Panic` records are dispatched without terminating anything.
    pub fn emit(&self, level: Level, message: &str) {
        if let Err(err) = self.try_emit(level, message) {
            panic!("failed to write {} record: {err}", level.tag());
        }
    }

    fn emit_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, &args.to_string());
        }
    }

    /// Always emitted.
    pub fn log(&self, message: impl AsRef<str>) {
        self.emit(Level::Log, message.as_ref());
    }
    pub fn logf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Log, args);
    }

    pub fn trace(&self, message: impl AsRef<str>) {
        self.emit(Level::Trace, message.as_ref());
    }
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Trace, args);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.emit(Level::Debug, message.as_ref());
    }
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Debug, args);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(Level::Info, message.as_ref());
    }
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Info, args);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.emit(Level::Warn, message.as_ref());
    }
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Warn, args);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(Level::Error, message.as_ref());
    }
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Level::Error, args);
    }

    /// Logs, flushes the streams and exits the process with status 1.
    ///
    /// Stream failures are reported on stderr; the process exits regardless.
    pub fn fatal(&self, message: impl AsRef<str>) -> ! {
        if let Err(err) = self.try_emit(Level::Fatal, message.as_ref()) {
            eprintln!("failed to write FATAL record: {err}");
        }
        if let Err(err) = self.flush() {
            eprintln!("failed to flush log streams: {err}");
        }
        std::process::exit(1)
    }
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args.to_string())
    }

    /// Logs, then panics with `message`.
    pub fn panic(&self, message: impl AsRef<str>) -> ! {
        let message = message.as_ref();
        self.emit(Level::Panic, message);
        panic!("{message}")
    }
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.panic(args.to_string())
    }

    /// Flushes every stream, returning the first error.
    pub fn flush(&self) -> io::Result<()> {
        for stream in &self.streams {
            stream.flush()?;
        }
        Ok(())
    }
}

/// Returns default [`LoggerOptions`].
pub fn logger_options() -> LoggerOptions {
    LoggerOptions::default()
}

/// Builds a logger against the global defaults.
pub fn new_logger(options: LoggerOptions) -> Logger {
    Logger::new(options)
}
