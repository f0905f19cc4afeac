use std::{
    fmt,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use ecl_core::{LogStream, Severity, Style};

/// App name used when neither the logger nor the global defaults set one.
pub const DEFAULT_APP_NAME: &str = "GoApp";

/// Fallback settings for loggers that leave an option unset.
///
/// Loggers copy these at construction time; later changes to the global defaults
/// do not affect loggers that already exist.
#[derive(Clone)]
pub struct Defaults {
    pub app_name: String,
    /// `None` defers to `LOG_STYLE`, then to [`Style::Default`].
    pub style: Option<Style>,
    pub min_severity: Severity,
    /// Streams appended to every logger, after its stdout stream.
    pub extra_streams: Vec<Arc<dyn LogStream>>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.into(),
            style: None,
            min_severity: Severity::All,
            extra_streams: Vec::new(),
        }
    }
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaults")
            .field("app_name", &self.app_name)
            .field("style", &self.style)
            .field("min_severity", &self.min_severity)
            .field("extra_streams", &self.extra_streams.len())
            .finish()
    }
}

/// Process-wide defaults, read by [`crate::Logger::new`].
static GLOBAL_DEFAULTS: LazyLock<RwLock<Defaults>> =
    LazyLock::new(|| RwLock::new(Defaults::default()));

fn update(f: impl FnOnce(&mut Defaults)) {
    let mut defaults = GLOBAL_DEFAULTS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut defaults);
}

/// Snapshot of the current global defaults.
pub fn defaults() -> Defaults {
    GLOBAL_DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Sets the minimum severity for loggers created afterwards.
pub fn set_min_severity(severity: Severity) {
    update(|defaults| defaults.min_severity = severity);
}

/// Sets the app name prefix for loggers created afterwards.
pub fn set_app_name(name: &str) {
    update(|defaults| defaults.app_name = name.into());
}

/// Sets the stdout style for loggers created afterwards.
pub fn set_style(style: Style) {
    update(|defaults| defaults.style = Some(style));
}

/// Attaches `streams` to every logger created afterwards.
pub fn add_global_extra_streams<I>(streams: I)
where
    I: IntoIterator<Item = Arc<dyn LogStream>>,
{
    update(|defaults| defaults.extra_streams.extend(streams));
}

/// Restores the built-in defaults and drops the global extra streams.
pub fn reset_defaults() {
    update(|defaults| *defaults = Defaults::default());
}
