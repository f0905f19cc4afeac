use std::sync::LazyLock;

use chrono::SecondsFormat;
use colored::{Color, Colorize};
use regex::Regex;

use crate::record::LogRecord;

/// Layout used to render a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Default,
    NestJs,
    Spring,
}

impl Style {
    /// Parses a style name, ignoring case. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Style::Default),
            "nestjs" | "nest" => Some(Style::NestJs),
            "spring" => Some(Style::Spring),
            _ => None,
        }
    }
}

const NAME_PLACEHOLDER: &str = "default";
const THREAD_NAME: &str = "main";

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\x1b\\[[0-9;]*m").expect("ANSI escape pattern is valid"));

/// Removes terminal color and text-style sequences.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Renders `record` with `style`. The returned line ends with `\n`.
///
/// Whether color codes are emitted follows `colored`'s global control (terminal
/// detection, `NO_COLOR`, `CLICOLOR_FORCE`, [`colored::control::set_override`]),
/// so the same record may render with or without escapes depending on that state.
pub fn format_record(record: &LogRecord, style: Style) -> String {
    match style {
        Style::Default => format_default(record),
        Style::NestJs => format_nestjs(record),
        Style::Spring => format_spring(record),
    }
}

fn rfc3339(record: &LogRecord) -> String {
    record.time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn name_or_placeholder(name: &str) -> &str {
    if name.is_empty() { NAME_PLACEHOLDER } else { name }
}

fn format_default(record: &LogRecord) -> String {
    let color = record.color;
    let app = format!("{:<12}", record.app_name);
    let app = format!("| {} |", app.as_str().bold());
    let pid = format!("{:<6}", std::process::id());
    let level = format!("{:<6}", record.level.tag());
    let name = format!("{:<20}", format!("[{}]", record.name));
    format!(
        "{} {} {} {} {} - {}\n",
        app.as_str().color(color),
        pid.as_str().italic().color(color),
        rfc3339(record).as_str().color(Color::BrightWhite),
        level.as_str().bold().color(color),
        name.as_str().yellow(),
        record.message.as_str().color(color),
    )
}

fn format_nestjs(record: &LogRecord) -> String {
    let color = record.color;
    let app = format!("[{}]", record.app_name);
    let pid = format!("{:<6}", std::process::id());
    let time = record.time.format("%m/%d/%Y, %-I:%M:%S %p").to_string();
    let level = format!("{:>6}", record.level.tag());
    let name = format!("[{}]", name_or_placeholder(&record.name));
    format!(
        "{} {} - {} {} {} {}\n",
        app.as_str().color(color),
        pid.as_str().color(color),
        time.as_str().color(Color::BrightWhite),
        level.as_str().color(color),
        name.as_str().yellow(),
        record.message.as_str().color(color),
    )
}

fn format_spring(record: &LogRecord) -> String {
    let color = record.color;
    let timestamp = rfc3339(record);
    let (date, time) = (&timestamp[..10], &timestamp[11..]);
    let date_time = format!("{date} {time}");
    let level = format!("{:>6}", record.level.tag());
    let thread = format!("[{THREAD_NAME}]");
    let name = format!("{:<20}", name_or_placeholder(&record.name));
    format!(
        "{} {} {} --- {} {} : {}\n",
        date_time.as_str().color(Color::BrightWhite),
        level.as_str().color(color),
        std::process::id().to_string().as_str().color(Color::BrightWhite),
        thread.as_str().yellow(),
        name.as_str().yellow(),
        record.message.as_str().color(color),
    )
}
