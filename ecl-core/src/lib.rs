//! # ecl-core
//! Core utilities for ecl - log records, styles and log streams.

mod config;
mod log_rotation;
mod log_writer;
mod record;
mod style;

pub use config::EnvConfig;
pub use log_rotation::{LogFile, LogFileConfig};
pub use log_writer::{LogStdout, LogStream};
pub use record::{Level, LogRecord, Severity};
pub use style::{Style, format_record, strip_ansi};

pub use colored::Color;
