//! # ecl
//! Leveled, styleable logger with stdout and rolling file streams.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! ecl = "0.1.0"
//! ```
//!
//! ```rust
//! use ecl::{Severity, logger_options};
//!
//! ecl::set_app_name("ExampleApp");
//! ecl::set_min_severity(Severity::All);
//!
//! let logger = logger_options().with_name("Example").build();
//! logger.log("Hello, world!");
//! logger.warn("This is a warning");
//! ecl::info!(logger, "{} workers started", 4);
//! ```
//!
//! ## Styles
//! Three layouts are available: [`Style::Default`], [`Style::NestJs`] and [`Style::Spring`].
//! A style is picked per logger, globally with [`set_style`], or with the `LOG_STYLE`
//! environment variable (`nestjs` or `spring`).
//!
//! ```rust
//! use ecl::{Style, logger_options};
//!
//! let logger = logger_options()
//!     .with_name("OtherService")
//!     .with_style(Style::Spring)
//!     .build();
//! logger.error("This is an error");
//! ```
//!
//! ## Logging to files
//! File streams write plain text (colors are stripped). With `rollover` a new file is
//! started every day, and `max_file_size_kb` splits a day into numbered segments.
//! A stream can be shared by several loggers, or attached to all of them with
//! [`add_global_extra_streams`].
//!
//! ```rust
//! use std::sync::Arc;
//! use ecl::{LogFile, LogFileConfig, LogStream, Style, logger_options};
//!
//! let _ = std::fs::remove_dir_all("/tmp/ecl_doc");
//! let file: Arc<dyn LogStream> = Arc::new(
//!     LogFile::new(LogFileConfig {
//!         folder: "/tmp/ecl_doc".into(),
//!         filename: "app".into(),
//!         style: Style::NestJs,
//!         ..Default::default()
//!     })
//!     .expect("folder and filename are set"),
//! );
//!
//! let logger = logger_options()
//!     .with_name("files")
//!     .silent() // disable stdout logging if needed
//!     .with_stream(file)
//!     .build();
//! logger.info("Hello, world!");
//! assert!(std::fs::read_to_string("/tmp/ecl_doc/app.log").unwrap().ends_with("[files] Hello, world!\n"));
//! ```
//!
//! ## `log` crate integration
//! [`Logger::install`] makes a logger the backend of `log::info!` and friends.

mod facade;
mod global;
mod logger;
mod macros;

pub use ecl_core::{
    Color, EnvConfig, Level, LogFile, LogFileConfig, LogRecord, LogStdout, LogStream, Severity,
    Style, format_record, strip_ansi,
};
pub use global::{
    DEFAULT_APP_NAME, Defaults, add_global_extra_streams, defaults, reset_defaults, set_app_name,
    set_min_severity, set_style,
};
pub use logger::{Logger, LoggerOptions, logger_options, new_logger};
