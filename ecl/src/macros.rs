/// Formats and logs with [`Logger::log`](crate::Logger::log), which is never filtered.
///
/// ```rust
/// let logger = ecl::logger_options().silent().build();
/// ecl::log!(logger, "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.logf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Formats and logs a `FATAL` record, then exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
