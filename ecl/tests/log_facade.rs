use std::{
    io,
    sync::{Arc, Mutex},
};

use ecl::{Level, LogRecord, LogStream, Severity, logger_options};

#[derive(Default)]
struct CaptureStream {
    records: Mutex<Vec<LogRecord>>,
}

impl LogStream for CaptureStream {
    fn write(&self, record: &LogRecord) -> io::Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[test]
fn test_log_macros_reach_installed_logger() {
    let stream = Arc::new(CaptureStream::default());
    logger_options()
        .with_name("facade")
        .with_min_severity(Severity::Info)
        .silent()
        .with_stream(stream.clone())
        .build()
        .install()
        .unwrap();

    log::debug!("filtered");
    log::info!("answer is {}", 42);
    log::error!("failure");

    let records = stream.records.lock().unwrap().clone();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].message, "answer is 42");
    assert_eq!(records[0].name, "facade");
    assert_eq!(records[1].level, Level::Error);

    let again = logger_options().silent().build().install();
    assert!(again.is_err());
}
