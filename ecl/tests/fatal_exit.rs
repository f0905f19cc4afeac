use std::{env, io, process::Command, sync::Arc, thread};

use ecl::{Defaults, LogRecord, LogStream, Logger, logger_options};

const CHILD_ENV: &str = "ECL_FATAL_EXIT_CHILD";

struct FailingStream;

impl LogStream for FailingStream {
    fn write(&self, _: &LogRecord) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

/// Runs `test` again in a child process with `CHILD_ENV` set and returns its status code.
fn run_child(test: &str) -> (Option<i32>, String) {
    let output = Command::new(env::current_exe().unwrap())
        .args(["--exact", test, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_fatal_exits_even_when_a_stream_fails() {
    if env::var_os(CHILD_ENV).is_some() {
        let logger = Logger::with_defaults(
            logger_options()
                .silent()
                .with_stream(Arc::new(FailingStream)),
            &Defaults::default(),
        );
        // exit must end the whole process, not just this thread
        let handle = thread::spawn(move || logger.fatal("bye"));
        let _ = handle.join();
        eprintln!("process still alive");
        return;
    }
    let (code, stderr) = run_child("test_fatal_exits_even_when_a_stream_fails");
    assert_eq!(code, Some(1), "{stderr}");
    assert!(stderr.contains("failed to write FATAL record: disk full"), "{stderr}");
    assert!(!stderr.contains("process still alive"), "{stderr}");
}

#[test]
fn test_fatalf_exits_with_status_one() {
    if env::var_os(CHILD_ENV).is_some() {
        let logger = Logger::with_defaults(logger_options().with_name("fatal"), &Defaults::default());
        logger.fatalf(format_args!("shutting down: {}", "config missing"));
    }
    let (code, stderr) = run_child("test_fatalf_exits_with_status_one");
    assert_eq!(code, Some(1), "{stderr}");
}
