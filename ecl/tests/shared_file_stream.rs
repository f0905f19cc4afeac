use std::{fs, path::PathBuf, sync::Arc, thread};

use ecl::{LogFile, LogFileConfig, LogStream, Severity, Style, logger_options};

#[test]
fn test_loggers_share_a_global_file_stream() {
    let dir = PathBuf::from("/tmp/ecl_test_shared_file_stream");
    let _ = fs::remove_dir_all(&dir);
    let file = LogFile::new(LogFileConfig {
        folder: dir.clone(),
        filename: "shared".into(),
        rollover: true,
        style: Style::Spring,
        ..Default::default()
    })
    .unwrap();
    ecl::set_min_severity(Severity::All);
    ecl::add_global_extra_streams([Arc::new(file) as Arc<dyn LogStream>]);

    let handles: Vec<_> = ["DefaultService", "OtherService"]
        .into_iter()
        .map(|name| {
            let logger = logger_options().with_name(name).silent().build();
            thread::spawn(move || {
                for i in 0..250 {
                    ecl::warn!(logger, "{name} message {i}");
                }
                logger.flush().unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let files: Vec<_> = fs::read_dir(&dir).unwrap().flatten().map(|e| e.path()).collect();
    let content: String = files.iter().map(|f| fs::read_to_string(f).unwrap()).collect();
    assert_eq!(content.lines().count(), 500);
    for line in content.lines() {
        assert!(!line.contains('\x1b'));
        let (head, message) = line.split_once(" : ").expect("spring separator");
        assert!(head.contains("  WARN ") && head.contains(" --- [main] "), "{line}");
        let service = head.split_whitespace().last().unwrap();
        assert!(message.starts_with(service), "{line}");
        assert_eq!(message.matches("message").count(), 1, "{line}");
    }
}
