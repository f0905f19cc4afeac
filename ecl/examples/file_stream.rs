use std::{path::PathBuf, sync::Arc};

use ecl::{LogFile, LogFileConfig, LogStream, Severity, Style, logger_options};

fn main() {
    let dir = PathBuf::from("/tmp/ecl_example_file_stream");
    let _ = std::fs::remove_dir_all(&dir);

    ecl::set_min_severity(Severity::All);
    let streams = [
        ("default-style", Style::Default),
        ("spring-style", Style::Spring),
        ("nestjs-style", Style::NestJs),
    ]
    .map(|(filename, style)| -> Arc<dyn LogStream> {
        Arc::new(
            LogFile::new(LogFileConfig {
                folder: dir.clone(),
                filename: filename.into(),
                rollover: true,
                max_file_size_kb: Some(64),
                style,
            })
            .expect("folder and filename are set"),
        )
    });
    ecl::add_global_extra_streams(streams);

    let l = logger_options().with_name("DefaultService").build();
    let l2 = logger_options()
        .with_name("OtherService")
        .with_style(Style::Spring)
        .build();
    let l3 = logger_options()
        .with_name("OtherService2")
        .with_style(Style::NestJs)
        .build();

    l.log("Hello, World!");
    l2.log("Hello, OtherService!");
    for logger in [&l, &l2, &l3] {
        logger.warn("This is a warning");
        logger.error("This is an error");
        logger.trace("This is a trace");
        logger.debug("This is a debug");
    }

    println!("\n--- Files in {} ---", dir.display());
    for entry in std::fs::read_dir(&dir).expect("log folder exists").flatten() {
        println!("  {}", entry.file_name().to_string_lossy());
    }
}
