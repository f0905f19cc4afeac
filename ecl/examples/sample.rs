use ecl::{Severity, logger_options};

fn main() {
    ecl::set_min_severity(Severity::All);
    ecl::set_app_name("ExampleApp");

    let l = logger_options().with_name("Example").build();
    let l2 = logger_options().with_name("OtherService").build();
    let l3 = logger_options()
        .with_app_name("Another")
        .with_name("Service")
        .build();

    l.log("Hello, World!");
    l2.log("Hello, OtherService!");
    l.warn("This is a warning");
    l.error("This is an error");
    l.trace("This is a trace");
    l.debug("This is a debug");
    l.info("This is a info");
    ecl::info!(l2, "{} + {} = {}", 1, 2, 1 + 2);
    l3.log("Logger with alternate app name");
}
