use ecl::{Style, logger_options};

fn main() {
    ecl::set_style(Style::Spring);

    let l = logger_options().with_name("test").build();
    let l2 = logger_options().with_name("OtherService").build();

    l.log("Hello, World!");
    l2.log("Hello, OtherService!");
    l.warn("This is a warning");
    l2.error("This is an error");
    l.trace("This is a trace");
    l2.debug("This is a debug");
}
