use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging and backtrace handling from the CLI flags
pub fn init(debug: bool, trace: bool) {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .unwrap();

    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
