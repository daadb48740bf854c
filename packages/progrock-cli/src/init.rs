use std::io::Write as _;
use std::sync::OnceLock;

use crate::level::PrintLevel;

static LOG_FILTER: OnceLock<env_filter::Filter> = OnceLock::new();
static PRINT_LEVEL: OnceLock<PrintLevel> = OnceLock::new();

/// Install the logger. Messages go to stderr, since stdout has the bar.
///
/// If `RUST_LOG` is set, it is used as the filter, and the level from the
/// flags only raises the max level
pub fn init_log(level: PrintLevel) {
    let log_level = if let Ok(value) = std::env::var("RUST_LOG")
        && !value.is_empty()
    {
        let mut builder = env_filter::Builder::new();
        let filter = builder.parse(&value).build();
        let log_level = filter.filter();
        let _ = LOG_FILTER.set(filter);
        log_level.max(level.into())
    } else {
        level.into()
    };
    let _ = PRINT_LEVEL.set(level);
    log::set_max_level(log_level);

    struct LogImpl;
    impl log::Log for LogImpl {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            match LOG_FILTER.get() {
                Some(filter) => filter.enabled(metadata),
                None => {
                    let level = PRINT_LEVEL.get().copied().unwrap_or(PrintLevel::Normal);
                    metadata.level() <= log::LevelFilter::from(level)
                }
            }
        }

        fn log(&self, record: &log::Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let mut stderr = std::io::stderr().lock();
            // _: nowhere to report a failure to log
            let _ = writeln!(stderr, "[{}] {}", record.level(), record.args());
        }

        fn flush(&self) {
            let _ = std::io::stderr().flush();
        }
    }

    let _ = log::set_logger(&LogImpl);
}
