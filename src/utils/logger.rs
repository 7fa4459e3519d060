use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Logger builder: our crate at Info (Debug when `verbose`), dependencies at Warn.
/// `env_filters` (the `RUST_LOG` syntax) is parsed last, so it overrides those defaults.
pub fn logger_builder(verbose: bool, env_filters: Option<&str>) -> Builder {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let tag = match record.level() {
                Level::Error => Some("ERROR".red()),
                Level::Warn => Some("WARN".yellow()),
                Level::Debug | Level::Trace => Some("DEBUG".dimmed()),
                Level::Info => None,
            };
            match tag {
                Some(tag) => writeln!(
                    buf,
                    "[{} {} {}] {}",
                    name.cyan(),
                    tag,
                    record.target().white(),
                    record.args()
                ),
                None => writeln!(buf, "[{}] {}", name.cyan(), record.args()),
            }
        });
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder
}

/// Route `log` records to stderr with the defaults of [`logger_builder`], then `RUST_LOG` on top.
/// Safe to call more than once; later calls are ignored.
pub fn setup_logging(verbose: bool) {
    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let _ = logger_builder(verbose, env_filters.as_deref()).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_logger::Logger;
    use log::{Log, Metadata};

    fn enabled(logger: &Logger, level: Level, target: &str) -> bool {
        logger.enabled(&Metadata::builder().level(level).target(target).build())
    }

    #[test]
    fn defaults_without_env() {
        let quiet = logger_builder(false, None).build();
        assert!(enabled(&quiet, Level::Info, "fanhash::run"));
        assert!(!enabled(&quiet, Level::Debug, "fanhash::run"));
        assert!(!enabled(&quiet, Level::Info, "other_crate"));
        assert!(enabled(&quiet, Level::Warn, "other_crate"));

        let verbose = logger_builder(true, None).build();
        assert!(enabled(&verbose, Level::Debug, "fanhash::pipeline"));
    }

    #[test]
    fn env_filters_override_defaults() {
        let crate_trace = logger_builder(false, Some("fanhash=trace")).build();
        assert!(enabled(&crate_trace, Level::Trace, "fanhash::pipeline::worker"));

        let all_debug = logger_builder(false, Some("debug")).build();
        assert!(enabled(&all_debug, Level::Debug, "other_crate"));
    }
}
