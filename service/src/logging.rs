use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// HTTP stack modules that are silenced unless the level is Trace.
const FILTERED_MODULES: &[&str] = &["tower", "tracing", "hyper", "h2", "axum", "reqwest"];

pub struct Logger {}

impl Logger {
    /// Installs the global terminal logger for the mock server process.
    ///
    /// Log lines go to stderr so that a harness capturing the mock's stdout
    /// only sees what it explicitly asked for. Dependency output is filtered
    /// out below Trace.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let apply_filters = Self::should_filter_dependencies(config.log_level_filter);

        TermLogger::init(
            config.log_level_filter,
            Self::build_log_config(apply_filters),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
    }

    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(apply_filters: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();
        builder.set_target_level(LevelFilter::Off);

        if apply_filters {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}
