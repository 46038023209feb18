use serde::Deserialize;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

/// Installs a fmt subscriber writing through the test harness' capture.
///
/// Only the first call in a process installs anything; later calls return
/// `false`.
pub fn init(config: &LoggerConfig) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(config.level.as_level_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
