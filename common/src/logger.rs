use config::Config;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Logging settings read from the `logging` table of a configuration.
///
/// ```toml
/// [logging]
/// level = "debug"
/// file = "/var/log/keystone/service.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingSettings {
    pub fn new(level: Option<String>, file: Option<String>) -> Self {
        Self { level, file }
    }

    /// Reads `logging.level` and `logging.file`; missing keys fall back to
    /// the defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            level: config.get_string("logging.level").ok(),
            file: config.get_string("logging.file").ok(),
        }
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_level(self.level())
    }
}

/// Maps a level name onto a filter, defaulting to `Info` for anything unknown.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger.
///
/// Records go to `settings.file()` when it can be opened, otherwise to
/// stderr. Can only succeed once per process.
pub fn setup_logger(settings: &LoggingSettings) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(settings.level_filter());

    match settings.file() {
        Some(path) => match fern::log_file(path) {
            Ok(file) => base_config.chain(file).apply()?,
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{path}': {e}");
                eprintln!("Continuing with logging to stderr.");
                base_config.chain(std::io::stderr()).apply()?;
            }
        },
        None => base_config.chain(std::io::stderr()).apply()?,
    }

    log::info!("Logger initialized with level: {}", settings.level());
    Ok(())
}
