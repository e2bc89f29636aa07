mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "WI_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".wi";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const MAX_WIKI_ID_LENGTH: usize = 64;

#[cfg(test)]
mod tests;
