mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "TL_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".tl";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

const DEFAULT_SESSION_COOKIE_NAME: &str = "session_id";
/// 24 hours.
const DEFAULT_SESSION_COOKIE_MAX_AGE_SECS: u64 = 86_400;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
