use thiserror::Error;

/// Startup failures. Request-time failures are [`crate::ApiError`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tl_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] tl_db::DbError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
