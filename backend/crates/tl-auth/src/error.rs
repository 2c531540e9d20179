use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hash error: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed session token {location}")]
    MalformedToken { location: ErrorLocation },
}

pub type Result<T> = std::result::Result<T, AuthError>;
