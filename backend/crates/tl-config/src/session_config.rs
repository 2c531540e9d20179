use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_COOKIE_MAX_AGE_SECS,
    DEFAULT_SESSION_COOKIE_NAME,
};

use serde::Deserialize;

/// Cookie carrying the session token. The registry itself never expires
/// sessions; `cookie_max_age_secs` only bounds how long a browser keeps it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_max_age_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_SESSION_COOKIE_NAME),
            cookie_max_age_secs: DEFAULT_SESSION_COOKIE_MAX_AGE_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let name = self.cookie_name.as_str();
        let valid_name = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

        if !valid_name {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be non-empty ASCII letters, digits, '_' or '-', got '{}'",
                name
            )));
        }

        if self.cookie_max_age_secs == 0 {
            return Err(ConfigError::session(
                "session.cookie_max_age_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
