//! Reading and writing the session cookie.
//!
//! The cookie value is the session token and nothing else.

use tl_auth::SessionToken;
use tl_config::SessionConfig;

use std::str::FromStr;

use axum::http::{HeaderMap, header};

/// Value of the named cookie, if the request carries it.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

/// Session token from the request cookie. Malformed values count as absent.
pub fn session_token(headers: &HeaderMap, config: &SessionConfig) -> Option<SessionToken> {
    let raw = read_cookie(headers, &config.cookie_name)?;
    SessionToken::from_str(raw).ok()
}

/// `Set-Cookie` value that installs the session.
pub fn set_cookie(token: &SessionToken, config: &SessionConfig) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name, token, config.cookie_max_age_secs
    )
}

/// `Set-Cookie` value that makes the browser drop the session.
pub fn clear_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        config.cookie_name
    )
}
