pub mod auth;
pub mod error;
pub mod extractors;
pub mod me;
pub mod session_cookie;
pub mod talents;
