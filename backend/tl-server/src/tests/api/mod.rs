mod error;
mod session_cookie;
