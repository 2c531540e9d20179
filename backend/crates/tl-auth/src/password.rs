//! Argon2id password hashing.
//!
//! Both functions are CPU-bound; async callers should run them on a
//! blocking thread.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;
use log::error;

/// PHC-format hash of `plain` with a fresh random salt.
#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    let location = ErrorLocation::from(Location::caller());
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!("argon2 hash_password failed: {e}");
            AuthError::PasswordHash {
                message: e.to_string(),
                location,
            }
        })?;

    Ok(hash.to_string())
}

/// `Ok(false)` for a wrong password; `Err` only when `hash` is not a PHC string.
#[track_caller]
pub fn verify_password(plain: &str, hash: &str) -> AuthErrorResult<bool> {
    let location = ErrorLocation::from(Location::caller());
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
        message: format!("stored hash is malformed: {e}"),
        location,
    })?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
