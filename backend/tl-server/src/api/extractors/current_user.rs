//! Axum extractor for the authenticated caller

use crate::api::session_cookie;
use crate::{ApiError, AppState};

use tl_auth::SessionToken;
use tl_core::UserId;
use tl_db::{DbError, UserRepository};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The user behind the request's session cookie.
///
/// Resolution: cookie -> token -> username (session registry) -> id (user
/// store). Any missing link rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub token: SessionToken,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = session_cookie::session_token(&parts.headers, &state.session_config)
                .ok_or_else(|| ApiError::unauthorized("login required"))?;

            let username = state
                .sessions
                .resolve(&token)
                .ok_or_else(|| ApiError::unauthorized("session is not valid"))?;

            let id = match UserRepository::new(state.pool.clone())
                .id_for_username(&username)
                .await
            {
                Ok(id) => id,
                Err(DbError::NotFound { .. }) => {
                    // Session outlived its user
                    log::warn!("Session for unknown user {username}; revoking");
                    state.sessions.revoke(&token);
                    return Err(ApiError::unauthorized("session is not valid"));
                }
                Err(e) => return Err(e.into()),
            };

            Ok(CurrentUser {
                id,
                username,
                token,
            })
        }
    }
}
