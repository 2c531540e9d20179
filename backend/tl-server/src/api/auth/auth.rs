//! Registration, login and logout

use crate::api::session_cookie;
use crate::{ApiError, ApiResult, AppState, CredentialsRequest, UserResponse};

use tl_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use log::info;

const INVALID_CREDENTIALS: &str = "invalid username or password";

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<Response> {
    if request.password.is_empty() {
        return Err(ApiError::validation("password", "password must not be empty"));
    }

    let password = request.password;
    let hash = tokio::task::spawn_blocking(move || tl_auth::hash_password(&password)).await??;

    let repo = UserRepository::new(state.pool.clone());
    let id = repo.create(&request.username, &hash).await?;
    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::internal("registered user vanished"))?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    )
        .into_response())
}

/// POST /api/v1/auth/login
///
/// Unknown user and wrong password are indistinguishable to the client.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<Response> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_username(request.username.trim())
        .await?
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    let password = request.password;
    let stored_hash = user.password_hash.clone();
    let valid =
        tokio::task::spawn_blocking(move || tl_auth::verify_password(&password, &stored_hash))
            .await??;

    if !valid {
        info!("Failed login for {}", user.username);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = state.sessions.issue(&user.username);
    let cookie = session_cookie::set_cookie(&token, &state.session_config);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse { user: user.into() }),
    )
        .into_response())
}

/// POST /api/v1/auth/logout
///
/// Always succeeds; a missing or stale cookie is simply cleared.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_cookie::session_token(&headers, &state.session_config) {
        state.sessions.revoke(&token);
    }

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, session_cookie::clear_cookie(&state.session_config))],
    )
        .into_response()
}
