//! Account handlers for the logged-in user

use crate::api::session_cookie;
use crate::{
    ApiError, ApiResult, AppState, CurrentUser, UpdatePasswordRequest, UpdateUsernameRequest,
    UserResponse,
};

use tl_core::User;
use tl_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// GET /api/v1/me
pub async fn get_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<UserResponse>> {
    let user = load_user(&state, &user).await?;
    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/me/username
///
/// Sessions are keyed by username: every session of the old name is revoked,
/// then the caller gets a fresh one under the new name.
pub async fn update_username(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<UpdateUsernameRequest>,
) -> ApiResult<Response> {
    let repo = UserRepository::new(state.pool.clone());
    repo.update_username(current.id, &request.username).await?;

    let user = load_user(&state, &current).await?;

    state.sessions.revoke_user(&current.username);
    let token = state.sessions.issue(&user.username);
    let cookie = session_cookie::set_cookie(&token, &state.session_config);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse { user: user.into() }),
    )
        .into_response())
}

/// PUT /api/v1/me/password
pub async fn update_password(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<UpdatePasswordRequest>,
) -> ApiResult<StatusCode> {
    if request.new_password.is_empty() {
        return Err(ApiError::validation(
            "new_password",
            "new password must not be empty",
        ));
    }

    let user = load_user(&state, &current).await?;

    let UpdatePasswordRequest {
        current_password,
        new_password,
    } = request;
    let stored_hash = user.password_hash;

    let new_hash = tokio::task::spawn_blocking(move || -> tl_auth::Result<Option<String>> {
        if !tl_auth::verify_password(&current_password, &stored_hash)? {
            return Ok(None);
        }
        tl_auth::hash_password(&new_password).map(Some)
    })
    .await??
    .ok_or_else(|| {
        ApiError::validation("current_password", "current password is incorrect")
    })?;

    UserRepository::new(state.pool.clone())
        .update_password(current.id, &new_hash)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn load_user(state: &AppState, current: &CurrentUser) -> ApiResult<User> {
    UserRepository::new(state.pool.clone())
        .find_by_id(current.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("session is not valid"))
}
