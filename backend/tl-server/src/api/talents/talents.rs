//! Talent catalog REST handlers
//!
//! Every handler is scoped to the caller: a talent owned by someone else
//! answers 404, exactly like a missing one.

use crate::{
    AdjustmentDto, AdjustmentListResponse, AdjustmentRecordedResponse, ApiError, ApiResult,
    AppState, CurrentUser, FavoriteResponse, ListTalentsQuery, RecordAdjustmentRequest,
    TalentDetailResponse, TalentListResponse, TalentRequest, TalentResponse,
};

use tl_core::{TalentDraft, TalentId};
use tl_db::TalentRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/talents?q=
///
/// Search when `q` is non-empty, otherwise list everything (favorites first).
pub async fn list_talents(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListTalentsQuery>,
) -> ApiResult<Json<TalentListResponse>> {
    let repo = TalentRepository::new(state.pool.clone());

    let talents = match query.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => repo.search(user.id, q).await?,
        None => repo.list_by_owner(user.id).await?,
    };

    Ok(Json(TalentListResponse {
        talents: talents.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/talents/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<TalentListResponse>> {
    let repo = TalentRepository::new(state.pool.clone());
    let talents = repo.list_favorites(user.id).await?;

    Ok(Json(TalentListResponse {
        talents: talents.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/v1/talents
pub async fn create_talent(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<TalentRequest>,
) -> ApiResult<(StatusCode, Json<TalentResponse>)> {
    let repo = TalentRepository::new(state.pool.clone());
    let draft = TalentDraft::from(request);

    let id = repo.create(user.id, &draft).await?;
    let view = repo.get(id, user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(TalentResponse {
            talent: view.into(),
        }),
    ))
}

/// GET /api/v1/talents/{id}
pub async fn get_talent(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TalentDetailResponse>> {
    let talent_id = parse_talent_id(&id)?;

    let repo = TalentRepository::new(state.pool.clone());
    let view = repo.get(talent_id, user.id).await?;
    let history = repo.history(talent_id, user.id).await?;

    Ok(Json(TalentDetailResponse {
        talent: view.into(),
        adjustments: history.into_iter().map(AdjustmentDto::from).collect(),
    }))
}

/// PUT /api/v1/talents/{id}
pub async fn update_talent(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<TalentRequest>,
) -> ApiResult<Json<TalentResponse>> {
    let talent_id = parse_talent_id(&id)?;

    let repo = TalentRepository::new(state.pool.clone());
    repo.update(talent_id, user.id, &TalentDraft::from(request))
        .await?;
    let view = repo.get(talent_id, user.id).await?;

    Ok(Json(TalentResponse {
        talent: view.into(),
    }))
}

/// DELETE /api/v1/talents/{id}
///
/// Idempotent: deleting a missing talent is still 204.
pub async fn delete_talent(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let talent_id = parse_talent_id(&id)?;

    TalentRepository::new(state.pool.clone())
        .delete(talent_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/talents/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<FavoriteResponse>> {
    let talent_id = parse_talent_id(&id)?;

    let is_favorite = TalentRepository::new(state.pool.clone())
        .toggle_favorite(talent_id, user.id)
        .await?;

    Ok(Json(FavoriteResponse {
        id: talent_id,
        is_favorite,
    }))
}

/// POST /api/v1/talents/{id}/adjustments
pub async fn record_adjustment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<RecordAdjustmentRequest>,
) -> ApiResult<(StatusCode, Json<AdjustmentRecordedResponse>)> {
    let talent_id = parse_talent_id(&id)?;
    let adjustment = request.into_new_adjustment()?;

    let repo = TalentRepository::new(state.pool.clone());
    let adjustment_id = repo
        .record_adjustment(talent_id, user.id, &adjustment)
        .await?;
    let view = repo.get(talent_id, user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AdjustmentRecordedResponse {
            id: adjustment_id,
            totals: view.totals,
        }),
    ))
}

/// GET /api/v1/talents/{id}/adjustments
pub async fn list_adjustments(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AdjustmentListResponse>> {
    let talent_id = parse_talent_id(&id)?;

    let history = TalentRepository::new(state.pool.clone())
        .history(talent_id, user.id)
        .await?;

    Ok(Json(AdjustmentListResponse {
        adjustments: history.into_iter().map(AdjustmentDto::from).collect(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_talent_id(raw: &str) -> ApiResult<TalentId> {
    raw.parse::<TalentId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation {
            message: format!("invalid talent id '{}'", raw),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
}
