pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, register},
        credentials_request::CredentialsRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    me::{
        me::{get_me, update_password, update_username},
        update_password_request::UpdatePasswordRequest,
        update_username_request::UpdateUsernameRequest,
    },
    talents::{
        adjustment_dto::AdjustmentDto,
        adjustment_list_response::AdjustmentListResponse,
        adjustment_recorded_response::AdjustmentRecordedResponse,
        favorite_response::FavoriteResponse,
        list_talents_query::ListTalentsQuery,
        record_adjustment_request::RecordAdjustmentRequest,
        talent_detail_response::TalentDetailResponse,
        talent_dto::TalentDto,
        talent_list_response::TalentListResponse,
        talent_request::TalentRequest,
        talent_response::TalentResponse,
        talents::{
            create_talent, delete_talent, get_talent, list_adjustments, list_favorites,
            list_talents, record_adjustment, toggle_favorite, update_talent,
        },
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
