use tl_core::TalentId;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: TalentId,
    pub is_favorite: bool,
}
