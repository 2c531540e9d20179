use crate::TalentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TalentListResponse {
    pub talents: Vec<TalentDto>,
}
