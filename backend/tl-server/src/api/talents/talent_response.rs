use crate::TalentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TalentResponse {
    pub talent: TalentDto,
}
