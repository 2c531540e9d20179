use tl_core::TalentDraft;

use serde::Deserialize;

/// Body of create and update.
#[derive(Debug, Deserialize)]
pub struct TalentRequest {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    pub beauty: i32,
    pub cuteness: i32,
    pub talent: i32,
}

impl From<TalentRequest> for TalentDraft {
    fn from(request: TalentRequest) -> Self {
        TalentDraft::new(
            request.name,
            request.affiliation,
            request.beauty,
            request.cuteness,
            request.talent,
        )
    }
}
