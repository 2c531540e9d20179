use tl_core::{ScoreTotals, TalentId, TalentView};

use serde::Serialize;

/// A talent as the API shows it: base scores and current totals side by side.
#[derive(Debug, Serialize)]
pub struct TalentDto {
    pub id: TalentId,
    pub name: String,
    pub affiliation: Option<String>,
    pub base: ScoreTotals,
    pub totals: ScoreTotals,
    pub is_favorite: bool,
    pub created_at: String,
}

impl From<TalentView> for TalentDto {
    fn from(view: TalentView) -> Self {
        let base = view.talent.base_scores();
        let talent = view.talent;

        Self {
            id: talent.id,
            name: talent.name,
            affiliation: talent.affiliation,
            base,
            totals: view.totals,
            is_favorite: talent.is_favorite,
            created_at: talent.created_at.to_rfc3339(),
        }
    }
}
