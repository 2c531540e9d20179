use crate::{ScoreTotals, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TalentId = i64;

/// Base record of a talent as stored. Totals live in [`crate::TalentView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub id: TalentId,
    pub user_id: UserId,

    pub name: String,
    pub affiliation: Option<String>,

    // Base scores, each 1..=10
    pub beauty: i32,
    pub cuteness: i32,
    pub talent: i32,

    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Talent {
    pub fn base_scores(&self) -> ScoreTotals {
        ScoreTotals::new(self.beauty, self.cuteness, self.talent)
    }
}
