use crate::{ScoreTotals, Talent};

use serde::Serialize;

/// A talent enriched with its current per-dimension totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentView {
    #[serde(flatten)]
    pub talent: Talent,
    pub totals: ScoreTotals,
}

impl TalentView {
    /// Combine a base record with the ledger sums for that talent.
    pub fn from_ledger_sums(talent: Talent, sums: ScoreTotals) -> Self {
        let totals = talent.base_scores() + sums;
        Self { talent, totals }
    }
}
