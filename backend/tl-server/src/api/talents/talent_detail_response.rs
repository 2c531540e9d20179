use crate::{AdjustmentDto, TalentDto};

use serde::Serialize;

/// Detail view: the talent plus its full ledger, newest first.
#[derive(Debug, Serialize)]
pub struct TalentDetailResponse {
    pub talent: TalentDto,
    pub adjustments: Vec<AdjustmentDto>,
}
