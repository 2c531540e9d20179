use tl_core::{AdjustmentId, ScoreTotals};

use serde::Serialize;

/// Id of the new ledger entry and the talent's totals after it.
#[derive(Debug, Serialize)]
pub struct AdjustmentRecordedResponse {
    pub id: AdjustmentId,
    pub totals: ScoreTotals,
}
