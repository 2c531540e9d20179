use tl_core::{Adjustment, AdjustmentId, Dimension};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdjustmentDto {
    pub id: AdjustmentId,
    pub dimension: Dimension,
    pub points: i32,
    pub reason: String,
    pub created_at: String,
}

impl From<Adjustment> for AdjustmentDto {
    fn from(adjustment: Adjustment) -> Self {
        Self {
            id: adjustment.id,
            dimension: adjustment.dimension,
            points: adjustment.points,
            reason: adjustment.reason,
            created_at: adjustment.created_at.to_rfc3339(),
        }
    }
}
