use crate::AdjustmentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdjustmentListResponse {
    pub adjustments: Vec<AdjustmentDto>,
}
