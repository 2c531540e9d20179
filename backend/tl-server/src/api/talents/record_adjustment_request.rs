use tl_core::{CoreResult, Dimension, NewAdjustment};

use std::str::FromStr;

use serde::Deserialize;

/// `dimension` stays a string here so an unknown value becomes a
/// field-level validation error rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct RecordAdjustmentRequest {
    pub dimension: String,
    pub points: i32,
    pub reason: String,
}

impl RecordAdjustmentRequest {
    #[track_caller]
    pub fn into_new_adjustment(self) -> CoreResult<NewAdjustment> {
        let dimension = Dimension::from_str(self.dimension.trim())?;
        Ok(NewAdjustment::new(dimension, self.points, self.reason))
    }
}
