use crate::{
    CoreError, CoreResult, Dimension, MAX_ADJUSTMENT_POINTS, MIN_ADJUSTMENT_POINTS, TalentId,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type AdjustmentId = i64;

/// One ledger entry. Never updated; removed only with its talent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub id: AdjustmentId,
    pub talent_id: TalentId,
    pub dimension: Dimension,
    pub points: i32,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

/// Input for appending to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAdjustment {
    pub dimension: Dimension,
    pub points: i32,
    pub reason: String,
}

impl NewAdjustment {
    pub fn new(dimension: Dimension, points: i32, reason: impl Into<String>) -> Self {
        Self {
            dimension,
            points,
            reason: reason.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if !(MIN_ADJUSTMENT_POINTS..=MAX_ADJUSTMENT_POINTS).contains(&self.points) {
            return Err(CoreError::validation(
                "points",
                format!(
                    "points must be between {} and {}, got {}",
                    MIN_ADJUSTMENT_POINTS, MAX_ADJUSTMENT_POINTS, self.points
                ),
            ));
        }

        if self.reason.trim().is_empty() {
            return Err(CoreError::validation("reason", "reason must not be empty"));
        }

        Ok(())
    }
}
