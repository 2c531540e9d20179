use crate::error::constraint_kind;
use crate::repositories::{dimension_column, timestamp_column};
use crate::{DbError, Result as DbErrorResult};

use tl_core::{Adjustment, AdjustmentId, NewAdjustment, TalentId};

use chrono::Utc;
use log::{debug, warn};
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Append-only ledger of score adjustments.
///
/// This store does NOT check that the talent belongs to the requesting user.
/// It only guarantees the talent exists (via the foreign key). Callers acting
/// on behalf of a user must go through [`crate::TalentRepository`], which
/// checks ownership with `exists` before recording.
#[derive(Clone)]
pub struct AdjustmentRepository {
    pool: SqlitePool,
}

impl AdjustmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one adjustment. Fails with `NotFound` when the talent is absent.
    pub async fn record(
        &self,
        talent_id: TalentId,
        adjustment: &NewAdjustment,
    ) -> DbErrorResult<AdjustmentId> {
        adjustment.validate()?;

        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO adjustments (talent_id, adjustment_type, points, reason, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(talent_id)
        .bind(adjustment.dimension.as_str())
        .bind(adjustment.points)
        .bind(&adjustment.reason)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                debug!(
                    "Recorded adjustment {id} on talent {talent_id}: {} {:+}",
                    adjustment.dimension, adjustment.points
                );
                Ok(id)
            }
            Err(e) if constraint_kind(&e) == Some(ErrorKind::ForeignKeyViolation) => {
                Err(DbError::not_found("Talent", talent_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All adjustments for a talent, newest first.
    pub async fn history(&self, talent_id: TalentId) -> DbErrorResult<Vec<Adjustment>> {
        let rows = sqlx::query(
            r#"
              SELECT id, talent_id, adjustment_type, points, reason, created_at
              FROM adjustments
              WHERE talent_id = ?
              ORDER BY created_at DESC, id DESC
              "#,
        )
        .bind(talent_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .filter_map(|row| match adjustment_from_row(row) {
                Ok(adjustment) => Some(adjustment),
                Err(e) => {
                    warn!("Skipping undecodable adjustment row for talent {talent_id}: {e}");
                    None
                }
            })
            .collect())
    }
}

fn adjustment_from_row(row: &SqliteRow) -> Result<Adjustment, sqlx::Error> {
    let adjustment_type: String = row.try_get("adjustment_type")?;
    let dimension = dimension_column(&adjustment_type)?;

    Ok(Adjustment {
        id: row.try_get("id")?,
        talent_id: row.try_get("talent_id")?,
        dimension,
        points: row.try_get("points")?,
        reason: row.try_get("reason")?,
        created_at: timestamp_column("created_at", row.try_get("created_at")?)?,
    })
}
