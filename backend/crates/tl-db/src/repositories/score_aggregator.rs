use crate::Result as DbErrorResult;
use crate::repositories::dimension_column;

use tl_core::{CoreError, Dimension, ScoreTotals, TalentId};

use std::collections::{BTreeSet, HashMap};

use log::warn;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

/// Computes current scores as base + ledger sum. Nothing is cached.
#[derive(Clone)]
pub struct ScoreAggregator {
    pool: SqlitePool,
}

impl ScoreAggregator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `base` plus the sum of every adjustment on one dimension of a talent.
    ///
    /// A talent without adjustments yields exactly `base`. A total outside
    /// `i32` is a validation error on `base`.
    pub async fn total_for(
        &self,
        talent_id: TalentId,
        dimension: Dimension,
        base: i32,
    ) -> DbErrorResult<i32> {
        let sum: i64 = sqlx::query_scalar(
            r#"
              SELECT COALESCE(SUM(points), 0)
              FROM adjustments
              WHERE talent_id = ? AND adjustment_type = ?
              "#,
        )
        .bind(talent_id)
        .bind(dimension.as_str())
        .fetch_one(&self.pool)
        .await?;

        i64::from(base)
            .checked_add(sum)
            .and_then(|total| i32::try_from(total).ok())
            .ok_or_else(|| {
                CoreError::validation(
                    "base",
                    format!("total for talent {talent_id} is out of range"),
                )
                .into()
            })
    }

    /// Ledger sums for many talents in a single grouped query.
    ///
    /// Every requested id appears in the result; dimensions without
    /// adjustments are 0. The sums are deltas: callers add them to the base
    /// scores. An empty input returns an empty map without querying.
    ///
    /// Each distinct id is one bound parameter, so a single call is limited
    /// by SQLite's host-parameter cap (`SQLITE_MAX_VARIABLE_NUMBER`, 32766
    /// by default). Past that the whole call fails with a storage error.
    pub async fn batch_totals(
        &self,
        talent_ids: &[TalentId],
    ) -> DbErrorResult<HashMap<TalentId, ScoreTotals>> {
        let ids: BTreeSet<TalentId> = talent_ids.iter().copied().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut totals: HashMap<TalentId, ScoreTotals> =
            ids.iter().map(|id| (*id, ScoreTotals::ZERO)).collect();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT talent_id, adjustment_type, COALESCE(SUM(points), 0) AS total \
             FROM adjustments WHERE talent_id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in &ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") GROUP BY talent_id, adjustment_type");

        let rows = builder.build().fetch_all(&self.pool).await?;

        for row in &rows {
            let (talent_id, dimension, total) = match aggregate_from_row(row) {
                Ok(aggregate) => aggregate,
                Err(e) => {
                    warn!("Skipping undecodable aggregate row: {e}");
                    continue;
                }
            };

            let total = i32::try_from(total).map_err(|_| {
                CoreError::validation(
                    "points",
                    format!("{dimension} sum for talent {talent_id} is out of range"),
                )
            })?;
            totals.entry(talent_id).or_default().set(dimension, total);
        }

        Ok(totals)
    }
}

fn aggregate_from_row(row: &SqliteRow) -> Result<(TalentId, Dimension, i64), sqlx::Error> {
    let adjustment_type: String = row.try_get("adjustment_type")?;
    let dimension = dimension_column(&adjustment_type)?;

    Ok((row.try_get("talent_id")?, dimension, row.try_get("total")?))
}
