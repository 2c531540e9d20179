use crate::repositories::timestamp_column;
use crate::{AdjustmentRepository, DbError, Result as DbErrorResult, ScoreAggregator};

use tl_core::{
    Adjustment, AdjustmentId, NewAdjustment, Talent, TalentDraft, TalentId, TalentView, UserId,
};

use chrono::Utc;
use log::{debug, info, warn};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TALENT_COLUMNS: &str = r#"
    id, user_id, name, affiliation, beauty, cuteness, talent, is_favorite, created_at
"#;

/// Per-user talent catalog.
///
/// Every operation is scoped by owner: a talent owned by someone else
/// behaves exactly like a missing one.
#[derive(Clone)]
pub struct TalentRepository {
    pool: SqlitePool,
    adjustments: AdjustmentRepository,
    aggregator: ScoreAggregator,
}

impl TalentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            adjustments: AdjustmentRepository::new(pool.clone()),
            aggregator: ScoreAggregator::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, owner: UserId, draft: &TalentDraft) -> DbErrorResult<TalentId> {
        draft.validate()?;

        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO talents (user_id, name, affiliation, beauty, cuteness, talent, is_favorite, created_at)
              VALUES (?, ?, ?, ?, ?, ?, 0, ?)
              "#,
        )
        .bind(owner)
        .bind(draft.name.trim())
        .bind(draft.normalized_affiliation())
        .bind(draft.beauty)
        .bind(draft.cuteness)
        .bind(draft.talent)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!("Created talent {id} for user {owner}");
        Ok(id)
    }

    /// Replace name, affiliation and base scores. Favorite flag and ledger are untouched.
    pub async fn update(
        &self,
        id: TalentId,
        owner: UserId,
        draft: &TalentDraft,
    ) -> DbErrorResult<()> {
        draft.validate()?;

        let result = sqlx::query(
            r#"
              UPDATE talents
              SET name = ?, affiliation = ?, beauty = ?, cuteness = ?, talent = ?
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(draft.name.trim())
        .bind(draft.normalized_affiliation())
        .bind(draft.beauty)
        .bind(draft.cuteness)
        .bind(draft.talent)
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Talent", id));
        }

        debug!("Updated talent {id}");
        Ok(())
    }

    /// Remove a talent and, through the cascade, its ledger.
    ///
    /// Deleting an absent or foreign talent is a silent no-op.
    pub async fn delete(&self, id: TalentId, owner: UserId) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM talents WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            info!("Deleted talent {id} for user {owner}");
        }
        Ok(())
    }

    /// One talent with current totals. Absent and foreign ids are both `NotFound`.
    pub async fn get(&self, id: TalentId, owner: UserId) -> DbErrorResult<TalentView> {
        let query = format!(
            "SELECT {} FROM talents WHERE id = ? AND user_id = ?",
            TALENT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Err(DbError::not_found("Talent", id));
        };

        let talent = talent_from_row(&row)?;
        self.with_totals(vec![talent])
            .await?
            .pop()
            .ok_or_else(|| DbError::not_found("Talent", id))
    }

    /// Favorites first, then newest first.
    pub async fn list_by_owner(&self, owner: UserId) -> DbErrorResult<Vec<TalentView>> {
        let query = format!(
            r#"
              SELECT {}
              FROM talents
              WHERE user_id = ?
              ORDER BY is_favorite DESC, created_at DESC, id DESC
              "#,
            TALENT_COLUMNS
        );

        let rows = sqlx::query(&query).bind(owner).fetch_all(&self.pool).await?;
        self.with_totals(decode_talents(&rows)).await
    }

    /// Substring match on name or affiliation, case-sensitive.
    ///
    /// The query is used verbatim inside a `LIKE` pattern, so `%` and `_`
    /// act as wildcards. An empty query matches every talent of the owner.
    pub async fn search(&self, owner: UserId, query: &str) -> DbErrorResult<Vec<TalentView>> {
        let pattern = format!("%{}%", query);
        let sql = format!(
            r#"
              SELECT {}
              FROM talents
              WHERE user_id = ? AND (name LIKE ? OR affiliation LIKE ?)
              ORDER BY is_favorite DESC, created_at DESC, id DESC
              "#,
            TALENT_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(owner)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await?;

        self.with_totals(decode_talents(&rows)).await
    }

    /// Favorites only, newest first.
    pub async fn list_favorites(&self, owner: UserId) -> DbErrorResult<Vec<TalentView>> {
        let query = format!(
            r#"
              SELECT {}
              FROM talents
              WHERE user_id = ? AND is_favorite = 1
              ORDER BY created_at DESC, id DESC
              "#,
            TALENT_COLUMNS
        );

        let rows = sqlx::query(&query).bind(owner).fetch_all(&self.pool).await?;
        self.with_totals(decode_talents(&rows)).await
    }

    /// Flip the favorite flag in one statement and return the new value.
    pub async fn toggle_favorite(&self, id: TalentId, owner: UserId) -> DbErrorResult<bool> {
        let flag: Option<bool> = sqlx::query_scalar(
            r#"
              UPDATE talents
              SET is_favorite = NOT is_favorite
              WHERE id = ? AND user_id = ?
              RETURNING is_favorite
              "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        match flag {
            Some(is_favorite) => {
                debug!("Talent {id} favorite -> {is_favorite}");
                Ok(is_favorite)
            }
            None => Err(DbError::not_found("Talent", id)),
        }
    }

    pub async fn exists(&self, id: TalentId, owner: UserId) -> DbErrorResult<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM talents WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(owner)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    /// Append to the ledger after confirming the owner holds the talent.
    pub async fn record_adjustment(
        &self,
        id: TalentId,
        owner: UserId,
        adjustment: &NewAdjustment,
    ) -> DbErrorResult<AdjustmentId> {
        if !self.exists(id, owner).await? {
            return Err(DbError::not_found("Talent", id));
        }

        self.adjustments.record(id, adjustment).await
    }

    /// Ledger for one talent, newest first, after confirming ownership.
    pub async fn history(&self, id: TalentId, owner: UserId) -> DbErrorResult<Vec<Adjustment>> {
        if !self.exists(id, owner).await? {
            return Err(DbError::not_found("Talent", id));
        }

        self.adjustments.history(id).await
    }

    async fn with_totals(&self, talents: Vec<Talent>) -> DbErrorResult<Vec<TalentView>> {
        let ids: Vec<TalentId> = talents.iter().map(|t| t.id).collect();
        let sums = self.aggregator.batch_totals(&ids).await?;

        Ok(talents
            .into_iter()
            .map(|talent| {
                let delta = sums.get(&talent.id).copied().unwrap_or_default();
                TalentView::from_ledger_sums(talent, delta)
            })
            .collect())
    }
}

fn decode_talents(rows: &[SqliteRow]) -> Vec<Talent> {
    rows.iter()
        .filter_map(|row| match talent_from_row(row) {
            Ok(talent) => Some(talent),
            Err(e) => {
                warn!("Skipping undecodable talent row: {e}");
                None
            }
        })
        .collect()
}

fn talent_from_row(row: &SqliteRow) -> Result<Talent, sqlx::Error> {
    Ok(Talent {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        affiliation: row.try_get("affiliation")?,
        beauty: row.try_get("beauty")?,
        cuteness: row.try_get("cuteness")?,
        talent: row.try_get("talent")?,
        is_favorite: row.try_get("is_favorite")?,
        created_at: timestamp_column("created_at", row.try_get("created_at")?)?,
    })
}
