use crate::error::constraint_kind;
use crate::repositories::timestamp_column;
use crate::{DbError, Result as DbErrorResult};

use tl_core::{CoreError, User, UserId};

use chrono::Utc;
use log::info;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user with an already-hashed password.
    pub async fn create(&self, username: &str, password_hash: &str) -> DbErrorResult<UserId> {
        let username = validate_username(username)?;

        let result = sqlx::query(
            r#"
              INSERT INTO users (username, password_hash, created_at)
              VALUES (?, ?, ?)
              "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| unique_to_conflict(e, username))?;

        let id = result.last_insert_rowid();
        info!("Created user {id} ({username})");
        Ok(id)
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose().map_err(Into::into)
    }

    pub async fn find_by_id(&self, id: UserId) -> DbErrorResult<Option<User>> {
        let row =
            sqlx::query("SELECT id, username, password_hash, created_at FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.as_ref().map(user_from_row).transpose().map_err(Into::into)
    }

    /// Resolve a username to its id, failing with `NotFound` when absent.
    pub async fn id_for_username(&self, username: &str) -> DbErrorResult<UserId> {
        let id: Option<UserId> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        id.ok_or_else(|| DbError::not_found("User", username))
    }

    pub async fn update_username(&self, id: UserId, new_username: &str) -> DbErrorResult<()> {
        let new_username = validate_username(new_username)?;

        let result = sqlx::query("UPDATE users SET username = ? WHERE id = ?")
            .bind(new_username)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| unique_to_conflict(e, new_username))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        info!("User {id} renamed to {new_username}");
        Ok(())
    }

    pub async fn update_password(&self, id: UserId, password_hash: &str) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        info!("User {id} changed password");
        Ok(())
    }
}

#[track_caller]
fn validate_username(username: &str) -> Result<&str, CoreError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("username", "username must not be empty"));
    }
    Ok(trimmed)
}

#[track_caller]
fn unique_to_conflict(error: sqlx::Error, username: &str) -> DbError {
    if constraint_kind(&error) == Some(ErrorKind::UniqueViolation) {
        DbError::conflict(format!("username '{}' is already taken", username))
    } else {
        error.into()
    }
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        created_at: timestamp_column("created_at", row.try_get("created_at")?)?,
    })
}
