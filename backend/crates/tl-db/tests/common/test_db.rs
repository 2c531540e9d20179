use tl_core::UserId;
use tl_db::UserRepository;

use sqlx::SqlitePool;
use tempfile::TempDir;

/// In-memory pool with migrations applied and the same pragmas as production.
pub async fn create_test_pool() -> SqlitePool {
    tl_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// WAL-mode file database with several connections, as the server opens it.
///
/// Keep the `TempDir` alive for as long as the pool is used.
pub async fn create_file_pool(max_connections: u32) -> (SqlitePool, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = tl_db::connect(
        &dir.path().join("talents.db"),
        max_connections,
        tl_db::DEFAULT_BUSY_TIMEOUT,
    )
    .await
    .expect("Failed to create file pool");
    (pool, dir)
}

/// Inserts a user owning nothing yet. The hash is never verified here.
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    UserRepository::new(pool.clone())
        .create(username, "not-a-real-hash")
        .await
        .expect("Failed to create test user")
}
