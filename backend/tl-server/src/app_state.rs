use tl_auth::SessionRegistry;
use tl_config::SessionConfig;

use sqlx::SqlitePool;

/// Shared by every handler. Cloning is cheap: the pool and the session map
/// are both reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionRegistry,
    pub session_config: SessionConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, session_config: SessionConfig) -> Self {
        Self {
            pool,
            sessions: SessionRegistry::new(),
            session_config,
        }
    }
}
