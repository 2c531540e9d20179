pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{DEFAULT_BUSY_TIMEOUT, connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::adjustment_repository::AdjustmentRepository;
pub use repositories::score_aggregator::ScoreAggregator;
pub use repositories::talent_repository::TalentRepository;
pub use repositories::user_repository::UserRepository;
