pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::adjustment::{Adjustment, AdjustmentId, NewAdjustment};
pub use models::dimension::Dimension;
pub use models::score_totals::ScoreTotals;
pub use models::talent::{Talent, TalentId};
pub use models::talent_draft::TalentDraft;
pub use models::talent_view::TalentView;
pub use models::user::{User, UserId};

pub use error_location::ErrorLocation;

/// Lowest base score a talent may carry in any dimension.
pub const MIN_BASE_SCORE: i32 = 1;
/// Highest base score a talent may carry in any dimension.
pub const MAX_BASE_SCORE: i32 = 10;
/// Largest negative swing a single adjustment may apply.
pub const MIN_ADJUSTMENT_POINTS: i32 = -10;
/// Largest positive swing a single adjustment may apply.
pub const MAX_ADJUSTMENT_POINTS: i32 = 10;
