use tl_core::{Dimension, NewAdjustment, TalentDraft, TalentId, UserId};
use tl_db::TalentRepository;

/// A valid draft with base scores 5/5/5.
pub fn draft(name: &str, affiliation: Option<&str>) -> TalentDraft {
    TalentDraft::new(name, affiliation.map(str::to_string), 5, 5, 5)
}

pub fn draft_with_scores(name: &str, beauty: i32, cuteness: i32, talent: i32) -> TalentDraft {
    TalentDraft::new(name, None, beauty, cuteness, talent)
}

pub fn adjustment(dimension: Dimension, points: i32) -> NewAdjustment {
    NewAdjustment::new(dimension, points, format!("adjust {} by {}", dimension, points))
}

pub async fn create_talent(repo: &TalentRepository, owner: UserId, name: &str) -> TalentId {
    repo.create(owner, &draft(name, None))
        .await
        .expect("Failed to create test talent")
}
