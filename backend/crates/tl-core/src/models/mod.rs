pub mod adjustment;
pub mod dimension;
pub mod score_totals;
pub mod talent;
pub mod talent_draft;
pub mod talent_view;
pub mod user;
