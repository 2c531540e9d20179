mod adjustment;
mod dimension;
mod score_totals;
mod talent_draft;
