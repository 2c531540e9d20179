use crate::{Dimension, ScoreTotals, Talent, TalentView};

use chrono::Utc;

fn sample_talent() -> Talent {
    Talent {
        id: 1,
        user_id: 1,
        name: "山田花子".to_string(),
        affiliation: None,
        beauty: 5,
        cuteness: 6,
        talent: 7,
        is_favorite: false,
        created_at: Utc::now(),
    }
}

#[test]
fn test_score_totals_get_and_set() {
    let mut totals = ScoreTotals::ZERO;
    totals.set(Dimension::Cuteness, 4);

    assert_eq!(totals.get(Dimension::Beauty), 0);
    assert_eq!(totals.get(Dimension::Cuteness), 4);
    assert_eq!(totals.get(Dimension::Talent), 0);
}

#[test]
fn test_score_totals_add_is_per_dimension() {
    let base = ScoreTotals::new(5, 6, 7);
    let sums = ScoreTotals::new(2, -3, 0);

    assert_eq!(base + sums, ScoreTotals::new(7, 3, 7));
}

#[test]
fn given_no_ledger_sums_when_viewed_then_totals_equal_base() {
    let view = TalentView::from_ledger_sums(sample_talent(), ScoreTotals::ZERO);

    assert_eq!(view.totals, ScoreTotals::new(5, 6, 7));
}

#[test]
fn given_ledger_sums_when_viewed_then_totals_are_base_plus_sums() {
    let view = TalentView::from_ledger_sums(sample_talent(), ScoreTotals::new(2, 0, -10));

    assert_eq!(view.totals, ScoreTotals::new(7, 6, -3));
    assert_eq!(view.talent.beauty, 5);
}

#[test]
fn test_talent_view_serializes_flat_with_totals() {
    let view = TalentView::from_ledger_sums(sample_talent(), ScoreTotals::new(1, 1, 1));
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["name"], "山田花子");
    assert_eq!(json["beauty"], 5);
    assert_eq!(json["totals"]["beauty"], 6);
    assert!(json["affiliation"].is_null());
}
