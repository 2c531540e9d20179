use crate::{CoreError, TalentDraft};

use googletest::prelude::*;

fn valid_draft() -> TalentDraft {
    TalentDraft::new("田中次郎", Some("Agency".to_string()), 5, 5, 5)
}

#[test]
fn given_valid_draft_when_validated_then_ok() {
    assert_that!(valid_draft().validate(), ok(anything()));
}

#[test]
fn given_boundary_scores_when_validated_then_ok() {
    let low = TalentDraft::new("a", None, 1, 1, 1);
    let high = TalentDraft::new("b", None, 10, 10, 10);

    assert_that!(low.validate(), ok(anything()));
    assert_that!(high.validate(), ok(anything()));
}

#[test]
fn given_empty_name_when_validated_then_name_error() {
    let mut draft = valid_draft();
    draft.name = "   ".to_string();

    let error = draft.validate().unwrap_err();

    assert_that!(error.field(), some(eq("name")));
}

#[test]
fn given_score_out_of_range_when_validated_then_field_named() {
    let cases = [
        (TalentDraft::new("x", None, 0, 5, 5), "beauty"),
        (TalentDraft::new("x", None, 5, 11, 5), "cuteness"),
        (TalentDraft::new("x", None, 5, 5, -1), "talent"),
    ];

    for (draft, expected_field) in cases {
        let error = draft.validate().unwrap_err();
        assert!(matches!(error, CoreError::Validation { .. }));
        assert_eq!(error.field(), Some(expected_field));
    }
}

#[test]
fn given_blank_affiliation_when_normalized_then_none() {
    let draft = TalentDraft::new("x", Some("  ".to_string()), 5, 5, 5);
    assert_that!(draft.normalized_affiliation(), none());

    let draft = TalentDraft::new("x", Some(" Agency ".to_string()), 5, 5, 5);
    assert_that!(draft.normalized_affiliation(), some(eq("Agency")));
}
