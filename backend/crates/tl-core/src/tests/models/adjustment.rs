use crate::{Dimension, NewAdjustment};

use googletest::prelude::*;

#[test]
fn given_points_at_bounds_when_validated_then_ok() {
    assert_that!(
        NewAdjustment::new(Dimension::Beauty, -10, "slump").validate(),
        ok(anything())
    );
    assert_that!(
        NewAdjustment::new(Dimension::Beauty, 10, "peak").validate(),
        ok(anything())
    );
}

#[test]
fn given_points_out_of_range_when_validated_then_points_error() {
    for points in [-11, 11, 100] {
        let error = NewAdjustment::new(Dimension::Talent, points, "why")
            .validate()
            .unwrap_err();
        assert_that!(error.field(), some(eq("points")));
    }
}

#[test]
fn given_empty_reason_when_validated_then_reason_error() {
    let error = NewAdjustment::new(Dimension::Cuteness, 1, "")
        .validate()
        .unwrap_err();

    assert_that!(error.field(), some(eq("reason")));
}

#[test]
fn test_new_adjustment_deserializes_dimension() {
    let adjustment: NewAdjustment =
        serde_json::from_str(r#"{"dimension":"beauty","points":3,"reason":"glow-up"}"#).unwrap();

    assert_eq!(adjustment.dimension, Dimension::Beauty);
    assert_eq!(adjustment.points, 3);
}
