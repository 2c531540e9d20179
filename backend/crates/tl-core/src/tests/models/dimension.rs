use crate::{CoreError, Dimension};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_dimension_as_str() {
    assert_eq!(Dimension::Beauty.as_str(), "beauty");
    assert_eq!(Dimension::Cuteness.as_str(), "cuteness");
    assert_eq!(Dimension::Talent.as_str(), "talent");
}

#[test]
fn test_dimension_from_str() {
    for dimension in Dimension::ALL {
        assert_eq!(Dimension::from_str(dimension.as_str()).unwrap(), dimension);
    }
}

#[test]
fn given_unknown_value_when_parsed_then_invalid_dimension() {
    let result = Dimension::from_str("charisma");

    assert!(matches!(
        result,
        Err(CoreError::InvalidDimension { ref value, .. }) if value == "charisma"
    ));
}

#[test]
fn given_uppercase_value_when_parsed_then_rejected() {
    assert_that!(Dimension::from_str("Beauty"), err(anything()));
}

#[test]
fn test_dimension_serializes_as_snake_case() {
    let json = serde_json::to_string(&Dimension::Cuteness).unwrap();
    assert_eq!(json, "\"cuteness\"");

    let parsed: Dimension = serde_json::from_str("\"talent\"").unwrap();
    assert_eq!(parsed, Dimension::Talent);
}
