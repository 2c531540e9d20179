use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// An independently scored axis of a talent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Beauty,
    Cuteness,
    Talent,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Self::Beauty, Self::Cuteness, Self::Talent];

    /// Database and wire representation (`adjustments.adjustment_type`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beauty => "beauty",
            Self::Cuteness => "cuteness",
            Self::Talent => "talent",
        }
    }
}

impl FromStr for Dimension {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "beauty" => Ok(Self::Beauty),
            "cuteness" => Ok(Self::Cuteness),
            "talent" => Ok(Self::Talent),
            _ => Err(CoreError::InvalidDimension {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
