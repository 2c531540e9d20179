use crate::Dimension;

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// One integer per dimension.
///
/// Used both for ledger sums (deltas) and for current totals
/// (base + deltas); `Add` combines the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub beauty: i32,
    pub cuteness: i32,
    pub talent: i32,
}

impl ScoreTotals {
    pub const ZERO: ScoreTotals = ScoreTotals {
        beauty: 0,
        cuteness: 0,
        talent: 0,
    };

    pub fn new(beauty: i32, cuteness: i32, talent: i32) -> Self {
        Self {
            beauty,
            cuteness,
            talent,
        }
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Beauty => self.beauty,
            Dimension::Cuteness => self.cuteness,
            Dimension::Talent => self.talent,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: i32) {
        match dimension {
            Dimension::Beauty => self.beauty = value,
            Dimension::Cuteness => self.cuteness = value,
            Dimension::Talent => self.talent = value,
        }
    }
}

impl Add for ScoreTotals {
    type Output = ScoreTotals;

    fn add(self, rhs: ScoreTotals) -> ScoreTotals {
        ScoreTotals {
            beauty: self.beauty + rhs.beauty,
            cuteness: self.cuteness + rhs.cuteness,
            talent: self.talent + rhs.talent,
        }
    }
}
