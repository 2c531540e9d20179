use crate::{CoreError, CoreResult, MAX_BASE_SCORE, MIN_BASE_SCORE};

use serde::Deserialize;

/// User-supplied fields for creating or updating a talent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TalentDraft {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    pub beauty: i32,
    pub cuteness: i32,
    pub talent: i32,
}

impl TalentDraft {
    pub fn new(
        name: impl Into<String>,
        affiliation: Option<String>,
        beauty: i32,
        cuteness: i32,
        talent: i32,
    ) -> Self {
        Self {
            name: name.into(),
            affiliation,
            beauty,
            cuteness,
            talent,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "name must not be empty"));
        }

        for (field, value) in [
            ("beauty", self.beauty),
            ("cuteness", self.cuteness),
            ("talent", self.talent),
        ] {
            if !(MIN_BASE_SCORE..=MAX_BASE_SCORE).contains(&value) {
                return Err(CoreError::validation(
                    field,
                    format!(
                        "{} must be between {} and {}, got {}",
                        field, MIN_BASE_SCORE, MAX_BASE_SCORE, value
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Affiliation as persisted: blank input is stored as NULL.
    pub fn normalized_affiliation(&self) -> Option<&str> {
        self.affiliation
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}
