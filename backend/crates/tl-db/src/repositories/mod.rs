pub mod adjustment_repository;
pub mod score_aggregator;
pub mod talent_repository;
pub mod user_repository;

use tl_core::Dimension;

use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Decode a unix-seconds column into a UTC timestamp.
pub(crate) fn timestamp_column(column: &str, seconds: i64) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: format!("timestamp {} out of range", seconds).into(),
    })
}

/// Decode the stored `adjustment_type` text into a [`Dimension`].
pub(crate) fn dimension_column(value: &str) -> Result<Dimension, sqlx::Error> {
    Dimension::from_str(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: "adjustment_type".to_string(),
        source: Box::new(e),
    })
}
