//! Timestamp formatting and hour bucketing

use crate::model::{ModelError, Result};
use chrono::{DateTime, FixedOffset, Timelike, Utc};

fn at_offset(timestamp: i64, offset: &FixedOffset) -> Result<DateTime<FixedOffset>> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.with_timezone(offset))
        .ok_or(ModelError::InvalidTimestamp(timestamp))
}

/// Format Unix seconds with a strftime pattern in the given offset
pub fn format_timestamp(timestamp: i64, offset: &FixedOffset, format: &str) -> Result<String> {
    Ok(at_offset(timestamp, offset)?.format(format).to_string())
}

/// Start of the hour containing `timestamp`, measured in the given offset
pub fn hour_start(timestamp: i64, offset: &FixedOffset) -> Result<DateTime<Utc>> {
    let local = at_offset(timestamp, offset)?;
    local
        .with_minute(0)
        .and_then(|dt| dt.with_second(0))
        .and_then(|dt| dt.with_nanosecond(0))
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(ModelError::InvalidTimestamp(timestamp))
}
