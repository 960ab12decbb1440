use chrono::DateTime;
use chrono_tz::America::New_York;
use chrono_tz::Tz;

use crate::error::AnalyticsError;

/// The time zone every calendar value in the report is computed in.
pub const REPORT_ZONE: Tz = New_York;

/// Renders a UTC epoch timestamp as a zoned datetime in the report time
/// zone, applying the zone's daylight-saving rules at that instant.
pub fn to_eastern(epoch_seconds: i64) -> Result<DateTime<Tz>, AnalyticsError> {
    let utc = DateTime::from_timestamp(epoch_seconds, 0)
        .ok_or(AnalyticsError::InvalidTimestamp(epoch_seconds))?;
    Ok(utc.with_timezone(&REPORT_ZONE))
}
