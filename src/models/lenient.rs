//! Tolerant decoders for backend fields whose wire shape varies between
//! deployments.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

/// Parses RFC 3339, then offset-less date-times and bare dates, the last
/// two read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("unrecognised timestamp: {:?}", raw)))
}

/// Any JSON number, truncated toward zero and clamped into `u32`.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(de::Error::custom("count must be a finite number"));
    }
    Ok(value.clamp(0.0, u32::MAX as f64) as u32)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamps_with_and_without_offset() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();

        assert_eq!(parse_timestamp("2026-03-02T09:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-03-02T11:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-03-02T09:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-03-02T09:00:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2026-03-02 09:00:00"), Some(expected));
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        assert_eq!(
            parse_timestamp("2026-03-02"),
            Some(Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert_eq!(parse_timestamp("next tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
