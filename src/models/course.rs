use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CourseRequestRecord, lenient};

/// A training offering as served by the academy backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub course_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub lecturer: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub price: f64,
    pub available: bool,
    /// Length of the course in hours.
    pub duration: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub max_participants: u32,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<Vec<CourseRequestRecord>>,
}

/// Returns the value only when it is present and non-empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn record(start: &str, max_participants: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "c1",
            "courseName": "Electrical Safety",
            "price": 450,
            "available": true,
            "duration": 16,
            "maxParticipants": max_participants,
            "startDate": start,
            "endDate": "2026-03-03T17:00:00Z"
        })
    }

    #[test]
    fn decodes_offset_less_start_date_as_utc() {
        let course: CourseRecord =
            serde_json::from_value(record("2026-03-02T09:00:00", json!(12))).unwrap();

        assert_eq!(course.start_date, Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap());
        assert_eq!(course.end_date, Utc.with_ymd_and_hms(2026, 3, 3, 17, 0, 0).unwrap());
    }

    #[test]
    fn decodes_fractional_participant_count() {
        let course: CourseRecord =
            serde_json::from_value(record("2026-03-02T09:00:00Z", json!(12.0))).unwrap();
        assert_eq!(course.max_participants, 12);

        let course: CourseRecord =
            serde_json::from_value(record("2026-03-02T09:00:00Z", json!(-3))).unwrap();
        assert_eq!(course.max_participants, 0);
    }

    #[test]
    fn rejects_unparseable_start_date() {
        let result = serde_json::from_value::<CourseRecord>(record("soon", json!(12)));
        assert!(result.is_err());
    }
}
