use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CourseRecord, lenient};

/// An inquiry recorded by the backend against one course. Never mutated
/// once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequestRecord {
    pub id: String,
    pub course_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
    // Nested copies inside a course's own request list usually omit this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<CourseRecord>>,
}

/// Caller-supplied fields of a course request, before the course id is
/// merged in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequestDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}
