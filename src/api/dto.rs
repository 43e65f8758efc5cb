use serde::Serialize;

use crate::models::CourseRequestDraft;

/// Wire body of `POST /api/courses/{id}/requests`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequestCommand {
    pub course_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub notes: Option<String>,
}

impl CourseRequestCommand {
    pub fn new(course_id: &str, draft: CourseRequestDraft) -> Self {
        Self {
            course_id: course_id.to_string(),
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            notes: draft.notes,
        }
    }
}
