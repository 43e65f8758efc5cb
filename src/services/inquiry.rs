//! Contact form submissions.
//!
//! A contact form either names a course, in which case it becomes a course
//! request on the backend, or is a general inquiry that is acknowledged
//! locally without any network call.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::CourseApi;
use crate::error::AppError;
use crate::models::CourseRequestDraft;

const GENERAL: &str = "general";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CourseChoice {
    #[default]
    General,
    Course(String),
}

impl From<&str> for CourseChoice {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == GENERAL {
            CourseChoice::General
        } else {
            CourseChoice::Course(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    /// Selected course id, empty or `"general"` for a general inquiry.
    pub course: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn course_choice(&self) -> CourseChoice {
        self.course.as_str().into()
    }

    /// Folds the fields the backend has no column for into the free-text notes.
    pub fn notes(&self) -> String {
        format!(
            "Phone: {}\nCompany: {}\nPosition: {}\n\nMessage: {}",
            self.phone, self.company, self.position, self.message
        )
    }

    pub fn to_draft(&self) -> CourseRequestDraft {
        CourseRequestDraft {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            notes: Some(self.notes()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquiryOutcome {
    General,
    CourseRequested { course_id: String },
}

pub async fn submit_inquiry(
    api: &dyn CourseApi,
    inquiry: &ContactInquiry,
) -> Result<InquiryOutcome, AppError> {
    match inquiry.course_choice() {
        CourseChoice::General => {
            info!("General inquiry acknowledged without a course request");
            Ok(InquiryOutcome::General)
        }
        CourseChoice::Course(course_id) => {
            api.submit_course_request(&course_id, inquiry.to_draft()).await?;
            Ok(InquiryOutcome::CourseRequested { course_id })
        }
    }
}
