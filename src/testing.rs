use chrono::{TimeZone, Utc};

use crate::models::CourseRecord;

pub(crate) fn course(id: &str, name: &str, category: &str, level: &str) -> CourseRecord {
    CourseRecord {
        id: id.to_string(),
        course_name: Some(name.to_string()),
        course_description: Some(format!("Hands-on training: {}", name)),
        image_url: None,
        location: Some("Regensburg".to_string()),
        language: Some(category.to_string()),
        lecturer: Some("M. Huber".to_string()),
        status: Some(level.to_string()),
        price: 0.0,
        available: true,
        duration: 8.0,
        max_participants: 12,
        start_date: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2026, 3, 3, 17, 0, 0).unwrap(),
        requests: None,
    }
}
