use crate::models::course::present;
use crate::models::{CourseRecord, CourseViewModel};

pub const UNTITLED_COURSE: &str = "Untitled Course";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_FULL_DESCRIPTION: &str = "No detailed description available";
pub const DEFAULT_LEVEL: &str = "Beginner";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_LECTURER: &str = "TBA";
pub const DEFAULT_LOCATION: &str = "Online";

const OBJECTIVES: &str = "Course objectives will be provided";
const PREREQUISITES: &str = "Prerequisites will be specified";
const CURRICULUM: &str = "Curriculum details available upon request";
const TARGET_AUDIENCE: &str = "Professionals seeking to enhance their skills";

fn or_fallback(value: &Option<String>, fallback: &str) -> String {
    present(value).unwrap_or(fallback).to_string()
}

pub fn format_duration(hours: f64) -> String {
    format!("{} hours", hours)
}

/// Projects a course record into its display shape. Total: every nullable
/// field resolves to a fixed fallback.
pub fn map_for_display(course: &CourseRecord) -> CourseViewModel {
    CourseViewModel {
        id: course.id.clone(),
        title: or_fallback(&course.course_name, UNTITLED_COURSE),
        description: or_fallback(&course.course_description, NO_DESCRIPTION),
        full_description: or_fallback(&course.course_description, NO_FULL_DESCRIPTION),
        duration: format_duration(course.duration),
        level: or_fallback(&course.status, DEFAULT_LEVEL),
        image: or_fallback(&course.image_url, PLACEHOLDER_IMAGE),
        price: course.price,
        category: or_fallback(&course.language, DEFAULT_CATEGORY),
        lecturer: or_fallback(&course.lecturer, DEFAULT_LECTURER),
        location: or_fallback(&course.location, DEFAULT_LOCATION),
        available: course.available,
        max_participants: course.max_participants,
        start_date: course.start_date,
        end_date: course.end_date,
        objectives: vec![OBJECTIVES.to_string()],
        prerequisites: vec![PREREQUISITES.to_string()],
        curriculum: vec![CURRICULUM.to_string()],
        target_audience: vec![TARGET_AUDIENCE.to_string()],
    }
}

pub fn map_all(courses: &[CourseRecord]) -> Vec<CourseViewModel> {
    courses.iter().map(map_for_display).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::course;

    #[test]
    fn maps_populated_record() {
        let mut record = course("c1", "Electrical Safety", "Safety", "Beginner");
        record.duration = 16.0;

        let view = map_for_display(&record);

        assert_eq!(view.id, "c1");
        assert_eq!(view.title, "Electrical Safety");
        assert_eq!(view.duration, "16 hours");
        assert_eq!(view.level, "Beginner");
        assert_eq!(view.category, "Safety");
    }

    #[test]
    fn all_null_record_gets_every_fallback() {
        let mut record = course("c2", "", "", "");
        record.course_name = None;
        record.course_description = None;
        record.language = None;
        record.status = None;
        record.image_url = None;
        record.lecturer = None;
        record.location = None;

        let view = map_for_display(&record);

        assert_eq!(view.title, UNTITLED_COURSE);
        assert_eq!(view.description, NO_DESCRIPTION);
        assert_eq!(view.full_description, NO_FULL_DESCRIPTION);
        assert_eq!(view.level, DEFAULT_LEVEL);
        assert_eq!(view.image, PLACEHOLDER_IMAGE);
        assert_eq!(view.category, DEFAULT_CATEGORY);
        assert_eq!(view.lecturer, DEFAULT_LECTURER);
        assert_eq!(view.location, DEFAULT_LOCATION);
        assert_eq!(view.objectives, vec![OBJECTIVES.to_string()]);
        assert_eq!(view.target_audience.len(), 1);
    }

    #[test]
    fn empty_strings_fall_back_like_nulls() {
        let mut record = course("c3", "", "", "");
        record.lecturer = Some(String::new());

        let view = map_for_display(&record);

        assert_eq!(view.title, UNTITLED_COURSE);
        assert_eq!(view.category, DEFAULT_CATEGORY);
        assert_eq!(view.level, DEFAULT_LEVEL);
        assert_eq!(view.lecturer, DEFAULT_LECTURER);
    }

    #[test]
    fn passes_through_price_and_schedule() {
        let mut record = course("c4", "Grid Basics", "Technology", "Advanced");
        record.price = 450.0;
        record.duration = 1.5;
        record.image_url = Some("https://cdn.example/grid.jpg".into());

        let view = map_for_display(&record);

        assert_eq!(view.price, 450.0);
        assert_eq!(view.duration, "1.5 hours");
        assert_eq!(view.image, "https://cdn.example/grid.jpg");
        assert_eq!(view.start_date, record.start_date);
        assert_eq!(view.end_date, record.end_date);
    }
}
