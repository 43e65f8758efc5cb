pub mod course;
pub mod course_request;
pub mod lenient;
pub mod view_model;

pub use course::CourseRecord;
pub use course_request::{CourseRequestDraft, CourseRequestRecord};
pub use view_model::CourseViewModel;
