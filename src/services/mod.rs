pub mod catalog;
pub mod inquiry;
pub mod mapper;
pub mod scope;

pub use catalog::{CatalogFilter, CatalogOptions, Catalogued, Selector};
pub use inquiry::{ContactInquiry, CourseChoice, InquiryOutcome, submit_inquiry};
pub use mapper::{map_all, map_for_display};
pub use scope::FetchScope;
