//! Client for the training academy's course backend: catalog reads, course
//! requests, display mapping and catalog filtering.

pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiConfig, CourseApi, CourseHttpClient, StaticCourseApi};
pub use error::AppError;
