use chrono::{DateTime, Utc};
use serde::Serialize;

/// Display-ready projection of a [`CourseRecord`](super::CourseRecord).
/// Rebuilt on every fetch and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseViewModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub duration: String,
    pub level: String,
    pub image: String,
    /// Bare amount; the currency symbol is the renderer's concern.
    pub price: f64,
    pub category: String,
    pub lecturer: String,
    pub location: String,
    pub available: bool,
    pub max_participants: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub objectives: Vec<String>,
    pub prerequisites: Vec<String>,
    pub curriculum: Vec<String>,
    pub target_audience: Vec<String>,
}
