pub mod dto;

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url, header};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::models::{CourseRecord, CourseRequestDraft};
use dto::CourseRequestCommand;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| AppError::Config(format!("invalid API base url {:?}: {}", base_url, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "unsupported API base url scheme: {}",
                base_url.scheme()
            )));
        }

        Ok(Self { base_url })
    }

    /// Reads `ACADEMY_API_BASE` (a `.env` file is honoured), falling back
    /// to the local development host.
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let base = env::var("ACADEMY_API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self::new(&base)
    }
}

/// Read and submit operations against the course backend. Every call is
/// single-shot: one network request, no retry.
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<CourseRecord>, AppError>;
    async fn get_course(&self, id: &str) -> Result<CourseRecord, AppError>;
    async fn submit_course_request(
        &self,
        course_id: &str,
        draft: CourseRequestDraft,
    ) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct CourseHttpClient {
    client: Client,
    config: ApiConfig,
}

impl CourseHttpClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::new(ApiConfig::new_from_env()?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("cannot use {} as a base url", self.config.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            let body = response.text().await.unwrap_or_default();
            warn!("API request to {} failed with {}: {}", url, status, body);
            return Err(AppError::from_status(status));
        }

        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        debug!("GET {}", url);
        let response = self.send(self.client.get(url.clone())).await?;
        let body_text = response.text().await?;

        serde_json::from_str::<T>(&body_text).map_err(|e| {
            warn!("Failed to parse response from {}: {}", url, e);
            AppError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl CourseApi for CourseHttpClient {
    async fn list_courses(&self) -> Result<Vec<CourseRecord>, AppError> {
        let url = self.endpoint(&["api", "courses"])?;
        let courses: Vec<CourseRecord> = self.fetch_json(url).await?;
        debug!("Fetched {} courses", courses.len());
        Ok(courses)
    }

    async fn get_course(&self, id: &str) -> Result<CourseRecord, AppError> {
        let url = self.endpoint(&["api", "courses", id])?;
        self.fetch_json(url).await
    }

    async fn submit_course_request(
        &self,
        course_id: &str,
        draft: CourseRequestDraft,
    ) -> Result<(), AppError> {
        let url = self.endpoint(&["api", "courses", course_id, "requests"])?;
        let body = CourseRequestCommand::new(course_id, draft);

        debug!("POST {}", url);
        let response = self.send(self.client.post(url).json(&body)).await?;
        info!("Course request for {} accepted ({})", course_id, response.status());

        Ok(())
    }
}

/// Serves a fixed course list from memory and records submitted requests.
#[derive(Default)]
pub struct StaticCourseApi {
    courses: Vec<CourseRecord>,
    submitted: Mutex<Vec<CourseRequestCommand>>,
}

impl StaticCourseApi {
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Self {
            courses,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submitted(&self) -> Vec<CourseRequestCommand> {
        self.recorded().clone()
    }

    // A panicked holder cannot leave the list half-written, so keep using it.
    fn recorded(&self) -> MutexGuard<'_, Vec<CourseRequestCommand>> {
        self.submitted.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn find(&self, id: &str) -> Result<&CourseRecord, AppError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::from_status(StatusCode::NOT_FOUND))
    }
}

#[async_trait]
impl CourseApi for StaticCourseApi {
    async fn list_courses(&self) -> Result<Vec<CourseRecord>, AppError> {
        Ok(self.courses.clone())
    }

    async fn get_course(&self, id: &str) -> Result<CourseRecord, AppError> {
        self.find(id).cloned()
    }

    async fn submit_course_request(
        &self,
        course_id: &str,
        draft: CourseRequestDraft,
    ) -> Result<(), AppError> {
        self.find(course_id)?;
        self.recorded().push(CourseRequestCommand::new(course_id, draft));
        Ok(())
    }
}
