use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    /// Builds the error raised for any non-success response.
    pub fn from_status(status: StatusCode) -> Self {
        AppError::Http {
            status: status.as_u16(),
            message: format!(
                "API Error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            ),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_and_reason() {
        let err = AppError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "API Error: 500 Internal Server Error");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected() {
        assert!(AppError::from_status(StatusCode::NOT_FOUND).is_not_found());
        assert!(!AppError::Cancelled.is_not_found());
        assert_eq!(AppError::Decode("x".into()).status(), None);
    }
}
