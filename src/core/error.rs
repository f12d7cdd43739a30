use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Client-visible message when the discovery call fails
pub const CPF_LOOKUP_FAILED: &str = "Erro ao consultar CPF";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request payload violates an input rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Institution discovery failed; aborts the whole request
    #[error("{}", CPF_LOOKUP_FAILED)]
    UpstreamUnavailable(String),

    /// A single offer-terms lookup failed; recovered by the fetcher
    #[error("Offer lookup failed: {0}")]
    OfferLookupFailed(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_REQUEST,
            AppError::OfferLookupFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn upstream_unavailable(cause: impl Into<String>) -> Self {
        AppError::UpstreamUnavailable(cause.into())
    }

    pub fn offer_lookup_failed(cause: impl Into<String>) -> Self {
        AppError::OfferLookupFailed(cause.into())
    }
}
