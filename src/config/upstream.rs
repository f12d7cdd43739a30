use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Connection settings for the credit bureau upstream
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL both the discovery and the offer endpoints hang off
    pub base_url: String,
    pub timeout_secs: u64,
    /// Upper bound on in-flight offer-terms lookups per request
    pub lookup_concurrency: usize,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
            lookup_concurrency: 8,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(UpstreamConfig {
            base_url: env::var("URL_START_POINT")
                .map_err(|_| AppError::Configuration("URL_START_POINT not set".to_string()))?,
            timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid UPSTREAM_TIMEOUT_SECS".to_string())
                })?,
            lookup_concurrency: env::var("OFFER_LOOKUP_CONCURRENCY")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid OFFER_LOOKUP_CONCURRENCY".to_string())
                })?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Joins an endpoint path onto the base URL, tolerating a trailing slash on either side
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Configuration(format!(
                "URL_START_POINT must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.lookup_concurrency == 0 {
            return Err(AppError::Configuration(
                "Offer lookup concurrency must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
