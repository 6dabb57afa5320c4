use crate::config::GenderizeSettings;
use crate::core::{construct_query_string, is_valid_name_count, title_for, MAX_NAMES};
use crate::core::query::redact_api_key;
use crate::models::{GenderResult, Title};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Public genderize.io endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.genderize.io";

/// Errors that can occur when interacting with genderize.io
#[derive(Debug, Error)]
pub enum GenderizeError {
    #[error("Name list length must be between 1 and {max}, got {0}", max = MAX_NAMES)]
    InvalidNameCount(usize),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    ApiError(StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// genderize.io API client
///
/// Issues exactly one GET per lookup. There is no retry, caching or rate
/// limiting. `genderise` and `guess_title` never fail: every error is logged
/// and turned into an empty result (or the default title). Use
/// `try_genderise` to see the error instead.
#[derive(Debug, Clone)]
pub struct GenderizeClient {
    base_url: String,
    client: Client,
}

impl GenderizeClient {
    /// Create a new client for `base_url`
    ///
    /// Without a timeout the transport defaults apply.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, GenderizeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(base_url, builder.build()?))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn from_settings(settings: &GenderizeSettings) -> Result<Self, GenderizeError> {
        Self::new(
            settings.endpoint.clone(),
            settings.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up genders for up to nine names, surfacing every failure
    pub async fn try_genderise<S: AsRef<str>>(
        &self,
        names: &[S],
        country_code: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Vec<GenderResult>, GenderizeError> {
        if !is_valid_name_count(names.len()) {
            return Err(GenderizeError::InvalidNameCount(names.len()));
        }

        let query = construct_query_string(names, country_code, api_key);
        let url = format!("{}/?{}", self.base_url.trim_end_matches('/'), query);

        tracing::debug!(
            "Querying genderize.io: {}/?{}",
            self.base_url.trim_end_matches('/'),
            redact_api_key(&query)
        );

        // The URL may carry the API key, keep it out of the error
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::debug!("genderize.io error body: {}", body);
            return Err(GenderizeError::ApiError(status));
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        // Results are returned in upstream order, not checked against the input
        let results: Vec<GenderResult> = serde_json::from_str(&body)
            .map_err(|e| GenderizeError::InvalidResponse(format!("Failed to parse results: {}", e)))?;

        tracing::debug!("genderize.io returned {} results for {} names", results.len(), names.len());

        Ok(results)
    }

    /// Look up genders for up to nine names
    ///
    /// Returns an empty list on any failure: an empty or oversized name
    /// list, a non-200 status, a transport error or an unparseable body.
    pub async fn genderise<S: AsRef<str>>(
        &self,
        names: &[S],
        country_code: Option<&str>,
        api_key: Option<&str>,
    ) -> Vec<GenderResult> {
        match self.try_genderise(names, country_code, api_key).await {
            Ok(results) => results,
            Err(e @ GenderizeError::InvalidNameCount(_)) => {
                tracing::warn!("Skipping genderize.io lookup: {}", e);
                vec![]
            }
            Err(e) => {
                tracing::error!("genderize.io lookup failed: {}", e);
                vec![]
            }
        }
    }

    /// Guess the honorific for a first name, defaulting to `Mr`
    pub async fn guess_title(&self, first_name: &str) -> Title {
        let results = self.genderise(&[first_name], None, None).await;
        title_for(&results)
    }
}
