//! HTTP client for the hostel backend REST API.
//!
//! Wraps `reqwest` with typed error handling and JSON deserialization.
//! Non-2xx responses carry a `{"message": ...}` body which is surfaced in
//! [`ApiError::Status`]; `404` maps to the distinct [`ApiError::NotFound`].
//! There is no retry policy anywhere in this client: a failed fetch is
//! reported once and re-attempted only by an explicit caller action.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use nyxta_core::{AppConfig, Enquiry, NewEnquiry};

use crate::error::ApiError;
use crate::types::{RawBranch, RawGalleryImage};

/// Client for the hostel backend REST API.
///
/// Use [`ApiClient::new`] with loaded configuration for production, or
/// [`ApiClient::with_base_url`] to point at a mock server in tests.
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so
        // relative joins extend the path prefix instead of replacing its
        // last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches every branch record.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Status`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_branches(&self) -> Result<Vec<RawBranch>, ApiError> {
        self.get_json("branches").await
    }

    /// Fetches a single branch by id.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] if no branch has the given id.
    /// - [`ApiError::Http`], [`ApiError::Status`] and
    ///   [`ApiError::Deserialize`] as for [`ApiClient::get_branches`].
    pub async fn get_branch(&self, id: i64) -> Result<RawBranch, ApiError> {
        self.get_json(&format!("branches/{id}")).await
    }

    /// Fetches gallery rows across every branch.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_branches`].
    pub async fn get_gallery(&self) -> Result<Vec<RawGalleryImage>, ApiError> {
        self.get_json("gallery").await
    }

    /// Fetches gallery rows scoped to one branch.
    ///
    /// An empty list is a successful response meaning "no images for this
    /// branch", not an error.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_branches`].
    pub async fn get_branch_gallery(
        &self,
        branch_id: i64,
    ) -> Result<Vec<RawGalleryImage>, ApiError> {
        self.get_json(&format!("gallery/branch/{branch_id}")).await
    }

    /// Submits a booking/contact enquiry and returns the created record.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_branches`].
    pub async fn create_enquiry(&self, enquiry: &NewEnquiry) -> Result<Enquiry, ApiError> {
        let url = self.endpoint("enquiries")?;
        debug!(%url, "submitting enquiry");
        let response = self.client.post(url.clone()).json(enquiry).send().await?;
        let body = Self::check_status(url.as_str(), response).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Sends a GET request and parses the response body as JSON.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        debug!(%url, "fetching");
        let response = self.client.get(url.clone()).send().await?;
        let body = Self::check_status(url.as_str(), response).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Resolves a relative endpoint path against the stored base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }

    /// Maps non-2xx responses to typed errors and returns the body text
    /// on success.
    ///
    /// The backend sends `{"message": ...}` alongside error statuses;
    /// that message is extracted when present, with the HTTP reason
    /// phrase as fallback.
    async fn check_status(url: &str, response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
            let message = match response.text().await {
                Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                    .map_or(fallback, |parsed| parsed.message),
                Err(_) => fallback,
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.text().await?)
    }
}

/// Error envelope the backend returns on non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
