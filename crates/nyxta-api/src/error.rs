use thiserror::Error;

/// Errors returned by the hostel backend API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx status with a `{message}` body.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The requested resource does not exist. Kept distinct from
    /// [`ApiError::Status`] so a missing branch renders as "not found"
    /// messaging rather than an error banner.
    #[error("not found: {url}")]
    NotFound { url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
