use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/url/short`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The destination URL to shorten.
    pub url: String,
    /// Optional expiry; defaults to 24 hours from creation when omitted.
    pub custom_expiry: Option<Timestamp>,
}

/// Successful response to a shorten request.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: Timestamp,
    pub expire_at: Timestamp,
}
