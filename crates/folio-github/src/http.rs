//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (403 rate limiting with `Retry-After`
//! parsing, any other non-success → [`FetchError::Api`]) so the repository
//! module stays focused on request construction and response mapping.

use crate::error::FetchError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **403 Forbidden** → [`FetchError::RateLimited`]. The hosting API answers
///   unauthenticated quota exhaustion with 403; `Retry-After` is honoured if
///   present, otherwise 0.
/// - **Any other non-success status**, 429 included → [`FetchError::Api`]
///   with status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    match resp.status().as_u16() {
        403 => Err(FetchError::RateLimited {
            status: 403,
            retry_after_secs: parse_retry_after(&resp).unwrap_or(0),
        }),
        _ if !resp.status().is_success() => Err(FetchError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
        _ => Ok(resp),
    }
}

/// Parse the `Retry-After` header as seconds.
fn parse_retry_after(resp: &reqwest::Response) -> Option<u64> {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}
