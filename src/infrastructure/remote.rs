// SPDX-License-Identifier: MPL-2.0
//! HTTP fetches for URL-backed assets.

use std::time::Duration;

use reqwest::Url;

use crate::domain::error::FetchError;

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Connection timeout; the overall request has no deadline of its own.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Downloads the body at `url`.
///
/// # Errors
///
/// Returns [`FetchError::Network`] if the request fails, the server answers
/// with a non-success status, or the body is empty.
pub async fn fetch_bytes(url: &Url) -> Result<Vec<u8>, FetchError> {
    check_scheme(url)?;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if body.is_empty() {
        return Err(FetchError::Network("Empty response body".into()));
    }

    Ok(body.to_vec())
}

fn check_scheme(url: &Url) -> Result<(), FetchError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::Network(format!("Unsupported scheme: {other}"))),
    }
}
