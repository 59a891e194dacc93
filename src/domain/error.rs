// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! The viewer has a single recoverable error class: fetching or decoding an
//! asset's bits failed. It is rendered as a placeholder for that one item
//! and never reaches the host callbacks.

use std::fmt;

/// Why an asset's image could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The asset carries neither decoded bits, a library reference nor a URL.
    NoSource,

    /// The photo library has no item for the reference.
    NotFound(String),

    /// The network request failed or returned a non-success status.
    Network(String),

    /// Bytes were received but could not be decoded as an image.
    Decode(String),

    /// Local I/O failed while reading library content.
    Io(String),
}

impl FetchError {
    /// Returns the i18n message key for the failure placeholder.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::NoSource => "error-fetch-no-source",
            FetchError::NotFound(_) => "error-fetch-not-found",
            FetchError::Network(_) => "error-fetch-network",
            FetchError::Decode(_) => "error-fetch-decode",
            FetchError::Io(_) => "error-fetch-io",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NoSource => write!(f, "Asset has no image source"),
            FetchError::NotFound(reference) => write!(f, "Library item not found: {reference}"),
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Decode(msg) => write!(f, "Decode error: {msg}"),
            FetchError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
