// SPDX-License-Identifier: MPL-2.0
//! Command-line item parsing.

use crate::domain::asset::LibraryRef;
use reqwest::Url;
use std::path::PathBuf;

/// Prefix marking a photo library reference.
pub const LIBRARY_PREFIX: &str = "lib:";

/// One positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Local file, decoded eagerly.
    File(PathBuf),
    Library(LibraryRef),
    Remote(Url),
}

impl Item {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(id) = raw.strip_prefix(LIBRARY_PREFIX) {
            return Self::Library(LibraryRef::new(id));
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            if let Ok(url) = Url::parse(raw) {
                return Self::Remote(url);
            }
            tracing::warn!(item = raw, "invalid URL, treating as a file path");
        }
        Self::File(PathBuf::from(raw))
    }
}
