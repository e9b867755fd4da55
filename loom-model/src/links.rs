//! Labeled link entries in a user profile
//!
//! A [`LinkEntry`] is an immutable value: list-level edits replace entries
//! rather than mutating them in place, so snapshots handed to a validation
//! pass stay stable while the user keeps typing.

use serde::{Deserialize, Serialize};
use url::Url;

/// A labeled URL pair within the profile's link collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Human-readable label, e.g. "GitHub"
    pub label: String,
    /// Absolute URL as entered by the user
    pub url: String,
}

impl LinkEntry {
    /// Build an entry from owned parts.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// An empty entry, as appended by the link list editor.
    pub fn empty() -> Self {
        Self {
            label: String::new(),
            url: String::new(),
        }
    }

    /// Parse the stored URL. `Url::parse` rejects relative references, so
    /// success implies an absolute URL.
    pub fn parsed_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_parses() {
        let entry = LinkEntry::new("GitHub", "https://github.com/alice");
        assert!(entry.parsed_url().is_ok());
    }

    #[test]
    fn relative_url_is_rejected() {
        let entry = LinkEntry::new("Broken", "not-a-url");
        assert!(entry.parsed_url().is_err());
    }

    #[test]
    fn empty_entry_is_blank() {
        let entry = LinkEntry::empty();
        assert!(entry.label.is_empty() && entry.url.is_empty());
    }
}
