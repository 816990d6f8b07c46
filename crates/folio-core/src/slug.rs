//! The slug identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External key for a catalog record.
///
/// Slugs are human-readable strings like `"oracle-engine"` or `"spoti-cli"`.
/// The site uses them as URL path segments, and the catalog uses them as
/// lookup keys. Lookup is exact and case-sensitive, so slugs are stored
/// verbatim: no normalization is applied here or anywhere on the query path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Creates a new slug from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::Slug;
    ///
    /// let slug = Slug::new("oracle-engine");
    /// assert_eq!(slug.as_str(), "oracle-engine");
    /// ```
    pub fn new<S: Into<String>>(slug: S) -> Self {
        Self(slug.into())
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the slug is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_creation() {
        let slug = Slug::new("surface");
        assert_eq!(slug.as_str(), "surface");
        assert!(!slug.is_empty());
    }

    #[test]
    fn test_slug_from_string() {
        let slug = Slug::from("mlbdatatools".to_string());
        assert_eq!(slug.as_str(), "mlbdatatools");
    }

    #[test]
    fn test_slug_from_str() {
        let slug = Slug::from("url-short");
        assert_eq!(slug.as_str(), "url-short");
    }

    #[test]
    fn test_slug_display() {
        let slug = Slug::new("remnants-autoplay");
        assert_eq!(slug.to_string(), "remnants-autoplay");
    }

    #[test]
    fn test_slug_is_stored_verbatim() {
        // Lookup is case-sensitive by contract, so construction must not
        // lowercase or trim.
        let slug = Slug::new("Mixed Case ");
        assert_eq!(slug.as_str(), "Mixed Case ");
        assert_ne!(slug, Slug::new("mixed case"));
    }

    #[test]
    fn test_empty_slug() {
        let slug = Slug::new("");
        assert!(slug.is_empty());
    }

    #[test]
    fn test_slug_roundtrip_serialization() {
        let slug = Slug::new("premebase");
        let json = serde_json::to_string(&slug).unwrap();
        assert_eq!(json, "\"premebase\"");
        let deserialized: Slug = serde_json::from_str(&json).unwrap();
        assert_eq!(slug, deserialized);
    }
}
