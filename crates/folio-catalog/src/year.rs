//! Year spans and the recency key derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// YearSpan
// ============================================================================

/// The year a record belongs to.
///
/// Stored exactly as authored: either a bare year (`"2026"`) or a hyphenated
/// range (`"2017-2018"`). The raw text is what the site displays; ordering
/// never reformats it.
///
/// # Examples
///
/// ```
/// use folio_catalog::YearSpan;
///
/// let span = YearSpan::new("2023-2025");
/// assert_eq!(span.as_str(), "2023-2025");
/// assert_eq!(span.end_year(), Some(2025));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearSpan(String);

impl YearSpan {
    /// Creates a year span from the authored text.
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    /// Returns the span exactly as authored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The end year used for recency ordering.
    ///
    /// For a range this is the last `-`-separated segment; for a bare year
    /// it is the year itself. Returns `None` when the segment is not an
    /// integer, in which case the record sorts as least recent.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_catalog::YearSpan;
    ///
    /// assert_eq!(YearSpan::new("2026").end_year(), Some(2026));
    /// assert_eq!(YearSpan::new("2023-2025").end_year(), Some(2025));
    /// assert_eq!(YearSpan::new("TBD").end_year(), None);
    /// ```
    pub fn end_year(&self) -> Option<i32> {
        self.0.rsplit('-').next()?.trim().parse().ok()
    }
}

impl fmt::Display for YearSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for YearSpan {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for YearSpan {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for YearSpan {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_end_year_bare() {
        assert_eq!(YearSpan::new("2026").end_year(), Some(2026));
    }

    #[test]
    fn test_end_year_range() {
        assert_eq!(YearSpan::new("2017-2018").end_year(), Some(2018));
        assert_eq!(YearSpan::new("2023-2025").end_year(), Some(2025));
    }

    #[test]
    fn test_end_year_tolerates_padding() {
        assert_eq!(YearSpan::new("2023 - 2025").end_year(), Some(2025));
    }

    #[test]
    fn test_end_year_unparseable_is_none() {
        assert_eq!(YearSpan::new("TBD").end_year(), None);
        assert_eq!(YearSpan::new("2023-ongoing").end_year(), None);
        assert_eq!(YearSpan::new("").end_year(), None);
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let span = YearSpan::new("2023-2025");
        assert_eq!(span.as_str(), "2023-2025");
        assert_eq!(span.to_string(), "2023-2025");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(YearSpan::from("2024"), YearSpan::new("2024"));
        assert_eq!(YearSpan::from("2024".to_string()), YearSpan::new("2024"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let span = YearSpan::new("2023-2025");
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "\"2023-2025\"");
        let back: YearSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
