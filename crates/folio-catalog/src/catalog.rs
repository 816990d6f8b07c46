//! The catalog container and its query operations.
//!
//! Provides:
//! - Validated construction from a record list
//! - Slug lookup and flag/category filters
//! - Stable most-recent-first ordering
//! - The derived queries behind the site's pages
//!
//! A catalog never changes after construction, so every operation here is a
//! pure read: same catalog, same arguments, same result.

use std::collections::HashSet;

use folio_core::{Error, Result};

use crate::record::{Category, Project};

// ============================================================================
// Catalog
// ============================================================================

/// The fixed, ordered collection of project records.
///
/// Built once from a record list and validated up front; records keep the
/// order they were given in, and every query that does not sort returns
/// them in that order. Nothing is written after construction, so a single
/// catalog can safely back any number of concurrent page renders.
///
/// # Examples
///
/// ```
/// use folio_catalog::{Catalog, Project};
///
/// let records = vec![
///     Project::builder().slug("a").title("A").year("2024").build(),
///     Project::builder().slug("b").title("B").year("2021").build(),
/// ];
/// let catalog = Catalog::new(records)?;
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.by_slug("b").is_some());
/// assert!(catalog.by_slug("missing").is_none());
/// # Ok::<(), folio_core::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog from records, preserving their order.
    ///
    /// Fails if a record has an empty slug or if two records share a slug.
    /// `by_slug` returns the first match, so a duplicate would silently
    /// shadow the later record; rejecting it here keeps every record
    /// addressable.
    pub fn new(records: Vec<Project>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for record in &records {
            if record.slug.is_empty() {
                return Err(Error::validation_field(
                    "slug",
                    format!("record '{}' has an empty slug", record.title),
                ));
            }
            if !seen.insert(record.slug.as_str()) {
                return Err(Error::duplicate_slug(record.slug.as_str()));
            }
            if record.year.end_year().is_none() {
                log::warn!(
                    "Record '{}' has unparseable year span '{}'; sorting as least recent",
                    record.slug,
                    record.year
                );
            }
        }

        log::debug!("Catalog built: {} records", records.len());
        Ok(Self { records })
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.records.iter()
    }

    /// Looks up a record by slug.
    ///
    /// The match is exact and case-sensitive; no trimming or case folding
    /// is applied to either side. Returns `None` when no record has the
    /// slug, which is an expected outcome (a stale URL, say), not an error.
    pub fn by_slug(&self, slug: &str) -> Option<&Project> {
        self.records.iter().find(|p| p.slug.as_str() == slug)
    }

    /// Records satisfying a predicate, in catalog order.
    pub fn filter<F>(&self, mut predicate: F) -> Vec<&Project>
    where
        F: FnMut(&Project) -> bool,
    {
        self.records.iter().filter(|p| predicate(p)).collect()
    }

    /// Records with the spotlight flag set, in catalog order.
    pub fn spotlighted(&self) -> Vec<&Project> {
        self.filter(|p| p.spotlight)
    }

    /// Records in the given category, in catalog order.
    pub fn in_category(&self, category: Category) -> Vec<&Project> {
        self.filter(|p| p.category == category)
    }

    /// Resolves a curated slug list into records, in the given order.
    ///
    /// Slugs with no matching record are skipped, so a hand-maintained
    /// list stays usable while the record set evolves.
    pub fn select(&self, slugs: &[&str]) -> Vec<&Project> {
        slugs.iter().filter_map(|slug| self.by_slug(slug)).collect()
    }
}

// ============================================================================
// Recency ordering
// ============================================================================

/// Sorts records most-recent-first by end year.
///
/// The sort is stable: records with the same end year keep their relative
/// input order, and re-sorting an already-sorted list leaves it unchanged.
/// Records whose year span has no parseable end year sort after everything
/// else.
pub fn sorted_by_recency(mut records: Vec<&Project>) -> Vec<&Project> {
    records.sort_by(|a, b| b.year.end_year().cmp(&a.year.end_year()));
    records
}

// ============================================================================
// Derived page queries
// ============================================================================

impl Catalog {
    /// Records for the home-page spotlight: flagged records, most recent
    /// first.
    pub fn spotlight_projects(&self) -> Vec<&Project> {
        sorted_by_recency(self.spotlighted())
    }

    /// Records for the experience section: jobs and education, most recent
    /// first.
    pub fn experience_and_education(&self) -> Vec<&Project> {
        sorted_by_recency(self.filter(|p| p.category.is_background()))
    }

    /// Records for the main projects list: projects and endeavors that are
    /// not already in the spotlight, most recent first.
    pub fn projects_and_endeavors(&self) -> Vec<&Project> {
        sorted_by_recency(self.filter(|p| p.category.is_work() && !p.spotlight))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;

    fn record(slug: &str, year: &str) -> Project {
        Project::builder()
            .slug(slug)
            .title(slug.to_uppercase())
            .summary(format!("Summary for {slug}."))
            .year(year)
            .build()
    }

    fn create_test_catalog() -> Catalog {
        let records = vec![
            Project::builder()
                .slug("alpha")
                .title("Alpha")
                .summary("A flagged project.")
                .year("2020")
                .category(Category::Project)
                .spotlight(true)
                .status(Status::Shipped)
                .build(),
            Project::builder()
                .slug("beta")
                .title("Beta")
                .summary("A long-running endeavor.")
                .year("2023-2025")
                .category(Category::Endeavor)
                .spotlight(true)
                .build(),
            Project::builder()
                .slug("gamma")
                .title("Gamma")
                .summary("An unflagged project.")
                .year("2026")
                .category(Category::Project)
                .build(),
            Project::builder()
                .slug("delta")
                .title("Delta")
                .summary("A degree.")
                .year("2025")
                .category(Category::Education)
                .build(),
            Project::builder()
                .slug("epsilon")
                .title("Epsilon")
                .summary("A job.")
                .year("2021-2023")
                .category(Category::Experience)
                .build(),
        ];
        Catalog::new(records).unwrap()
    }

    fn slugs<'a>(records: &[&'a Project]) -> Vec<&'a str> {
        records.iter().map(|p| p.slug.as_str()).collect()
    }

    // ------------------------------------------------------------------------
    // Construction tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_new_preserves_order() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert_eq!(
            slugs(&catalog.iter().collect::<Vec<_>>()),
            vec!["alpha", "beta", "gamma", "delta", "epsilon"]
        );
    }

    #[test]
    fn test_new_empty() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_new_rejects_duplicate_slug() {
        let records = vec![record("alpha", "2020"), record("alpha", "2021")];
        let err = Catalog::new(records).unwrap_err();

        assert!(matches!(err, Error::DuplicateSlug { .. }));
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn test_new_rejects_empty_slug() {
        let records = vec![Project::builder().title("No Slug").year("2020").build()];
        let err = Catalog::new(records).unwrap_err();

        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_new_accepts_unparseable_year() {
        // Logged, not rejected.
        let catalog = Catalog::new(vec![record("alpha", "TBD")]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    // ------------------------------------------------------------------------
    // Lookup tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_by_slug_found() {
        let catalog = create_test_catalog();
        let project = catalog.by_slug("gamma").unwrap();
        assert_eq!(project.title, "Gamma");
    }

    #[test]
    fn test_by_slug_missing_is_none() {
        let catalog = create_test_catalog();
        assert!(catalog.by_slug("nonexistent").is_none());
    }

    #[test]
    fn test_by_slug_is_case_sensitive() {
        let catalog = create_test_catalog();
        assert!(catalog.by_slug("Alpha").is_none());
        assert!(catalog.by_slug("ALPHA").is_none());
        assert!(catalog.by_slug("alpha ").is_none());
    }

    // ------------------------------------------------------------------------
    // Filter tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = create_test_catalog();
        let projects = catalog.filter(|p| p.category == Category::Project);
        assert_eq!(slugs(&projects), vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_spotlighted() {
        let catalog = create_test_catalog();
        assert_eq!(slugs(&catalog.spotlighted()), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_in_category() {
        let catalog = create_test_catalog();
        assert_eq!(slugs(&catalog.in_category(Category::Endeavor)), vec!["beta"]);
        assert_eq!(catalog.in_category(Category::Experience).len(), 1);
    }

    #[test]
    fn test_in_category_empty_result() {
        let catalog = Catalog::new(vec![record("alpha", "2020")]).unwrap();
        assert!(catalog.in_category(Category::Education).is_empty());
    }

    #[test]
    fn test_select_resolves_in_given_order() {
        let catalog = create_test_catalog();
        let picked = catalog.select(&["delta", "alpha"]);
        assert_eq!(slugs(&picked), vec!["delta", "alpha"]);
    }

    #[test]
    fn test_select_skips_unknown_slugs() {
        let catalog = create_test_catalog();
        let picked = catalog.select(&["alpha", "missing", "gamma"]);
        assert_eq!(slugs(&picked), vec!["alpha", "gamma"]);
    }

    // ------------------------------------------------------------------------
    // Recency ordering tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_sorted_by_recency_descending() {
        let catalog = create_test_catalog();
        let sorted = sorted_by_recency(catalog.iter().collect());
        // End years: gamma 2026, beta/delta 2025, epsilon 2023, alpha 2020.
        assert_eq!(
            slugs(&sorted),
            vec!["gamma", "beta", "delta", "epsilon", "alpha"]
        );
    }

    #[test]
    fn test_sorted_by_recency_range_uses_end_year() {
        let a = record("older", "2024");
        let b = record("newer", "2019-2025");
        let catalog = Catalog::new(vec![a, b]).unwrap();

        let sorted = sorted_by_recency(catalog.iter().collect());
        assert_eq!(slugs(&sorted), vec!["newer", "older"]);
    }

    #[test]
    fn test_sorted_by_recency_ties_keep_input_order() {
        let records = vec![
            record("first", "2024"),
            record("second", "2024"),
            record("third", "2024"),
        ];
        let catalog = Catalog::new(records).unwrap();

        let sorted = sorted_by_recency(catalog.iter().collect());
        assert_eq!(slugs(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sorted_by_recency_idempotent() {
        let catalog = create_test_catalog();
        let once = sorted_by_recency(catalog.iter().collect());
        let twice = sorted_by_recency(once.clone());
        assert_eq!(slugs(&once), slugs(&twice));
    }

    #[test]
    fn test_sorted_by_recency_unparseable_sorts_last() {
        let records = vec![
            record("undated", "TBD"),
            record("old", "2017-2018"),
            record("new", "2026"),
        ];
        let catalog = Catalog::new(records).unwrap();

        let sorted = sorted_by_recency(catalog.iter().collect());
        assert_eq!(slugs(&sorted), vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_sorted_by_recency_empty() {
        assert!(sorted_by_recency(Vec::new()).is_empty());
    }

    // ------------------------------------------------------------------------
    // Derived page query tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_spotlight_projects_most_recent_first() {
        let catalog = create_test_catalog();
        // alpha (2020) and beta (2023-2025) are flagged; beta ends later.
        assert_eq!(slugs(&catalog.spotlight_projects()), vec!["beta", "alpha"]);
    }

    #[test]
    fn test_spotlight_projects_orders_bare_years_and_ranges() {
        // Authored oldest-first on purpose; end years 2020 < 2025 < 2026.
        let records = vec![
            Project::builder().slug("c").year("2020").spotlight(true).build(),
            Project::builder().slug("b").year("2023-2025").spotlight(true).build(),
            Project::builder().slug("a").year("2026").spotlight(true).build(),
        ];
        let catalog = Catalog::new(records).unwrap();
        assert_eq!(slugs(&catalog.spotlight_projects()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_spotlight_projects_ties_keep_catalog_order() {
        let records = vec![
            Project::builder().slug("a").year("2022").spotlight(true).build(),
            Project::builder().slug("b").year("2022").spotlight(true).build(),
            Project::builder().slug("c").year("2023").spotlight(true).build(),
        ];
        let catalog = Catalog::new(records).unwrap();
        assert_eq!(slugs(&catalog.spotlight_projects()), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_experience_and_education() {
        let catalog = create_test_catalog();
        // delta (education, 2025) then epsilon (experience, ends 2023).
        assert_eq!(
            slugs(&catalog.experience_and_education()),
            vec!["delta", "epsilon"]
        );
    }

    #[test]
    fn test_projects_and_endeavors_excludes_spotlighted() {
        let catalog = create_test_catalog();
        // alpha and beta are work records but flagged; delta and epsilon are
        // background. Only gamma remains.
        assert_eq!(slugs(&catalog.projects_and_endeavors()), vec!["gamma"]);
    }

    #[test]
    fn test_derived_queries_on_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.spotlight_projects().is_empty());
        assert!(catalog.experience_and_education().is_empty());
        assert!(catalog.projects_and_endeavors().is_empty());
    }
}
