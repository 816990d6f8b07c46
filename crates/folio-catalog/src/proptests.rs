//! Property-based tests for catalog ordering guarantees.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::{sorted_by_recency, Catalog};
    use crate::record::Project;
    use folio_core::Slug;
    use proptest::prelude::*;

    /// Builds a catalog of records `p0..pn` with the given years and flags.
    fn catalog_from(years: &[String], flags: &[bool]) -> Catalog {
        let records = years
            .iter()
            .zip(flags)
            .enumerate()
            .map(|(i, (year, flag))| {
                Project::builder()
                    .slug(format!("p{i}"))
                    .title(format!("P{i}"))
                    .year(year.clone())
                    .spotlight(*flag)
                    .build()
            })
            .collect();
        Catalog::new(records).unwrap()
    }

    fn years_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![
                (1990i32..2030).prop_map(|y| y.to_string()),
                (1990i32..2020, 0i32..10).prop_map(|(a, d)| format!("{a}-{}", a + d)),
                Just("TBD".to_string()),
            ],
            0..16,
        )
    }

    fn flags_for(len: usize) -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), len..=len)
    }

    proptest! {
        #[test]
        fn test_sort_is_descending_by_end_year(years in years_strategy()) {
            let flags = vec![false; years.len()];
            let catalog = catalog_from(&years, &flags);

            let sorted = sorted_by_recency(catalog.iter().collect());
            for pair in sorted.windows(2) {
                // None is the minimum, so unparseable years trail everything.
                prop_assert!(pair[0].year.end_year() >= pair[1].year.end_year());
            }
        }

        #[test]
        fn test_sort_is_stable(years in years_strategy()) {
            let flags = vec![false; years.len()];
            let catalog = catalog_from(&years, &flags);

            let index_of = |slug: &Slug| -> usize {
                catalog.iter().position(|p| p.slug == *slug).unwrap()
            };

            let sorted = sorted_by_recency(catalog.iter().collect());
            for pair in sorted.windows(2) {
                if pair[0].year.end_year() == pair[1].year.end_year() {
                    prop_assert!(index_of(&pair[0].slug) < index_of(&pair[1].slug));
                }
            }
        }

        #[test]
        fn test_sort_is_idempotent(years in years_strategy()) {
            let flags = vec![false; years.len()];
            let catalog = catalog_from(&years, &flags);

            let once = sorted_by_recency(catalog.iter().collect());
            let twice = sorted_by_recency(once.clone());
            let once_slugs: Vec<_> = once.iter().map(|p| p.slug.as_str()).collect();
            let twice_slugs: Vec<_> = twice.iter().map(|p| p.slug.as_str()).collect();
            prop_assert_eq!(once_slugs, twice_slugs);
        }

        #[test]
        fn test_sort_is_a_permutation(years in years_strategy()) {
            let flags = vec![false; years.len()];
            let catalog = catalog_from(&years, &flags);

            let sorted = sorted_by_recency(catalog.iter().collect());
            prop_assert_eq!(sorted.len(), catalog.len());
            for record in catalog.iter() {
                prop_assert!(sorted.iter().any(|p| p.slug == record.slug));
            }
        }

        #[test]
        fn test_filters_preserve_catalog_order(
            (years, flags) in years_strategy()
                .prop_flat_map(|years| {
                    let len = years.len();
                    (Just(years), flags_for(len))
                })
        ) {
            let catalog = catalog_from(&years, &flags);

            let spotlighted = catalog.spotlighted();
            let mut last_index = None;
            for record in &spotlighted {
                let index = catalog.iter().position(|p| p.slug == record.slug).unwrap();
                if let Some(last) = last_index {
                    prop_assert!(index > last);
                }
                last_index = Some(index);
            }
            prop_assert_eq!(spotlighted.len(), flags.iter().filter(|f| **f).count());
        }
    }
}
