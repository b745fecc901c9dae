//! Invariants of the ranked result list.

use super::strategies::{
    catalog_strategy, catalog_with_duplicates_strategy, locale_strategy, query_strategy,
};
use calcsearch::{search, search_with, Locale, RecordFlags, SearchOptions};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: blank queries never return anything.
    #[test]
    fn prop_blank_query_returns_empty(
        catalog in catalog_strategy(),
        locale in locale_strategy(),
        blank in "[ \t\n]{0,4}",
    ) {
        prop_assert!(search(&catalog, &blank, locale).is_empty());
    }

    /// Property: every result scored above zero and matched something.
    #[test]
    fn prop_scores_positive(
        catalog in catalog_strategy(),
        query in query_strategy(),
        locale in locale_strategy(),
    ) {
        for result in search(&catalog, &query, locale) {
            prop_assert!(result.score > 0.0);
            prop_assert!(!result.matched_fields.is_empty());
        }
    }

    /// Property: popular and featured records show up for any non-blank query.
    #[test]
    fn prop_flagged_records_always_returned(
        catalog in catalog_strategy(),
        query in query_strategy(),
        locale in locale_strategy(),
    ) {
        prop_assume!(!query.trim().is_empty());
        let returned: HashSet<&str> = search(&catalog, &query, locale)
            .into_iter()
            .map(|result| result.record.id.as_str())
            .collect();
        for record in catalog.iter().filter(|r| r.popular || r.featured) {
            prop_assert!(returned.contains(record.id.as_str()));
        }
    }

    /// Property: results are sorted by descending score.
    #[test]
    fn prop_results_sorted(
        catalog in catalog_strategy(),
        query in query_strategy(),
        locale in locale_strategy(),
    ) {
        let results = search(&catalog, &query, locale);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Property: equal scores keep catalog order.
    #[test]
    fn prop_ties_keep_catalog_order(
        catalog in catalog_strategy(),
        query in query_strategy(),
        locale in locale_strategy(),
    ) {
        let position: HashMap<&str, usize> = catalog
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id.as_str(), i))
            .collect();

        let results = search(&catalog, &query, locale);
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(position[pair[0].id()] < position[pair[1].id()]);
            }
        }
    }

    /// Property: an id appears at most once, whatever the registry holds.
    #[test]
    fn prop_no_duplicate_ids_in_results(
        catalog in catalog_with_duplicates_strategy(),
        query in query_strategy(),
        locale in locale_strategy(),
    ) {
        let results = search(&catalog, &query, locale);
        let unique: HashSet<&str> = results.iter().map(|r| r.id()).collect();
        prop_assert_eq!(unique.len(), results.len());
    }

    /// Property: a limited search is a prefix of the unlimited one.
    #[test]
    fn prop_limit_is_prefix(
        catalog in catalog_strategy(),
        query in query_strategy(),
        limit in 0usize..8,
    ) {
        let all = search(&catalog, &query, Locale::En);
        let limited = search_with(
            &catalog,
            &[],
            &query,
            Locale::En,
            &SearchOptions::with_limit(limit),
            &RecordFlags,
        );

        prop_assert_eq!(limited.len(), all.len().min(limit));
        prop_assert_eq!(&limited[..], &all[..limited.len()]);
    }

    /// Property: case and surrounding whitespace of the query don't matter.
    #[test]
    fn prop_query_case_insensitive(
        catalog in catalog_strategy(),
        query in "[a-z]{1,6}",
        locale in locale_strategy(),
    ) {
        let lower = search(&catalog, &query, locale);
        let upper = search(&catalog, &format!(" {} ", query.to_uppercase()), locale);
        prop_assert_eq!(lower, upper);
    }
}
