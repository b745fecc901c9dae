//! Ranking over the sample registry.

use super::common::{assert_well_ranked, ids, make_record, sample_catalog};
use calcsearch::{Locale, MatchedField, SearchOptions, ViewCounts};
use std::collections::HashMap;

#[test]
fn test_bmi_query_ranks_bmi_first() {
    let catalog = sample_catalog();

    let results = catalog.search("bmi", Locale::En);

    assert_eq!(
        ids(&results),
        vec!["bmi", "ideal-weight", "calorie", "body-fat", "due-date"]
    );
    // title-start 80 + keyword-exact 50 + popular 5 + featured 3
    assert_eq!(results[0].score, 138.0);
    assert_eq!(
        results[0].matched_fields,
        vec![
            MatchedField::TitleStart,
            MatchedField::KeywordExact,
            MatchedField::Popular,
            MatchedField::Featured
        ]
    );
    assert_eq!(results[1].score, 50.0);
    // Bonus-only tail keeps catalog order on the 5-point tie
    assert_eq!(results[2].score, 5.0);
    assert_eq!(results[2].matched_fields, vec![MatchedField::Popular]);
    assert_eq!(results[4].score, 3.0);
    assert_eq!(results[4].matched_fields, vec![MatchedField::Featured]);
}

#[test]
fn test_near_miss_is_not_fuzzy_enough() {
    // "bmi" vs "bmr" is 2/3 similar, under the 0.7 title threshold
    let catalog = sample_catalog();

    let results = catalog.search("bmi", Locale::En);

    assert!(!ids(&results).contains(&"bmr"));
}

#[test]
fn test_exact_title_dominates_substring() {
    let records = vec![
        make_record("tool", "health", "My BMI Tool", "VKİ Aracı"),
        make_record("bmi", "health", "BMI", "VKİ"),
    ];

    let results = calcsearch::search(&records, "bmi", Locale::En);

    assert_eq!(ids(&results), vec!["bmi", "tool"]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_generic_query_is_well_ranked() {
    let catalog = sample_catalog();

    let results = catalog.search("calculator", Locale::En);

    assert_eq!(results.len(), catalog.len());
    assert_well_ranked(&results);
}

#[test]
fn test_typo_still_finds_calorie() {
    let catalog = sample_catalog();

    let results = catalog.search("calorei", Locale::En);

    assert_eq!(results[0].id(), "calorie");
    assert!(results[0]
        .matched_fields
        .contains(&MatchedField::TitleFuzzy));
}

#[test]
fn test_limit_keeps_best() {
    let catalog = sample_catalog();
    let all = catalog.search("calculator", Locale::En);

    let limited = catalog.search_with(
        "calculator",
        Locale::En,
        &SearchOptions::with_limit(3),
        &calcsearch::RecordFlags,
    );

    assert_eq!(ids(&limited), ids(&all)[..3].to_vec());
}

#[test]
fn test_view_counts_drive_popular_bonus() {
    let catalog = sample_catalog();
    let views = ViewCounts::new(HashMap::from([("pace".to_string(), 40)]), 25);

    let results = catalog.search_with("calculator", Locale::En, &SearchOptions::default(), &views);

    let pace = results.iter().find(|r| r.id() == "pace").unwrap();
    assert!(pace.matched_fields.contains(&MatchedField::Popular));
    let heart = results.iter().find(|r| r.id() == "heart-rate").unwrap();
    assert!(!heart.matched_fields.contains(&MatchedField::Popular));
}
