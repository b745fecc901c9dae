//! Each scoring rule in isolation, with exact point values.

use super::common::{categories, ids, make_record, make_record_full};
use calcsearch::{search, search_with, Locale, MatchedField, RecordFlags, SearchOptions};

#[test]
fn test_title_beats_keyword_and_unrelated_is_excluded() {
    let records = vec![
        make_record("a", "health", "BMI Calculator", "VKİ Hesaplama"),
        make_record_full("b", "health", ("Ideal Weight", "İdeal Kilo"), ("", ""), &["bmi"]),
        make_record("c", "fitness", "Running Pace", "Koşu Temposu"),
    ];

    let results = search(&records, "bmi", Locale::En);

    assert_eq!(ids(&results), vec!["a", "b"]);
    assert_eq!(results[0].score, 80.0);
    assert_eq!(results[0].matched_fields, vec![MatchedField::TitleStart]);
    assert_eq!(results[1].score, 50.0);
    assert_eq!(results[1].matched_fields, vec![MatchedField::KeywordExact]);
}

#[test]
fn test_title_rules_are_exclusive() {
    let records = vec![make_record("bmi", "health", "BMI", "VKİ")];

    let results = search(&records, "bmi", Locale::En);

    // exact also starts with and contains, but only the best rule fires
    assert_eq!(results[0].matched_fields, vec![MatchedField::TitleExact]);
    assert_eq!(results[0].score, 100.0);
}

#[test]
fn test_title_contains() {
    let records = vec![make_record("bmi", "health", "My BMI Tool", "VKİ")];

    let results = search(&records, "bmi", Locale::En);

    assert_eq!(results[0].matched_fields, vec![MatchedField::Title]);
    assert_eq!(results[0].score, 60.0);
}

#[test]
fn test_title_fuzzy() {
    let records = vec![make_record("calorie", "nutrition", "Calorie", "Kalori")];

    let results = search(&records, "calorei", Locale::En);

    assert_eq!(results[0].matched_fields, vec![MatchedField::TitleFuzzy]);
    assert_eq!(results[0].score, 40.0);
}

#[test]
fn test_description_contains() {
    let records = vec![make_record_full(
        "bmi",
        "health",
        ("BMI Calculator", "VKİ Hesaplama"),
        ("Calculates body mass index", "Vücut kitle indeksi"),
        &[],
    )];

    let results = search(&records, "body mass", Locale::En);

    assert_eq!(results[0].matched_fields, vec![MatchedField::Description]);
    assert_eq!(results[0].score, 30.0);
}

#[test]
fn test_every_keyword_contributes() {
    let records = vec![make_record_full(
        "bmi",
        "health",
        ("Index Tool", "İndeks Aracı"),
        ("", ""),
        &["bmi", "bmi chart"],
    )];

    let results = search(&records, "bmi", Locale::En);

    assert_eq!(
        results[0].matched_fields,
        vec![MatchedField::KeywordExact, MatchedField::Keyword]
    );
    assert_eq!(results[0].score, 75.0);
}

#[test]
fn test_keyword_fuzzy() {
    let records = vec![make_record_full(
        "calorie",
        "nutrition",
        ("Energy", "Enerji"),
        ("", ""),
        &["calorie"],
    )];

    let results = search(&records, "calorei", Locale::En);

    assert_eq!(results[0].matched_fields, vec![MatchedField::KeywordFuzzy]);
    assert_eq!(results[0].score, 12.0);
}

#[test]
fn test_bonuses_stack_on_a_match() {
    let mut record = make_record("bmi", "health", "BMI Calculator", "VKİ Hesaplama");
    record.popular = true;
    record.featured = true;
    let records = vec![record];

    let results = search(&records, "bmi", Locale::En);

    assert_eq!(
        results[0].matched_fields,
        vec![
            MatchedField::TitleStart,
            MatchedField::Popular,
            MatchedField::Featured
        ]
    );
    assert_eq!(results[0].score, 88.0);
}

#[test]
fn test_bonuses_alone_still_rank() {
    let mut record = make_record("water", "nutrition", "Water Intake", "Su Tüketimi");
    record.popular = true;
    record.featured = true;
    let records = vec![
        record,
        make_record("pace", "fitness", "Running Pace", "Koşu Temposu"),
    ];

    let results = search(&records, "bmi", Locale::En);

    assert_eq!(ids(&results), vec!["water"]);
    assert_eq!(results[0].score, 8.0);
    assert_eq!(
        results[0].matched_fields,
        vec![MatchedField::Popular, MatchedField::Featured]
    );
}

#[test]
fn test_category_name_needs_category_table() {
    let records = vec![make_record("due-date", "pregnancy", "Due Date", "Doğum Tarihi")];

    assert!(search(&records, "preg", Locale::En).is_empty());

    let results = search_with(
        &records,
        &categories(),
        "preg",
        Locale::En,
        &SearchOptions::default(),
        &RecordFlags,
    );
    assert_eq!(results[0].matched_fields, vec![MatchedField::Category]);
    assert_eq!(results[0].score, 20.0);
}

#[test]
fn test_category_name_is_localized() {
    let records = vec![make_record("due-date", "pregnancy", "Due Date", "Doğum Tarihi")];
    let categories = categories();
    let options = SearchOptions::default();

    let en = search_with(&records, &categories, "gebelik", Locale::En, &options, &RecordFlags);
    let tr = search_with(&records, &categories, "gebelik", Locale::Tr, &options, &RecordFlags);

    assert!(en.is_empty());
    assert_eq!(ids(&tr), vec!["due-date"]);
}

#[test]
fn test_custom_weights() {
    let records = vec![
        make_record("a", "health", "BMI Calculator", "VKİ Hesaplama"),
        make_record_full("b", "health", ("Ideal Weight", "İdeal Kilo"), ("", ""), &["bmi"]),
    ];
    let mut options = SearchOptions::default();
    options.weights.keyword_exact = 500.0;

    let results = search_with(&records, &[], "bmi", Locale::En, &options, &RecordFlags);

    assert_eq!(ids(&results), vec!["b", "a"]);
    assert_eq!(results[0].score, 500.0);
}
