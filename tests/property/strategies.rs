//! Generators for catalogs and queries.
//!
//! Words come from a small health vocabulary plus random noise, so queries
//! hit titles and keywords often enough to exercise every scoring rule.

use calcsearch::testing::make_record_full;
use calcsearch::{CalculatorRecord, Locale};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "bmi", "body", "mass", "index", "calorie", "kalori", "vücut", "kitle", "yağ", "oranı", "su",
    "water", "gebelik", "pregnancy", "pace", "koşu", "İdeal", "kilo", "weight", "hesaplama",
    "calculator", "BMI", "Calorie",
];

/// A vocabulary word or a short random one.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(VOCABULARY).prop_map(str::to_string),
        1 => "[a-zçğıöşü]{1,8}",
    ]
}

/// One to four words joined by spaces.
pub fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

/// Queries, including blank and padded ones.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        1 => Just("   ".to_string()),
        6 => phrase_strategy(),
        2 => word_strategy().prop_map(|w| format!("  {}  ", w.to_uppercase())),
    ]
}

pub fn locale_strategy() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

fn record_strategy(id: String) -> impl Strategy<Value = CalculatorRecord> {
    (
        phrase_strategy(),
        phrase_strategy(),
        phrase_strategy(),
        prop::collection::vec(phrase_strategy(), 0..4),
        prop::sample::select(vec!["health", "nutrition", "fitness", "retired"]),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(move |(en, tr, description, keywords, category, popular, featured)| {
            let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
            let mut record = make_record_full(
                &id,
                category,
                (&en, &tr),
                (&description, &description),
                &keywords,
            );
            record.popular = popular;
            record.featured = featured;
            record
        })
}

/// Catalogs with unique ids `r0`, `r1`, ...
pub fn catalog_strategy() -> impl Strategy<Value = Vec<CalculatorRecord>> {
    (0usize..12).prop_flat_map(|len| {
        (0..len)
            .map(|i| record_strategy(format!("r{}", i)))
            .collect::<Vec<_>>()
    })
}

/// Catalogs whose ids repeat (drawn from a pool of three).
pub fn catalog_with_duplicates_strategy() -> impl Strategy<Value = Vec<CalculatorRecord>> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c"])
            .prop_flat_map(|id| record_strategy(id.to_string())),
        0..10,
    )
}
