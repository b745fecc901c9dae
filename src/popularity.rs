// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the "popular" bonus comes from.
//!
//! The registry marks a handful of calculators `popular`, and the browser also
//! tracks how often each page is opened. Neither store belongs in the ranker,
//! so ranking asks a `PopularitySource` and the caller decides what backs it.

use crate::types::CalculatorRecord;
use std::collections::HashMap;

/// Read-only answer to "does this record get the popularity bonus?".
///
/// `Sync` because scoring may run on several threads. Any
/// `Fn(&CalculatorRecord) -> bool` closure works as a source.
pub trait PopularitySource: Sync {
    fn is_popular(&self, record: &CalculatorRecord) -> bool;
}

/// The registry's own `popular` flag. This is the default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFlags;

impl PopularitySource for RecordFlags {
    #[inline]
    fn is_popular(&self, record: &CalculatorRecord) -> bool {
        record.popular
    }
}

/// View counts collected elsewhere (e.g. the browser), plus the registry flag.
///
/// A record is popular when the registry says so or when it has been viewed
/// at least `threshold` times.
#[derive(Debug, Clone, Default)]
pub struct ViewCounts {
    counts: HashMap<String, u64>,
    threshold: u64,
}

impl ViewCounts {
    pub fn new(counts: HashMap<String, u64>, threshold: u64) -> Self {
        Self { counts, threshold }
    }

    pub fn views(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }
}

impl PopularitySource for ViewCounts {
    fn is_popular(&self, record: &CalculatorRecord) -> bool {
        // A zero threshold would make every record popular
        record.popular || (self.threshold > 0 && self.views(&record.id) >= self.threshold)
    }
}

impl<F> PopularitySource for F
where
    F: Fn(&CalculatorRecord) -> bool + Sync,
{
    fn is_popular(&self, record: &CalculatorRecord) -> bool {
        self(record)
    }
}
