// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Supported locales and per-locale values.
//!
//! The site ships in exactly two languages, so `Locale` is a closed enum and
//! `Localized<T>` carries one slot per variant. Adding a language means adding
//! a variant here and a field on `Localized`; the compiler then points at every
//! match that needs updating.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language the site is published in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// BCP 47 primary language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported locale '{0}' (expected one of: en, tr)")]
    Unsupported(String),
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts a bare tag or one with a region subtag (`en-US`, `tr_TR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

/// One value per supported locale.
///
/// Slots are optional so a half-translated record still deserializes; callers
/// treat a missing slot as "nothing to match" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Localized<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tr: Option<T>,
}

impl<T> Localized<T> {
    pub fn new(en: T, tr: T) -> Self {
        Self {
            en: Some(en),
            tr: Some(tr),
        }
    }

    #[inline]
    pub fn get(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::En => self.en.as_ref(),
            Locale::Tr => self.tr.as_ref(),
        }
    }
}

impl Localized<String> {
    /// Borrowed text for `locale`, or `""` when the slot is missing.
    #[inline]
    pub fn text(&self, locale: Locale) -> &str {
        self.get(locale).map(String::as_str).unwrap_or("")
    }
}

impl From<(&str, &str)> for Localized<String> {
    fn from((en, tr): (&str, &str)) -> Self {
        Localized::new(en.to_string(), tr.to_string())
    }
}
