// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are additive. A record collects points from its title, description,
//! each keyword, its category name and two flat bonuses; the sum orders the
//! results. The point values live in `Weights` so a deployment can tune them
//! without touching the rules.

mod core;
pub mod ranking;

pub use core::*;
