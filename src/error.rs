// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading a catalog.
//!
//! Searching never fails. Loading can: the registry file may be missing,
//! malformed, or written for a newer format.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog version {found} (this build reads version {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
