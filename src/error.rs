// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only two things can actually fail: getting a corpus into memory, and
//! accepting a configuration. An empty query or a query with no matches is a
//! normal view state (`ViewKind::Idle` / `ViewKind::NoMatches`), not an error.

use thiserror::Error;

/// Failure to load a corpus.
///
/// Callers that follow the degrade-to-empty policy use
/// `CorpusStore::load_or_empty`, which logs this and carries on.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read from disk.
    #[error("failed to read corpus from {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// The payload arrived but is not a JSON array of the expected records.
    #[error("invalid corpus JSON from {source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    /// The host environment reported a fetch failure (network error, HTTP status).
    #[error("failed to fetch corpus from {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(String),

    #[error("threshold {0} is outside 0.0..=1.0")]
    Threshold(f64),

    #[error("{field} weight must be positive, got {value}")]
    Weight { field: &'static str, value: f64 },

    #[error("{0} must be at least 1")]
    Zero(&'static str),
}
