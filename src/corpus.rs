// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: get the records into memory once, then never touch them again.
//!
//! A `Corpus` is an immutable, cheaply clonable slice. It is built once at
//! startup and handed to whoever searches it; there is no global.
//!
//! Loading failures follow a degrade-to-empty policy when `load_or_empty` is
//! used: the failure is logged, the store stays empty, and every later search
//! simply finds nothing. There is no retry.

use crate::error::LoadError;
use crate::types::{PageDoc, Record};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read-only record set.
#[derive(Debug)]
pub struct Corpus<T> {
    records: Arc<[T]>,
}

impl<T> Clone for Corpus<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Corpus<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }
}

impl<T> Default for Corpus<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Corpus<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.records
    }
}

impl<T> From<Vec<T>> for Corpus<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

/// Something a corpus can be parsed from.
pub trait CorpusEntry: DeserializeOwned {
    /// Key that must be unique within the corpus, if the record type has one.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

impl CorpusEntry for Record {
    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl CorpusEntry for PageDoc {
    fn unique_key(&self) -> Option<&str> {
        Some(&self.url)
    }
}

/// Where the raw corpus payload comes from.
pub trait CorpusSource {
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable origin, for log lines and error messages.
    fn describe(&self) -> String;
}

/// Corpus stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CorpusSource for FileSource {
    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        fs::read(&self.path).map_err(|error| LoadError::Read {
            source_name: self.describe(),
            error,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Payload that is already in memory, e.g. the body of a browser `fetch()`.
///
/// A failed fetch is represented by `BytesSource::failed`, so the host can
/// route network errors through the same degrade-to-empty path.
#[derive(Debug, Clone)]
pub struct BytesSource {
    name: String,
    body: Result<Vec<u8>, String>,
}

impl BytesSource {
    pub fn new(name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            body: Ok(body.into()),
        }
    }

    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Err(reason.into()),
        }
    }
}

impl CorpusSource for BytesSource {
    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        self.body.clone().map_err(|reason| LoadError::Fetch {
            source_name: self.name.clone(),
            reason,
        })
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Outcome of the one-time load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { records: usize },
    /// Load failed; the corpus is empty for the rest of the session.
    Failed { reason: String },
}

/// Holds a corpus for the lifetime of a page.
#[derive(Debug, Clone)]
pub struct CorpusStore<T> {
    corpus: Corpus<T>,
    status: LoadStatus,
}

impl<T: CorpusEntry> CorpusStore<T> {
    /// Fetch and parse a corpus. Failures are returned, not swallowed.
    pub fn load(source: &dyn CorpusSource) -> Result<Corpus<T>, LoadError> {
        let bytes = source.fetch()?;
        let records: Vec<T> =
            serde_json::from_slice(&bytes).map_err(|error| LoadError::Parse {
                source_name: source.describe(),
                error,
            })?;
        warn_duplicates(&records, &source.describe());
        tracing::info!(source = %source.describe(), records = records.len(), "corpus loaded");
        Ok(Corpus::new(records))
    }

    /// Load, degrading to an empty store on failure.
    pub fn load_or_empty(source: &dyn CorpusSource) -> Self {
        match Self::load(source) {
            Ok(corpus) => Self {
                status: LoadStatus::Loaded {
                    records: corpus.len(),
                },
                corpus,
            },
            Err(e) => {
                tracing::warn!(error = %e, "corpus unavailable, continuing with an empty store");
                Self {
                    corpus: Corpus::empty(),
                    status: LoadStatus::Failed {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }
}

impl<T> CorpusStore<T> {
    pub fn from_corpus(corpus: Corpus<T>) -> Self {
        Self {
            status: LoadStatus::Loaded {
                records: corpus.len(),
            },
            corpus,
        }
    }

    /// Shared handle to the loaded records.
    pub fn corpus(&self) -> Corpus<T> {
        self.corpus.clone()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}

fn warn_duplicates<T: CorpusEntry>(records: &[T], source: &str) {
    let mut seen = HashSet::new();
    for key in records.iter().filter_map(CorpusEntry::unique_key) {
        if !seen.insert(key) {
            tracing::warn!(source, key, "duplicate key in corpus");
        }
    }
}
