// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for both search surfaces and the table-of-contents tracker.
//!
//! Every field has a default matching the shipped site, so an empty `{}` is a
//! valid config. The values are deliberately configuration rather than
//! constants: tests pin them explicitly to stay reproducible.
//!
//! | Setting                        | Default | Used by            |
//! |--------------------------------|---------|--------------------|
//! | `catalog.maxShown`             | 4       | `ResultComposer`   |
//! | `catalog.minQueryLen`          | 1       | `SearchController` |
//! | `catalog.debounceMs`           | 100     | `Debouncer`        |
//! | `pageIndex.threshold`          | 0.3     | `FuzzyMatcher`     |
//! | `pageIndex.limit`              | 10      | `FuzzyMatcher`     |
//! | `pageIndex.debounceMs`         | none    | `SearchController` |
//! | `tracker.activationOffset`     | 205.0   | `ViewportTracker`  |
//! | `help.cooldownSecs`            | 5       | `HelpCooldown`     |

use crate::controller::ControllerConfig;
use crate::error::ConfigError;
use crate::matching::FuzzyConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of catalog cards rendered before the "N more" notice.
pub const DEFAULT_MAX_SHOWN: usize = 4;
/// Default debounce delay for catalog input, in milliseconds.
pub const DEFAULT_CATALOG_DEBOUNCE_MS: u64 = 100;
/// Default fuzzy strictness (0.0 = exact only, 1.0 = anything).
pub const DEFAULT_THRESHOLD: f64 = 0.3;
/// Default cap on page-index results.
pub const DEFAULT_PAGE_LIMIT: usize = 10;
/// Default activation line, in pixels from the top of the viewport.
pub const DEFAULT_ACTIVATION_OFFSET: f64 = 205.0;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub catalog: CatalogConfig,
    pub page_index: PageIndexConfig,
    pub tracker: TrackerConfig,
    pub help: HelpConfig,
}

impl SearchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        self.page_index.validate()
    }
}

/// Node-catalog search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub max_shown: usize,
    pub min_query_len: usize,
    pub debounce_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_shown: DEFAULT_MAX_SHOWN,
            min_query_len: 1,
            debounce_ms: DEFAULT_CATALOG_DEBOUNCE_MS,
        }
    }
}

impl CatalogConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_shown == 0 {
            return Err(ConfigError::Zero("catalog.maxShown"));
        }
        Ok(())
    }

    pub fn controller(&self) -> ControllerConfig {
        ControllerConfig {
            min_query_len: self.min_query_len,
            debounce: Some(Duration::from_millis(self.debounce_ms)),
        }
    }
}

/// Page-index (fuzzy) search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageIndexConfig {
    pub threshold: f64,
    pub limit: usize,
    pub min_query_len: usize,
    /// The page index reacts to every keystroke unless this is set.
    pub debounce_ms: Option<u64>,
    pub title_weight: f64,
    pub content_weight: f64,
    pub ignore_diacritics: bool,
}

impl Default for PageIndexConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_PAGE_LIMIT,
            min_query_len: 1,
            debounce_ms: None,
            title_weight: 1.0,
            content_weight: 1.0,
            ignore_diacritics: false,
        }
    }
}

impl PageIndexConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.limit == 0 {
            return Err(ConfigError::Zero("pageIndex.limit"));
        }
        if self.title_weight.is_nan() || self.title_weight <= 0.0 {
            return Err(ConfigError::Weight {
                field: "title",
                value: self.title_weight,
            });
        }
        if self.content_weight.is_nan() || self.content_weight <= 0.0 {
            return Err(ConfigError::Weight {
                field: "content",
                value: self.content_weight,
            });
        }
        Ok(())
    }

    pub fn fuzzy(&self) -> FuzzyConfig {
        FuzzyConfig {
            threshold: self.threshold,
            limit: self.limit,
            title_weight: self.title_weight,
            content_weight: self.content_weight,
            ignore_diacritics: self.ignore_diacritics,
        }
    }

    pub fn controller(&self) -> ControllerConfig {
        ControllerConfig {
            min_query_len: self.min_query_len,
            debounce: self.debounce_ms.map(Duration::from_millis),
        }
    }
}

/// Table-of-contents tracker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    pub activation_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            activation_offset: DEFAULT_ACTIVATION_OFFSET,
        }
    }
}

/// Editor-side help command settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelpConfig {
    pub cooldown_secs: u64,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self { cooldown_secs: 5 }
    }
}

impl HelpConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}
