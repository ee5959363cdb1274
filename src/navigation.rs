// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Links in and out of the search pages.
//!
//! - `search_param` reads the `?search=` deep-link parameter that seeds the
//!   catalog search on page load.
//! - `deep_link` builds that URL; the editor's help command uses it to open
//!   the reference page on a specific node, throttled by `HelpCooldown`.
//! - `SiteLocation` resolves page-index URLs and asset paths relative to the
//!   page doing the searching (the site root links one directory deeper than
//!   the pages themselves).

use std::collections::HashMap;
use std::time::Duration;

/// Name of the deep-link query parameter.
pub const SEARCH_PARAM: &str = "search";

/// Read the `search` parameter from a query string (`?a=1&search=add+node`).
///
/// Decoding follows `application/x-www-form-urlencoded`: `+` is a space and
/// percent escapes are decoded. The first occurrence wins. An empty value
/// counts as absent; whitespace is kept, the controller trims.
pub fn search_param(query_string: &str) -> Option<String> {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(key)? == SEARCH_PARAM).then(|| form_decode(value))?
        })
        .filter(|value| !value.is_empty())
}

fn form_decode(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}

/// Build `base?search=<query>`, form-encoding the query.
pub fn deep_link(base: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query).replace("%20", "+");
    format!("{}?{}={}", base, SEARCH_PARAM, encoded)
}

/// Where the current page sits in the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLocation {
    path: String,
}

impl SiteLocation {
    /// `path` is the current page's path, e.g. `/` or `/pages/physics.html`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The landing page: `/` or any `index.html`.
    pub fn is_root(&self) -> bool {
        self.path == "/" || self.path.contains("index.html")
    }

    /// Link target for a page-index entry.
    pub fn page_href(&self, url: &str) -> String {
        if self.is_root() {
            format!("./pages/{}", url)
        } else {
            url.to_string()
        }
    }

    /// Path to a file under the site's `assets/` directory.
    pub fn asset(&self, relative: &str) -> String {
        if self.is_root() {
            format!("assets/{}", relative)
        } else {
            format!("../assets/{}", relative)
        }
    }
}

impl Default for SiteLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Per-query rate limit for opening help deep links.
///
/// Asking for the same node twice inside the cooldown is refused with the
/// remaining wait; different queries do not affect each other. Entries whose
/// cooldown has passed are dropped on the next attempt.
#[derive(Debug, Clone)]
pub struct HelpCooldown {
    cooldown: Duration,
    last_opened: HashMap<String, Duration>,
}

impl HelpCooldown {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_opened: HashMap::new(),
        }
    }

    /// Record an attempt for `query` at `now`.
    ///
    /// Returns `Err(remaining)` without recording when still cooling down.
    pub fn try_acquire(&mut self, query: &str, now: Duration) -> Result<(), Duration> {
        let cooldown = self.cooldown;
        self.last_opened
            .retain(|_, last| now.saturating_sub(*last) < cooldown);
        if let Some(&last) = self.last_opened.get(query) {
            let elapsed = now.saturating_sub(last);
            if elapsed < self.cooldown {
                return Err(self.cooldown - elapsed);
            }
        }
        self.last_opened.insert(query.to_string(), now);
        Ok(())
    }

    /// Queries still cooling down as of the last attempt.
    pub fn tracked(&self) -> usize {
        self.last_opened.len()
    }

    /// Throttled `deep_link`.
    pub fn link(&mut self, base: &str, query: &str, now: Duration) -> Result<String, Duration> {
        self.try_acquire(query, now)?;
        tracing::debug!(query, "opening help deep link");
        Ok(deep_link(base, query))
    }
}
