// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search for a static documentation site.
//!
//! Two search surfaces share one pipeline: the node catalog (exact substring,
//! grouped by category, debounced) and the page index (fuzzy, ranked, capped,
//! immediate). A third, independent piece tracks which heading of the page
//! being read is on screen, for table-of-contents highlighting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌────────────┐
//! │  corpus.rs  │────▶│ controller.rs│────▶│  matching/   │────▶│ compose.rs │
//! │ (load once, │     │ (trim, min   │     │ (substring,  │     │ (cap, group│
//! │  immutable) │     │  len, debounce)    │  fuzzy)      │     │  remaining)│
//! └─────────────┘     └──────────────┘     └──────────────┘     └────────────┘
//!                            ▲                    │                    │
//!                            │                    ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐     ┌────────────┐
//!                     │ navigation.rs│     │   fuzzy/     │     │  render.rs │
//!                     │ (?search=,   │     │ (semi-global │     │ (ResultSink│
//!                     │  help links) │     │  edit dist.) │     │  HTML)     │
//!                     └──────────────┘     └──────────────┘     └────────────┘
//!
//! ┌──────────────┐     ┌──────────────┐
//! │ viewport.rs  │────▶│  render.rs   │   (TocSink)
//! │ (active      │     │              │
//! │  heading)    │     │              │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! Nothing here reads a clock or touches a DOM. Time arrives as a `Duration`
//! since an arbitrary epoch, layout arrives through `HeadingLayout`, and
//! output leaves through `ResultSink` / `TocSink`. The `wasm` feature adds
//! `wasm-bindgen` wrappers that plug those seams into a browser.
//!
//! # Usage
//!
//! ```
//! use docsight::{
//!     Corpus, ControllerConfig, RecordingSink, ResultComposer, SearchController,
//!     SubstringMatcher, ViewKind,
//! };
//! use docsight::testing::sample_catalog;
//! use std::time::Duration;
//!
//! let mut search = SearchController::new(
//!     Corpus::new(sample_catalog()),
//!     SubstringMatcher,
//!     ResultComposer::new(4),
//!     RecordingSink::new(),
//!     ControllerConfig::default(),
//! );
//! search.on_input("vector", Duration::ZERO);
//!
//! let view = search.sink().last().unwrap();
//! assert_eq!(view.kind, ViewKind::Results);
//! assert_eq!(view.total, 2);
//! ```

pub mod compose;
pub mod config;
pub mod controller;
pub mod corpus;
mod debounce;
pub mod error;
pub mod fuzzy;
pub mod matching;
pub mod navigation;
pub mod render;
mod types;
mod utils;
pub mod viewport;

#[cfg(feature = "wasm")]
mod runtime;

pub mod testing;

pub use compose::{Group, ResultComposer, ViewKind, ViewModel};
pub use config::{CatalogConfig, HelpConfig, PageIndexConfig, SearchConfig, TrackerConfig};
pub use controller::{ControllerConfig, InputOutcome, SearchController};
pub use corpus::{
    BytesSource, Corpus, CorpusEntry, CorpusSource, CorpusStore, FileSource, LoadStatus,
};
pub use debounce::Debouncer;
pub use error::{ConfigError, LoadError};
pub use fuzzy::{normalized_distance, substring_distance};
pub use matching::{FuzzyConfig, FuzzyMatcher, Match, MatchStrategy, SubstringMatcher};
pub use navigation::{deep_link, search_param, HelpCooldown, SiteLocation, SEARCH_PARAM};
pub use render::{
    escape_attr, escape_html, HtmlCatalogSink, HtmlPageSink, HtmlRenderer, RecordedView,
    RecordingSink, RecordingToc, RenderText, ResultSink, TocSink,
};
pub use types::{Grouped, Heading, PageDoc, Pin, PinDirection, Record, Searchable};
pub use utils::{fold, fold_case, trimmed_query};
pub use viewport::{FrameSampler, HeadingLayout, ScrollOffset, ViewportTracker};
