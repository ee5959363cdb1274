// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! This is the browser-facing API. The page script owns the DOM, the fetch and
//! the clock; these wrappers own everything else. Each surface takes a render
//! callback and calls it with ready-made markup whenever the view changes.
//!
//! # Catalog search
//!
//! ```js
//! const body = await fetch("assets/nodes.json").then(r => r.ok ? r.text() : "");
//! const search = new NodeSearch(body, undefined, location.pathname, ({ list, cards }) => {
//!     listEl.innerHTML = list;
//!     cardsEl.innerHTML = cards;
//! });
//! search.seed(location.search);
//! input.addEventListener("input", () => {
//!     search.input(input.value, performance.now());
//!     const due = search.nextDeadlineMs();
//!     if (due !== undefined) setTimeout(() => search.tick(performance.now()), due - performance.now());
//! });
//! ```
//!
//! A failed fetch is passed as an empty body: the surface comes up empty and
//! every query shows the no-results state.
//!
//! # Table of contents
//!
//! ```js
//! const toc = new TocTracker(ids, offsets, undefined, (id) => highlight(id));
//! addEventListener("scroll", () => {
//!     if (toc.onScroll()) requestAnimationFrame(() => toc.onFrame(measureTops()));
//! });
//! ```

use crate::compose::ResultComposer;
use crate::config::SearchConfig;
use crate::controller::{InputOutcome, SearchController};
use crate::corpus::{BytesSource, CorpusStore};
use crate::matching::{FuzzyMatcher, SubstringMatcher};
use crate::navigation::{search_param, HelpCooldown, SiteLocation};
use crate::render::{HtmlCatalogSink, HtmlPageSink, HtmlRenderer, RenderText, TocSink};
use crate::types::{Heading, PageDoc, Record};
use crate::utils::millis;
use crate::viewport::ViewportTracker;
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Catalog markup for JavaScript consumption.
#[derive(Serialize)]
struct JsCatalogMarkup<'a> {
    list: &'a str,
    cards: &'a str,
}

/// Page-search markup for JavaScript consumption.
#[derive(Serialize)]
struct JsPageMarkup<'a> {
    links: &'a str,
    visible: bool,
}

fn as_millis(at: Duration) -> f64 {
    at.as_secs_f64() * 1000.0
}

/// Parse an optional config object, using defaults if undefined/null.
fn parse_config(config: JsValue) -> Result<SearchConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SearchConfig::default());
    }
    let config: SearchConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

fn renderer(location_path: &str) -> HtmlRenderer {
    HtmlRenderer::new(RenderText::default(), SiteLocation::new(location_path))
}

// ============================================================================
// CATALOG
// ============================================================================

/// Debounced, grouped substring search over the node catalog.
#[wasm_bindgen]
pub struct NodeSearch {
    controller: SearchController<Record, SubstringMatcher, HtmlCatalogSink>,
    on_render: Function,
}

#[wasm_bindgen]
impl NodeSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(
        corpus_json: &str,
        config: JsValue,
        location_path: &str,
        on_render: Function,
    ) -> Result<NodeSearch, JsValue> {
        let config = parse_config(config)?;
        let store =
            CorpusStore::<Record>::load_or_empty(&BytesSource::new("nodes.json", corpus_json));
        let controller = SearchController::new(
            store.corpus(),
            SubstringMatcher,
            ResultComposer::new(config.catalog.max_shown),
            HtmlCatalogSink::new(renderer(location_path)),
            config.catalog.controller(),
        );
        Ok(NodeSearch {
            controller,
            on_render,
        })
    }

    /// Number of records loaded.
    #[wasm_bindgen(js_name = "recordCount")]
    pub fn record_count(&self) -> usize {
        self.controller.corpus().len()
    }

    /// The search field changed.
    pub fn input(&mut self, value: &str, now_ms: f64) -> Result<(), JsValue> {
        match self.controller.on_input(value, millis(now_ms)) {
            InputOutcome::Scheduled => Ok(()),
            InputOutcome::Idle | InputOutcome::Executed { .. } => self.emit(),
        }
    }

    /// Run the pending query if it is due. Returns whether it ran.
    pub fn tick(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        if !self.controller.tick(millis(now_ms)) {
            return Ok(false);
        }
        self.emit()?;
        Ok(true)
    }

    /// When `tick` next has work, in the same clock as `now_ms`.
    #[wasm_bindgen(js_name = "nextDeadlineMs")]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.controller.next_deadline().map(as_millis)
    }

    /// Seed from the page's query string (`location.search`).
    ///
    /// Returns the decoded query so the page can prefill the input.
    pub fn seed(&mut self, query_string: &str) -> Result<Option<String>, JsValue> {
        let query = search_param(query_string);
        if self.controller.seed(query.as_deref()) {
            self.emit()?;
        }
        Ok(query)
    }

    /// Render the idle state (initial paint without a seed).
    pub fn idle(&mut self) -> Result<(), JsValue> {
        self.controller.on_input("", Duration::ZERO);
        self.emit()
    }

    fn emit(&self) -> Result<(), JsValue> {
        let markup = self.controller.sink().markup();
        let js = to_value(&JsCatalogMarkup {
            list: &markup.list,
            cards: &markup.cards,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.on_render.call1(&JsValue::NULL, &js)?;
        Ok(())
    }
}

// ============================================================================
// PAGE INDEX
// ============================================================================

/// Fuzzy, ranked search over the documentation page index.
#[wasm_bindgen]
pub struct PageSearch {
    controller: SearchController<PageDoc, FuzzyMatcher, HtmlPageSink>,
    on_render: Function,
}

#[wasm_bindgen]
impl PageSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(
        index_json: &str,
        config: JsValue,
        location_path: &str,
        on_render: Function,
    ) -> Result<PageSearch, JsValue> {
        let config = parse_config(config)?;
        let store = CorpusStore::<PageDoc>::load_or_empty(&BytesSource::new(
            "search_index.json",
            index_json,
        ));
        let controller = SearchController::new(
            store.corpus(),
            FuzzyMatcher::new(config.page_index.fuzzy()),
            // The page dropdown shows everything the matcher returns
            ResultComposer::new(config.page_index.limit),
            HtmlPageSink::new(renderer(location_path)),
            config.page_index.controller(),
        );
        Ok(PageSearch {
            controller,
            on_render,
        })
    }

    #[wasm_bindgen(js_name = "pageCount")]
    pub fn page_count(&self) -> usize {
        self.controller.corpus().len()
    }

    pub fn input(&mut self, value: &str, now_ms: f64) -> Result<(), JsValue> {
        match self.controller.on_input(value, millis(now_ms)) {
            InputOutcome::Scheduled => Ok(()),
            InputOutcome::Idle | InputOutcome::Executed { .. } => self.emit(),
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        if !self.controller.tick(millis(now_ms)) {
            return Ok(false);
        }
        self.emit()?;
        Ok(true)
    }

    #[wasm_bindgen(js_name = "nextDeadlineMs")]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.controller.next_deadline().map(as_millis)
    }

    fn emit(&self) -> Result<(), JsValue> {
        let markup = self.controller.sink().markup();
        let js = to_value(&JsPageMarkup {
            links: &markup.links,
            visible: markup.visible,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.on_render.call1(&JsValue::NULL, &js)?;
        Ok(())
    }
}

// ============================================================================
// TABLE OF CONTENTS
// ============================================================================

/// Forwards activations to a JS callback, keeping the first failure.
struct JsToc<'a> {
    callback: &'a Function,
    error: Option<JsValue>,
}

impl TocSink for JsToc<'_> {
    fn activate(&mut self, active: Option<&str>) {
        let id = active.map(JsValue::from_str).unwrap_or(JsValue::NULL);
        if let Err(e) = self.callback.call1(&JsValue::NULL, &id) {
            self.error.get_or_insert(e);
        }
    }
}

#[wasm_bindgen]
pub struct TocTracker {
    tracker: ViewportTracker,
    on_activate: Function,
}

#[wasm_bindgen]
impl TocTracker {
    /// `ids` and `offsets` are index-aligned, in document order.
    #[wasm_bindgen(constructor)]
    pub fn new(
        ids: Vec<String>,
        offsets: Vec<f64>,
        activation_offset: Option<f64>,
        on_activate: Function,
    ) -> Result<TocTracker, JsValue> {
        if ids.len() != offsets.len() {
            return Err(JsValue::from_str(&format!(
                "{} heading ids but {} offsets",
                ids.len(),
                offsets.len()
            )));
        }
        let mut tracker = match activation_offset {
            Some(offset) => ViewportTracker::new(offset),
            None => ViewportTracker::default(),
        };
        tracker.attach(
            ids.into_iter()
                .zip(offsets)
                .map(|(id, offset)| Heading::new(id, offset))
                .collect(),
        );
        Ok(TocTracker {
            tracker,
            on_activate,
        })
    }

    /// Currently active heading id.
    pub fn active(&self) -> Option<String> {
        self.tracker.active().map(str::to_string)
    }

    /// Scroll event. Returns `true` when the page should request an animation frame.
    #[wasm_bindgen(js_name = "onScroll")]
    pub fn on_scroll(&mut self) -> bool {
        self.tracker.on_scroll()
    }

    /// Animation frame with freshly measured heading tops.
    #[wasm_bindgen(js_name = "onFrame")]
    pub fn on_frame(&mut self, tops: &[f64]) -> Result<bool, JsValue> {
        let mut sink = JsToc {
            callback: &self.on_activate,
            error: None,
        };
        let ran = self.tracker.on_frame(tops, &mut sink);
        match sink.error {
            Some(e) => Err(e),
            None => Ok(ran),
        }
    }

    /// Recompute outside the scroll cycle (initial paint, resize).
    pub fn recompute(&mut self, tops: &[f64]) -> Result<(), JsValue> {
        let active = self.tracker.recompute(tops).map(str::to_string);
        let mut sink = JsToc {
            callback: &self.on_activate,
            error: None,
        };
        sink.activate(active.as_deref());
        sink.error.map_or(Ok(()), Err)
    }

    /// Unbind from the document.
    pub fn detach(&mut self) {
        self.tracker.detach();
    }
}

// ============================================================================
// HELP LINKS
// ============================================================================

/// Throttled deep links from the editor's help command into the catalog.
#[wasm_bindgen]
pub struct HelpLinks {
    cooldown: HelpCooldown,
}

#[wasm_bindgen]
impl HelpLinks {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<HelpLinks, JsValue> {
        let config = parse_config(config)?;
        Ok(HelpLinks {
            cooldown: HelpCooldown::new(config.help.cooldown()),
        })
    }

    /// The link to open, or `undefined` while `query` is cooling down.
    pub fn open(&mut self, base: &str, query: &str, now_ms: f64) -> Option<String> {
        self.cooldown.link(base, query, millis(now_ms)).ok()
    }
}
