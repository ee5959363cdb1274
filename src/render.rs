// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering sinks and the HTML the documentation site shows.
//!
//! The core never touches a page. It hands a `ViewModel` to a `ResultSink`
//! or an active heading id to a `TocSink`, and each update replaces whatever
//! the sink showed before.
//!
//! `HtmlRenderer` produces the site's markup as strings. Every text field
//! that reaches markup goes through `escape_html`, not only the code snippet:
//! node descriptions are authored text and may contain `<` too.

use crate::compose::{ViewKind, ViewModel};
use crate::navigation::SiteLocation;
use crate::types::{PageDoc, Record};
use serde::{Deserialize, Serialize};

/// Receives every recomputed search view.
pub trait ResultSink<T> {
    fn replace(&mut self, view: &ViewModel<'_, T>);
}

/// Receives the active table-of-contents entry after each recomputation.
pub trait TocSink {
    fn activate(&mut self, active: Option<&str>);
}

impl<T, S: ResultSink<T> + ?Sized> ResultSink<T> for &mut S {
    fn replace(&mut self, view: &ViewModel<'_, T>) {
        (**self).replace(view);
    }
}

impl<S: TocSink + ?Sized> TocSink for &mut S {
    fn activate(&mut self, active: Option<&str>) {
        (**self).activate(active);
    }
}

// ============================================================================
// ESCAPING
// ============================================================================

fn escape(text: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\'' if attribute => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text content so `&`, `<` and `>` display literally.
pub fn escape_html(text: &str) -> String {
    escape(text, false)
}

/// Escape an attribute value (also quotes).
pub fn escape_attr(text: &str) -> String {
    escape(text, true)
}

// ============================================================================
// RECORDING SINKS
// ============================================================================

/// Owned copy of a view model: categories and corpus positions only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedView {
    pub kind: ViewKind,
    pub groups: Vec<(String, Vec<usize>)>,
    pub remaining: usize,
    pub total: usize,
}

impl RecordedView {
    pub fn from_view<T>(view: &ViewModel<'_, T>) -> Self {
        Self {
            kind: view.kind,
            groups: view
                .groups
                .iter()
                .map(|g| {
                    (
                        g.category.to_string(),
                        g.matches.iter().map(|m| m.position).collect(),
                    )
                })
                .collect(),
            remaining: view.remaining,
            total: view.total,
        }
    }

    /// Corpus positions of the shown matches, in display order.
    pub fn positions(&self) -> Vec<usize> {
        self.groups
            .iter()
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect()
    }
}

/// Sink that remembers every update. Useful for tests and headless embedding.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub updates: Vec<RecordedView>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&RecordedView> {
        self.updates.last()
    }
}

impl<T> ResultSink<T> for RecordingSink {
    fn replace(&mut self, view: &ViewModel<'_, T>) {
        self.updates.push(RecordedView::from_view(view));
    }
}

/// TOC sink that remembers every activation.
#[derive(Debug, Clone, Default)]
pub struct RecordingToc {
    pub activations: Vec<Option<String>>,
}

impl RecordingToc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.activations.last().and_then(|a| a.as_deref())
    }
}

impl TocSink for RecordingToc {
    fn activate(&mut self, active: Option<&str>) {
        self.activations.push(active.map(str::to_string));
    }
}

// ============================================================================
// HTML
// ============================================================================

/// User-visible strings. `{count}` is replaced in the remaining-count notices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderText {
    pub idle_message: String,
    pub no_results_message: String,
    pub list_remaining: String,
    pub cards_remaining: String,
    /// Image shown in empty states, relative to the assets directory.
    pub empty_image: Option<String>,
    pub pins_heading: String,
    pub properties_heading: String,
    pub code_heading: String,
    pub code_language: String,
}

impl Default for RenderText {
    fn default() -> Self {
        Self {
            idle_message: "Start searching to see nodes".to_string(),
            no_results_message: "No results found.".to_string(),
            list_remaining: "{count} more node(s) not shown.".to_string(),
            cards_remaining: "{count} more result(s) not shown.".to_string(),
            empty_image: Some("images/sleep.gif".to_string()),
            pins_heading: "Pins".to_string(),
            properties_heading: "Properties".to_string(),
            code_heading: "Code snippet".to_string(),
            code_language: "python".to_string(),
        }
    }
}

/// Markup for the catalog page: the side list and the card column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogMarkup {
    pub list: String,
    pub cards: String,
}

/// Markup for the page-search dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMarkup {
    pub links: String,
    /// Whether the dropdown should be shown at all.
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    text: RenderText,
    location: SiteLocation,
}

impl HtmlRenderer {
    pub fn new(text: RenderText, location: SiteLocation) -> Self {
        Self { text, location }
    }

    pub fn text(&self) -> &RenderText {
        &self.text
    }

    pub fn catalog(&self, view: &ViewModel<'_, Record>) -> CatalogMarkup {
        match view.kind {
            ViewKind::Idle => CatalogMarkup {
                list: String::new(),
                cards: self.empty_state(&self.text.idle_message),
            },
            ViewKind::NoMatches => CatalogMarkup {
                list: String::new(),
                cards: self.empty_state(&self.text.no_results_message),
            },
            ViewKind::Results => {
                let mut markup = CatalogMarkup::default();
                for group in &view.groups {
                    markup.list.push_str("<div class=\"category-group\">");
                    markup.list.push_str(&format!(
                        "<div class=\"category-header\">{}</div><ul>",
                        escape_html(group.category)
                    ));
                    for m in &group.matches {
                        markup.list.push_str(&format!(
                            "<li><a href=\"#{}\">{}</a></li>",
                            escape_attr(&m.item.name),
                            escape_html(&m.item.name)
                        ));
                        markup.cards.push_str(&self.card(m.item));
                    }
                    markup.list.push_str("</ul></div>");
                }
                if view.remaining > 0 {
                    markup.list.push_str(&format!(
                        "<li class=\"more-results\">{}</li>",
                        escape_html(&fill_count(&self.text.list_remaining, view.remaining))
                    ));
                    markup.cards.push_str(&format!(
                        "<p class=\"empty-state more-results\">{}</p>",
                        escape_html(&fill_count(&self.text.cards_remaining, view.remaining))
                    ));
                }
                markup
            }
        }
    }

    /// One node card.
    pub fn card(&self, record: &Record) -> String {
        let mut html = format!(
            "<div class=\"node-card\" id=\"{}\">",
            escape_attr(&record.name)
        );
        html.push_str(&format!("<h2>{}</h2>", escape_html(&record.name)));
        html.push_str(&format!(
            "<div class=\"node-meta\"><em>{}</em> &middot; <small>{}</small></div>",
            escape_html(&record.category),
            escape_html(&record.source)
        ));
        html.push_str(&format!("<p>{}</p>", escape_html(&record.description)));

        html.push_str(&format!("<h3>{}</h3><ul>", escape_html(&self.text.pins_heading)));
        for pin in &record.pins {
            html.push_str(&format!(
                "<li><strong>{}</strong> - {} <code>({})</code></li>",
                escape_html(&pin.direction.label()),
                escape_html(&pin.label),
                escape_html(&pin.pin_type)
            ));
        }
        html.push_str("</ul>");

        html.push_str(&format!(
            "<h3>{}</h3><ul>",
            escape_html(&self.text.properties_heading)
        ));
        for property in &record.properties {
            html.push_str(&format!("<li><code>{}</code></li>", escape_html(property)));
        }
        html.push_str("</ul>");

        html.push_str(&format!(
            "<h3>{}</h3><pre class=\"language-{}\"><code>{}</code></pre>",
            escape_html(&self.text.code_heading),
            escape_attr(&self.text.code_language),
            escape_html(&record.code)
        ));
        html.push_str("</div>");
        html
    }

    pub fn pages(&self, view: &ViewModel<'_, PageDoc>) -> PageMarkup {
        let links: String = view
            .iter()
            .map(|m| {
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape_attr(&self.location.page_href(&m.item.url)),
                    escape_html(&m.item.title)
                )
            })
            .collect();
        PageMarkup {
            links,
            visible: !view.is_empty(),
        }
    }

    fn empty_state(&self, message: &str) -> String {
        let image = self
            .text
            .empty_image
            .as_deref()
            .map(|path| {
                format!(
                    "<img src=\"{}\" alt=\"{}\"/>",
                    escape_attr(&self.location.asset(path)),
                    escape_attr(message)
                )
            })
            .unwrap_or_default();
        format!(
            "<div class=\"empty-state\">{}<p>{}</p></div>",
            image,
            escape_html(message)
        )
    }
}

fn fill_count(template: &str, count: usize) -> String {
    template.replace("{count}", &count.to_string())
}

/// Catalog sink that keeps the latest markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlCatalogSink {
    renderer: HtmlRenderer,
    markup: CatalogMarkup,
}

impl HtmlCatalogSink {
    pub fn new(renderer: HtmlRenderer) -> Self {
        Self {
            renderer,
            markup: CatalogMarkup::default(),
        }
    }

    pub fn markup(&self) -> &CatalogMarkup {
        &self.markup
    }
}

impl ResultSink<Record> for HtmlCatalogSink {
    fn replace(&mut self, view: &ViewModel<'_, Record>) {
        self.markup = self.renderer.catalog(view);
    }
}

/// Page-search sink that keeps the latest markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlPageSink {
    renderer: HtmlRenderer,
    markup: PageMarkup,
}

impl HtmlPageSink {
    pub fn new(renderer: HtmlRenderer) -> Self {
        Self {
            renderer,
            markup: PageMarkup::default(),
        }
    }

    pub fn markup(&self) -> &PageMarkup {
        &self.markup
    }
}

impl ResultSink<PageDoc> for HtmlPageSink {
    fn replace(&mut self, view: &ViewModel<'_, PageDoc>) {
        self.markup = self.renderer.pages(view);
    }
}
