//! End-to-end rendering: corpus JSON through the controller into HTML.

use super::common::{make_full_record, make_page, ms, NODES_JSON, PAGES_JSON};
use docsight::{
    escape_html, BytesSource, ControllerConfig, Corpus, CorpusStore, FuzzyMatcher,
    HtmlCatalogSink, HtmlPageSink, HtmlRenderer, PageDoc, Record, RenderText, ResultComposer,
    SearchController, SiteLocation, SubstringMatcher,
};

fn catalog(path: &str) -> SearchController<Record, SubstringMatcher, HtmlCatalogSink> {
    let corpus = CorpusStore::<Record>::load(&BytesSource::new("nodes.json", NODES_JSON)).unwrap();
    SearchController::new(
        corpus,
        SubstringMatcher,
        ResultComposer::new(4),
        HtmlCatalogSink::new(HtmlRenderer::new(
            RenderText::default(),
            SiteLocation::new(path),
        )),
        ControllerConfig::default(),
    )
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[test]
fn code_snippet_renders_as_literal_text() {
    let snippet = "<div>&amp;</div>";
    let escaped = escape_html(snippet);
    assert!(!escaped.contains('<'));
    assert_eq!(escaped, "&lt;div&gt;&amp;amp;&lt;/div&gt;");
    assert_eq!(unescape(&escaped), snippet);
}

#[test]
fn card_escapes_code_from_the_catalog() {
    let mut search = catalog("/pages/references.html");
    search.on_input("print", ms(0));

    let cards = &search.sink().markup().cards;
    assert!(cards.contains("print(\"&lt;b&gt;\" &amp; value)"));
    assert!(!cards.contains("<b>"));
}

#[test]
fn card_lists_every_record_section() {
    let record = make_full_record("Set Timer", "Time", "Starts a <timer>");
    let card = HtmlRenderer::default().card(&record);

    assert!(card.starts_with("<div class=\"node-card\" id=\"Set Timer\">"));
    assert!(card.contains("<small>set_timer.py</small>"));
    assert!(card.contains("<p>Starts a &lt;timer&gt;</p>"));
    assert!(card.contains("<strong>IN</strong> - In <code>(exec)</code>"));
    assert!(card.contains("<strong>OUT</strong> - Out <code>(exec)</code>"));
    assert!(card.contains("<li><code>property0</code></li>"));
    assert!(card.contains("<pre class=\"language-python\"><code>def set_timer():\n    pass</code></pre>"));
}

#[test]
fn catalog_groups_and_cards() {
    let mut search = catalog("/pages/references.html");
    search.on_input("add", ms(0));

    let markup = search.sink().markup();
    assert!(markup.list.contains("<div class=\"category-header\">Operators</div>"));
    assert!(markup.list.contains("<div class=\"category-header\">Math</div>"));
    assert!(markup.list.find("Operators") < markup.list.find("Math"));
    assert!(markup.cards.contains("id=\"Vector Add\""));
    assert!(markup.cards.contains("<strong>IN</strong> - A <code>(float)</code>"));
    assert!(markup.cards.contains("<strong>OUT</strong> - Result"));
}

#[test]
fn idle_and_no_results_states_differ() {
    let mut search = catalog("/pages/references.html");
    search.on_input("", ms(0));
    let idle = search.sink().markup().cards.clone();
    assert!(idle.contains(&RenderText::default().idle_message));
    assert!(idle.contains("../assets/images/sleep.gif"));

    search.on_input("nothing like this", ms(1));
    let none = &search.sink().markup().cards;
    assert!(none.contains(&RenderText::default().no_results_message));
    assert_ne!(&idle, none);
}

#[test]
fn remaining_notice_appears_past_the_cap() {
    let corpus = Corpus::new(
        (0..6)
            .map(|i| Record {
                name: format!("Node {}", i),
                category: "Misc".to_string(),
                ..Record::default()
            })
            .collect(),
    );
    let mut search = SearchController::new(
        corpus,
        SubstringMatcher,
        ResultComposer::new(4),
        HtmlCatalogSink::default(),
        ControllerConfig::default(),
    );
    search.on_input("node", ms(0));
    let markup = search.sink().markup();
    assert!(markup.list.contains("2 more node(s) not shown."));
    assert!(markup.cards.contains("2 more result(s) not shown."));
    assert_eq!(markup.cards.matches("class=\"node-card\"").count(), 4);
}

#[test]
fn page_links_resolve_against_location() {
    let corpus =
        CorpusStore::<PageDoc>::load(&BytesSource::new("search_index.json", PAGES_JSON)).unwrap();
    let renderer = |path: &str| {
        HtmlPageSink::new(HtmlRenderer::new(
            RenderText::default(),
            SiteLocation::new(path),
        ))
    };

    let mut from_root = SearchController::new(
        corpus.clone(),
        FuzzyMatcher::default(),
        ResultComposer::new(10),
        renderer("/"),
        ControllerConfig::default(),
    );
    from_root.on_input("audio", ms(0));
    assert!(from_root.sink().markup().visible);
    assert!(from_root
        .sink()
        .markup()
        .links
        .contains("href=\"./pages/audio.html\""));

    let mut from_page = SearchController::new(
        corpus,
        FuzzyMatcher::default(),
        ResultComposer::new(10),
        renderer("/pages/physics.html"),
        ControllerConfig::default(),
    );
    from_page.on_input("audio", ms(0));
    assert!(from_page
        .sink()
        .markup()
        .links
        .contains("href=\"audio.html\""));

    from_page.on_input("", ms(1));
    assert!(!from_page.sink().markup().visible);
}

#[test]
fn page_titles_are_escaped() {
    let mut search = SearchController::new(
        Corpus::new(vec![make_page("Tips & <Tricks>", "", "tips.html")]),
        FuzzyMatcher::default(),
        ResultComposer::new(10),
        HtmlPageSink::default(),
        ControllerConfig::default(),
    );
    search.on_input("tips", ms(0));
    assert!(search
        .sink()
        .markup()
        .links
        .contains(">Tips &amp; &lt;Tricks&gt;</a>"));
}
