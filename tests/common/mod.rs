//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsight::{
    ControllerConfig, Corpus, FuzzyConfig, FuzzyMatcher, PageDoc, Record, RecordingSink,
    ResultComposer, SearchController, SubstringMatcher,
};
use std::time::Duration;

// Re-export canonical test utilities from docsight::testing
pub use docsight::testing::{
    make_full_record, make_headings, make_page, make_record, sample_catalog, sample_pages,
};

/// Catalog debounce used throughout the tests.
pub const CATALOG_DEBOUNCE: Duration = Duration::from_millis(100);

/// A node catalog as the site generator writes it.
pub const NODES_JSON: &str = r#"[
    {
        "name": "Add",
        "category": "Operators",
        "description": "Adds two values",
        "source": "operators.py",
        "pins": [
            {"direction": "in", "label": "A", "type": "float"},
            {"direction": "in", "label": "B", "type": "float"},
            {"direction": "out", "label": "Result", "type": "float"}
        ],
        "properties": ["clamp"],
        "code": "def add(a, b):\n    return a + b"
    },
    {
        "name": "Print",
        "category": "Debug",
        "description": "Writes a value to the console",
        "source": "debug.py",
        "pins": [{"direction": "in", "label": "Value", "type": "any"}],
        "properties": [],
        "code": "print(\"<b>\" & value)"
    },
    {
        "name": "Vector Add",
        "category": "Math",
        "description": "Adds two vectors",
        "source": "math.py",
        "pins": [],
        "properties": [],
        "code": ""
    }
]"#;

/// A page index as the site generator writes it.
pub const PAGES_JSON: &str = r#"[
    {"title": "Getting Started", "content": "Install the add-on and open a scene", "url": "getting_started.html"},
    {"title": "Physics", "content": "Rigid bodies, raycasts and collision", "url": "physics.html"},
    {"title": "Audio", "content": "Play sounds and music", "url": "audio.html"}
]"#;

/// Route `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Catalog search with the shipped settings: cap 4, min length 1, 100ms debounce.
pub fn catalog_search(
    records: Vec<Record>,
) -> SearchController<Record, SubstringMatcher, RecordingSink> {
    SearchController::new(
        Corpus::new(records),
        SubstringMatcher,
        ResultComposer::new(4),
        RecordingSink::new(),
        ControllerConfig {
            min_query_len: 1,
            debounce: Some(CATALOG_DEBOUNCE),
        },
    )
}

/// Page search with the shipped settings: threshold 0.3, top 10, not debounced.
pub fn page_search(pages: Vec<PageDoc>) -> SearchController<PageDoc, FuzzyMatcher, RecordingSink> {
    SearchController::new(
        Corpus::new(pages),
        FuzzyMatcher::new(FuzzyConfig::default()),
        ResultComposer::new(10),
        RecordingSink::new(),
        ControllerConfig::default(),
    )
}
