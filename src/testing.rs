// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Heading, PageDoc, Pin, PinDirection, Record};

/// A catalog record with just the searchable fields filled in.
pub fn make_record(name: &str, category: &str, description: &str) -> Record {
    Record {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        ..Record::default()
    }
}

/// A fully populated record, pins and code included.
pub fn make_full_record(name: &str, category: &str, description: &str) -> Record {
    Record {
        source: format!("{}.py", name.to_lowercase().replace(' ', "_")),
        pins: vec![
            Pin {
                direction: PinDirection::In,
                label: "In".to_string(),
                pin_type: "exec".to_string(),
            },
            Pin {
                direction: PinDirection::Out,
                label: "Out".to_string(),
                pin_type: "exec".to_string(),
            },
        ],
        properties: vec!["property0".to_string()],
        code: format!("def {}():\n    pass", name.to_lowercase().replace(' ', "_")),
        ..make_record(name, category, description)
    }
}

pub fn make_page(title: &str, content: &str, url: &str) -> PageDoc {
    PageDoc {
        title: title.to_string(),
        content: content.to_string(),
        url: url.to_string(),
    }
}

/// A small node catalog spanning three categories, in catalog file order.
pub fn sample_catalog() -> Vec<Record> {
    vec![
        make_record("Add", "Operators", "Adds two values"),
        make_record("Subtract", "Operators", "Subtracts the second value"),
        make_record("Print", "Debug", "Writes a value to the console"),
        make_record("Vector Add", "Math", "Adds two vectors"),
        make_record("Vector Length", "Math", "Length of a vector"),
        make_record("Draw Line", "Debug", "Draws a debug line"),
    ]
}

/// A small documentation page index.
pub fn sample_pages() -> Vec<PageDoc> {
    vec![
        make_page("Getting Started", "Install the add-on and open a scene", "getting_started.html"),
        make_page("Physics", "Rigid bodies, raycasts and collision", "physics.html"),
        make_page("Audio", "Play sounds and music", "audio.html"),
        make_page("References", "Every logic node", "references.html"),
    ]
}

/// Headings at evenly spaced document offsets.
pub fn make_headings(ids: &[&str], spacing: f64) -> Vec<Heading> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| Heading::new(*id, i as f64 * spacing))
        .collect()
}
