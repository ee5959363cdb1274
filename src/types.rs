// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a documentation site searches over.
//!
//! Two corpora exist side by side: the node catalog (`Record`, one entry per
//! editor node with its pins, properties and a code snippet) and the page index
//! (`PageDoc`, one entry per documentation page). Both deserialize straight
//! from the JSON files the site generator writes.
//!
//! # Invariants
//!
//! - **Record**: `name` is unique within a catalog and doubles as the card's
//!   anchor id. `pins` and `properties` are in display order and are never
//!   reordered.
//! - **PageDoc**: `url` is distinct per page.
//! - **Heading**: headings are in document order; `offset` grows monotonically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a node pin.
///
/// The catalog only ever uses `in` and `out`, but older generators emitted
/// other directions (`inout`, `exec`), so unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    In,
    Out,
    #[serde(untagged)]
    Other(String),
}

impl PinDirection {
    /// Label shown on cards: the direction in upper case.
    pub fn label(&self) -> String {
        match self {
            PinDirection::In => "IN".to_string(),
            PinDirection::Out => "OUT".to_string(),
            PinDirection::Other(raw) => raw.to_uppercase(),
        }
    }
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A single input or output slot on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub direction: PinDirection,
    pub label: String,
    #[serde(rename = "type")]
    pub pin_type: String,
}

/// A node-catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique display key, also the anchor id of the node's card.
    pub name: String,
    /// Grouping key for result lists.
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Where the node is implemented (module or blueprint file).
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(default)]
    pub properties: Vec<String>,
    /// Raw source snippet. Must be escaped before display.
    #[serde(default)]
    pub code: String,
}

/// A page-index entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDoc {
    pub title: String,
    /// Searchable body text.
    #[serde(default)]
    pub content: String,
    /// Navigation target, relative to the pages directory.
    pub url: String,
}

/// A heading in the document being read, with its offset from the document top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub id: String,
    pub offset: f64,
}

impl Heading {
    pub fn new(id: impl Into<String>, offset: f64) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }
}

/// Fields consulted by the match strategies.
///
/// `primary` is the short, name-like field; `secondary` is the longer body.
pub trait Searchable {
    fn primary(&self) -> &str;
    fn secondary(&self) -> &str;
}

impl Searchable for Record {
    fn primary(&self) -> &str {
        &self.name
    }

    fn secondary(&self) -> &str {
        &self.description
    }
}

impl Searchable for PageDoc {
    fn primary(&self) -> &str {
        &self.title
    }

    fn secondary(&self) -> &str {
        &self.content
    }
}

/// Key used to partition results into groups.
pub trait Grouped {
    fn group_key(&self) -> &str;
}

impl Grouped for Record {
    fn group_key(&self) -> &str {
        &self.category
    }
}

/// Page-index results render as a single flat list.
impl Grouped for PageDoc {
    fn group_key(&self) -> &str {
        ""
    }
}
