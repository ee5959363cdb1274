// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String and time helpers shared by the matchers, the controller and the
//! browser runtime.

use std::time::Duration;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Case-fold for matching: full Unicode lowercase.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Case-fold and, if asked, strip diacritics:
/// - "Vélocité" → "velocite"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Drop combining marks
/// 3. Lowercase
///
/// Without the feature, diacritic folding is unavailable and this is plain
/// lowercasing.
pub fn fold(value: &str, ignore_diacritics: bool) -> String {
    if ignore_diacritics {
        strip_diacritics(value).to_lowercase()
    } else {
        fold_case(value)
    }
}

#[cfg(feature = "unicode-normalization")]
fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritics(value: &str) -> String {
    value.to_string()
}

/// Trim surrounding whitespace and count what is left, in characters.
pub fn trimmed_query(raw: &str) -> (&str, usize) {
    let trimmed = raw.trim();
    (trimmed, trimmed.chars().count())
}

/// Host milliseconds (`performance.now()`) to a `Duration`.
///
/// NaN and negative values clamp to zero; values too large to represent
/// saturate to `Duration::MAX`.
#[cfg_attr(not(feature = "wasm"), allow(dead_code))]
pub fn millis(now_ms: f64) -> Duration {
    if now_ms.is_nan() || now_ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(now_ms / 1000.0).unwrap_or(Duration::MAX)
}
