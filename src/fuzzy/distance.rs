// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring distance.
//!
//! This is edit distance with a free start and a free end in the text: the
//! cheapest way to turn the pattern into *some* substring of the text
//! (Sellers, 1980). Where the best substring sits does not change the
//! distance, which is exactly the location-agnostic behaviour the page
//! search wants.
//!
//! One column of the DP table is kept, indexed by pattern position, and swept
//! across the text. Row 0 is pinned at zero, so a match may begin anywhere.

/// Smallest edit distance between `pattern` and any substring of `text`,
/// or `None` if that distance exceeds `max`.
///
/// Works on characters, not bytes. An empty pattern matches anywhere at
/// distance 0.
pub fn substring_distance(pattern: &str, text: &str, max: usize) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }

    // col[i] = distance of pattern[..i] against the best suffix ending at the
    // current text position. Before any text: i deletions.
    let mut col: Vec<usize> = (0..=m).collect();
    let mut best = col[m];

    for tc in text.chars() {
        let mut diag = col[0];
        col[0] = 0;
        for i in 1..=m {
            let left = col[i];
            let cost = usize::from(pattern[i - 1] != tc);
            col[i] = (col[i - 1] + 1).min(left + 1).min(diag + cost);
            diag = left;
        }
        best = best.min(col[m]);

        // Early exit: an exact occurrence cannot be beaten
        if best == 0 {
            break;
        }
    }

    (best <= max).then_some(best)
}

/// `substring_distance` scaled by pattern length into `0.0..=1.0`.
///
/// 0.0 means the pattern occurs verbatim; 1.0 means nothing of it survives.
/// An empty pattern scores 0.0.
pub fn normalized_distance(pattern: &str, text: &str) -> f64 {
    let m = pattern.chars().count();
    if m == 0 {
        return 0.0;
    }
    let distance = substring_distance(pattern, text, m).unwrap_or(m);
    distance as f64 / m as f64
}
