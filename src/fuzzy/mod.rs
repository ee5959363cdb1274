// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Page titles and bodies are short enough that a plain DP per candidate is
//! cheaper than building any index, so there is only the one algorithm here.

mod distance;

pub use distance::*;
