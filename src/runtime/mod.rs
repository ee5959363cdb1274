// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The WASM module is what runs on the site. Everything it wraps is plain Rust
//! and is tested natively; this layer only converts values and calls back into
//! JavaScript.

#[cfg(feature = "wasm")]
pub mod wasm;
