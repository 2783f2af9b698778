// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String utilities shared by ingestion and query handling.

pub mod text;

pub use text::{normalize, tokenize, Token};
