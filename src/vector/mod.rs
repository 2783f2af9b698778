// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vector model: per-term weights and per-document vectors.
//!
//! A document is a sparse vector with one axis per distinct normalized term.
//! Weights are built in two phases: term frequencies at tokenization time,
//! inverse document frequencies once the whole corpus has been fed.

mod document;
mod term;

pub use document::DocVector;
pub use term::TermWeight;
