// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate term lookup: the fuzzy prefix index.
//!
//! Exact-match retrieval punishes typists. The prefix trie here tolerates
//! small spelling and length deviations by walking back up the matched
//! prefix path, widening the candidate pool at an increasing penalty.

mod trie;

pub use trie::{Candidate, PrefixTrie, ERASE_LIMIT};
