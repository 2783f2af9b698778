// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy TF-IDF document ranking with per-document prefix tries.
//!
//! Feed a corpus of short text documents, then rank them against free-text
//! queries by cosine similarity over TF-IDF vectors. Query terms tolerate
//! small spelling and length deviations (up to [`ERASE_LIMIT`]) through an
//! approximate prefix index built per document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐
//! │ vector::    │────▶│  corpus.rs    │────▶│  engine.rs  │
//! │ TermWeight, │     │ (feed,        │     │  (search)   │
//! │  DocVector  │     │  compute_idf) │     │             │
//! └─────────────┘     └───────────────┘     └─────────────┘
//!        │                    ▲
//!        ▼                    │
//! ┌─────────────┐     ┌───────────────┐
//! │ fuzzy::     │     │ corpus::      │
//! │ PrefixTrie  │     │ source        │
//! └─────────────┘     └───────────────┘
//! ```
//!
//! The corpus is built in two passes: a frequency pass that tokenizes
//! documents and fills the document-frequency map, and an IDF pass that
//! turns corpus-wide statistics into per-term weights and builds each
//! document's prefix trie. Searches never write anything - the whole
//! structure is read-only once built.
//!
//! # Usage
//!
//! ```
//! use trawl::{MemorySource, SearchEngine};
//!
//! let engine = SearchEngine::from_source(MemorySource::new([
//!     ("notes/pets.txt", "cat dog cat"),
//!     ("notes/birds.txt", "dog bird"),
//! ]));
//!
//! let hits = engine.search("cat");
//! assert_eq!(hits[0].doc_id, 0);
//! ```

pub mod corpus;
pub mod engine;
pub mod fuzzy;
pub mod util;
pub mod vector;

// Re-exports for public API
pub use corpus::{Corpus, DirSource, DocFrequency, DocumentSource, MemorySource, SourceRecord};
pub use engine::{SearchEngine, SearchHit};
pub use fuzzy::{Candidate, PrefixTrie, ERASE_LIMIT};
pub use util::normalize;
pub use vector::{DocVector, TermWeight};
