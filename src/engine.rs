// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine-similarity search over a fuzzily-indexed corpus.
//!
//! A query becomes a [`DocVector`] through the exact ingestion pipeline,
//! with one crucial difference: its terms are weighted against the frozen
//! corpus statistics and are **never** registered in the document-frequency
//! map. A query must not perturb the corpus, and running the same search
//! twice must produce identical output.
//!
//! Per document, each query term fetches approximate matches from that
//! document's prefix trie; the best penalized TF-IDF among them joins the
//! dot product. The final score is the cosine of the two vectors:
//! `dot / (doc.magnitude * query.magnitude)`.

use std::cmp::Ordering;

use serde::Serialize;

use crate::corpus::{Corpus, DocumentSource};
use crate::vector::DocVector;

/// One ranked result: a document index and its cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    /// Index into [`SearchEngine::documents`].
    pub doc_id: usize,
    /// Cosine similarity against the query vector. Never zero - zero-scoring
    /// documents are dropped, not ranked last.
    pub score: f64,
}

/// An immutable search engine over one corpus.
///
/// Construction runs both corpus passes; afterwards the engine is read-only
/// and every search sees the same state. No singleton - build one and pass
/// it around.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: Corpus,
}

impl SearchEngine {
    /// Feed the source and, if any documents survived, run the IDF pass.
    pub fn from_source(source: impl DocumentSource) -> Self {
        let mut corpus = Corpus::feed(source);
        if corpus.has_data() {
            corpus.compute_idf();
        }
        Self { corpus }
    }

    /// True when the feed produced at least one indexable document.
    pub fn is_ready(&self) -> bool {
        self.corpus.has_data()
    }

    /// Retained documents, in feed order. `SearchHit::doc_id` indexes here.
    pub fn documents(&self) -> &[DocVector] {
        self.corpus.documents()
    }

    /// Document behind a hit, if the index is in range.
    pub fn document(&self, doc_id: usize) -> Option<&DocVector> {
        self.corpus.documents().get(doc_id)
    }

    /// Rank all documents against a free-text query, best first.
    ///
    /// Empty and whitespace-only queries return an empty list, as does a
    /// query with zero similarity against every document. A non-empty list
    /// contains only non-zero scores, sorted descending; equal scores fall
    /// back to ascending document index so output is deterministic.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let mut query_doc = DocVector::from_text("query", query);
        if query_doc.is_empty() {
            return Vec::new();
        }

        // Weight the query against the frozen corpus statistics. The
        // document-frequency map is read, never written.
        query_doc.calc_idf(self.corpus.documents().len(), self.corpus.doc_frequency());
        if query_doc.magnitude() == 0.0 {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = Vec::new();
        for (doc_id, doc) in self.corpus.documents().iter().enumerate() {
            if doc.magnitude() == 0.0 {
                continue;
            }

            let mut dot = 0.0;
            for term in query_doc.terms() {
                let candidates = doc.index().lookup(term.literal());
                // single-term-best-match: only the strongest candidate of
                // each query term contributes
                if let Some(best) = candidates
                    .iter()
                    .map(|candidate| candidate.tf_idf)
                    .reduce(f64::max)
                {
                    dot += term.tf_idf() * best;
                }
            }

            let similarity = dot / (doc.magnitude() * query_doc.magnitude());
            if similarity != 0.0 {
                hits.push(SearchHit {
                    doc_id,
                    score: similarity,
                });
            }
        }

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MemorySource;

    fn engine(pairs: &[(&str, &str)]) -> SearchEngine {
        SearchEngine::from_source(MemorySource::new(pairs.iter().copied()))
    }

    #[test]
    fn test_exact_term_ranks_owning_document_first() {
        let engine = engine(&[("d1", "cat dog cat"), ("d2", "dog bird")]);
        let hits = engine.search("cat");

        assert!(!hits.is_empty());
        assert_eq!(hits[0].doc_id, 0);
        // "cat" shares no usable prefix with "dog" or "bird"
        assert!(hits.iter().all(|hit| hit.doc_id == 0));
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let engine = engine(&[("d1", "cat")]);
        assert!(engine.search("").is_empty());
        assert!(engine.search("   \t ").is_empty());
    }

    #[test]
    fn test_unmatched_query_returns_empty() {
        let engine = engine(&[("d1", "cat dog")]);
        assert!(engine.search("zebra").is_empty());
    }

    #[test]
    fn test_fuzzy_query_scores_below_exact() {
        let engine = engine(&[("d1", "running")]);

        let exact = engine.search("running");
        let fuzzy = engine.search("runing");
        assert_eq!(exact.len(), 1);
        assert_eq!(fuzzy.len(), 1);
        assert!(fuzzy[0].score < exact[0].score);
        assert!(fuzzy[0].score > 0.0);
    }

    #[test]
    fn test_scores_sorted_descending() {
        let engine = engine(&[
            ("d1", "rust rust rust systems"),
            ("d2", "rust once among other words here"),
            ("d3", "unrelated text entirely"),
        ]);
        let hits = engine.search("rust");

        assert_eq!(hits.len(), 2);
        assert!(hits[0].score >= hits[1].score);
        assert_eq!(hits[0].doc_id, 0);
    }

    #[test]
    fn test_equal_scores_tie_break_by_doc_id() {
        // identical documents produce identical similarities
        let engine = engine(&[("d1", "cat"), ("d2", "cat")]);
        let hits = engine.search("cat");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].doc_id, 0);
        assert_eq!(hits[1].doc_id, 1);
        assert!((hits[0].score - hits[1].score).abs() < 1e-12);
    }

    #[test]
    fn test_engine_not_ready_without_documents() {
        let engine = engine(&[("d1", "  "), ("d2", "")]);
        assert!(!engine.is_ready());
        assert!(engine.search("anything").is_empty());
    }

    #[test]
    fn test_search_does_not_mutate_state() {
        let engine = engine(&[("d1", "cat dog"), ("d2", "dog bird")]);

        let before = engine.search("cat dog");
        // interleave queries with corpus-unknown terms
        engine.search("zebra quagga");
        engine.search("");
        let after = engine.search("cat dog");

        assert_eq!(before, after);
    }
}
