// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: every retained document plus corpus-wide term statistics.
//!
//! Built in two passes. The frequency pass ([`Corpus::feed`]) tokenizes each
//! incoming record into a [`DocVector`], discards the ones that tokenize to
//! nothing, and registers every distinct term under its document's index in
//! the document-frequency map. The IDF pass ([`Corpus::compute_idf`]) then
//! walks the retained documents with the finished map, deriving TF-IDF
//! weights, magnitudes and each document's prefix index.
//!
//! After the second pass the corpus is read-only; searches consume it
//! without touching the map. Both passes are document-parallel under the
//! `parallel` feature - tokenization fans out per record and the IDF pass
//! per document, with only the map merge staying sequential.

pub mod source;

use std::collections::{BTreeMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::vector::DocVector;

pub use source::{DirSource, DocumentSource, MemorySource, SourceRecord};

/// `term -> set of document indices containing the term`. The IDF source.
pub type DocFrequency = BTreeMap<String, HashSet<u32>>;

/// All retained documents plus the document-frequency map.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<DocVector>,
    doc_frequency: DocFrequency,
}

impl Corpus {
    /// The frequency pass: tokenize every record, discard empty documents,
    /// register distinct terms in the document-frequency map.
    pub fn feed(source: impl DocumentSource) -> Self {
        let records = source.records();

        #[cfg(feature = "parallel")]
        let vectors: Vec<DocVector> = records
            .into_par_iter()
            .map(|record| DocVector::from_text(record.id, &record.text))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let vectors: Vec<DocVector> = records
            .into_iter()
            .map(|record| DocVector::from_text(record.id, &record.text))
            .collect();

        let mut corpus = Self::default();
        for doc in vectors {
            // IngestionSkip: empty documents are dropped, not reported
            if doc.is_empty() {
                continue;
            }
            let doc_idx = corpus.documents.len() as u32;
            for term in doc.terms() {
                corpus
                    .doc_frequency
                    .entry(term.literal().to_string())
                    .or_default()
                    .insert(doc_idx);
            }
            corpus.documents.push(doc);
        }
        corpus
    }

    /// True when at least one document survived the frequency pass.
    pub fn has_data(&self) -> bool {
        !self.documents.is_empty()
    }

    /// Retained documents, in feed order.
    pub fn documents(&self) -> &[DocVector] {
        &self.documents
    }

    /// The document-frequency map. Frozen once [`compute_idf`](Corpus::compute_idf)
    /// has run; queries read it but never write it.
    pub fn doc_frequency(&self) -> &DocFrequency {
        &self.doc_frequency
    }

    /// The IDF pass: derive per-term IDF/TF-IDF, magnitude and the prefix
    /// index for every retained document. Indices are per-document, never
    /// shared.
    pub fn compute_idf(&mut self) {
        let total = self.documents.len();
        let doc_frequency = &self.doc_frequency;

        #[cfg(feature = "parallel")]
        self.documents
            .par_iter_mut()
            .for_each(|doc| doc.calc_idf(total, doc_frequency));

        #[cfg(not(feature = "parallel"))]
        for doc in &mut self.documents {
            doc.calc_idf(total, doc_frequency);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(pairs: &[(&str, &str)]) -> Corpus {
        Corpus::feed(MemorySource::new(pairs.iter().copied()))
    }

    #[test]
    fn test_feed_registers_document_frequencies() {
        let corpus = corpus(&[("d1", "cat dog cat"), ("d2", "dog bird")]);

        assert_eq!(corpus.documents().len(), 2);
        assert_eq!(corpus.doc_frequency()["cat"].len(), 1);
        assert_eq!(corpus.doc_frequency()["dog"].len(), 2);
        assert_eq!(corpus.doc_frequency()["bird"].len(), 1);
    }

    #[test]
    fn test_feed_discards_empty_documents() {
        let corpus = corpus(&[("d1", "   "), ("d2", "words here"), ("d3", "")]);

        assert_eq!(corpus.documents().len(), 1);
        assert_eq!(corpus.documents()[0].id(), "d2");
        assert!(corpus.has_data());
    }

    #[test]
    fn test_empty_feed_has_no_data() {
        let corpus = corpus(&[]);
        assert!(!corpus.has_data());
    }

    #[test]
    fn test_repeated_term_registers_once_per_document() {
        let corpus = corpus(&[("d1", "cat cat cat")]);
        assert_eq!(corpus.doc_frequency()["cat"].len(), 1);
    }

    #[test]
    fn test_compute_idf_fills_magnitudes_and_indices() {
        let mut corpus = corpus(&[("d1", "cat dog"), ("d2", "dog")]);
        corpus.compute_idf();

        for doc in corpus.documents() {
            assert!(doc.magnitude() > 0.0);
            assert!(!doc.index().is_empty());
        }

        // rarer term weighs more within the document containing both
        let d1 = &corpus.documents()[0];
        let cat = d1.terms().iter().find(|t| t.literal() == "cat").unwrap();
        let dog = d1.terms().iter().find(|t| t.literal() == "dog").unwrap();
        assert!(cat.tf_idf() > dog.tf_idf());
    }
}
