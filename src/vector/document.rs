// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document TF-IDF vectors.
//!
//! A `DocVector` is built in two phases that mirror the corpus build:
//!
//! 1. **Tokenize** ([`DocVector::from_text`]) - split on whitespace, count
//!    normalized terms, fix TF. The display content keeps the original
//!    spelling in original order.
//! 2. **IDF pass** ([`DocVector::calc_idf`]) - once corpus-wide document
//!    frequencies are known, derive IDF and TF-IDF per term, compute the
//!    vector magnitude, and populate the document's fuzzy prefix index.
//!
//! After the second phase the vector is read-only.

use std::collections::BTreeMap;

use crate::corpus::DocFrequency;
use crate::fuzzy::PrefixTrie;
use crate::util::text::tokenize;
use crate::vector::TermWeight;

/// A document as a sparse TF-IDF vector, plus its fuzzy prefix index.
#[derive(Debug, Clone)]
pub struct DocVector {
    id: String,
    content: String,
    /// One entry per distinct normalized term, ordered by literal.
    terms: Vec<TermWeight>,
    magnitude: f64,
    index: PrefixTrie,
}

impl DocVector {
    /// Tokenize `raw` into a term-frequency vector.
    ///
    /// TF uses the distinct-term denominator: "a a b" gives TF(a) = 1.0 and
    /// TF(b) = 0.5. IDF, TF-IDF, magnitude and the prefix index stay empty
    /// until [`calc_idf`](DocVector::calc_idf) runs.
    pub fn from_text(id: impl Into<String>, raw: &str) -> Self {
        let tokens = tokenize(raw);

        let mut frequencies: BTreeMap<String, u32> = BTreeMap::new();
        let mut display: Vec<&str> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            display.push(&token.raw);
            *frequencies.entry(token.key.clone()).or_insert(0) += 1;
        }

        let distinct = frequencies.len();
        let terms = frequencies
            .into_iter()
            .map(|(literal, frequency)| TermWeight::new(literal, frequency, distinct))
            .collect();

        Self {
            id: id.into(),
            content: display.join(" "),
            terms,
            magnitude: 0.0,
            index: PrefixTrie::new(),
        }
    }

    /// Source identifier (e.g. the file path the text came from).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Original-case tokens, space-joined, in original order.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Term weights, ordered by literal.
    pub fn terms(&self) -> &[TermWeight] {
        &self.terms
    }

    /// True when the text tokenized to nothing. The corpus discards these.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// L2 norm of the TF-IDF vector. Zero iff the document has no terms
    /// (after the IDF pass, every present term has strictly positive weight).
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The document's fuzzy prefix index, populated by the IDF pass.
    pub fn index(&self) -> &PrefixTrie {
        &self.index
    }

    /// The IDF pass: derive IDF and TF-IDF for every term from corpus-wide
    /// document frequencies, then compute the magnitude and build the
    /// prefix index.
    ///
    /// `IDF = log2(1 + total_docs / (D + 1))` where `D` is the number of
    /// corpus documents containing the term - zero for terms absent from the
    /// corpus (query-only terms). The +1 smoothing keeps IDF defined and
    /// strictly positive even at D = 0.
    pub(crate) fn calc_idf(&mut self, total_docs: usize, doc_frequency: &DocFrequency) {
        let mut acc = 0.0;

        for term in &mut self.terms {
            let docs_with_term = doc_frequency.get(term.literal()).map_or(0, |ids| ids.len());
            let idf = (1.0 + total_docs as f64 / (docs_with_term as f64 + 1.0)).log2();
            term.set_idf(idf);
            acc += term.tf_idf() * term.tf_idf();
        }

        self.magnitude = acc.sqrt();

        let mut index = PrefixTrie::new();
        for term in &self.terms {
            index.insert(term.literal(), term.tf_idf());
        }
        self.index = index;
    }
}
