// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy prefix trie: approximate, length-tolerant term lookup.
//!
//! One trie per document, built once after that document's IDF pass, then
//! read-only during search. Nodes live in an arena and address each other by
//! index; children are a per-node `char -> index` map. No pointer graphs,
//! no recursion - insertion walks the term iteratively, so token length
//! never touches the stack.
//!
//! Every node below the root keeps a "suffix list": every term whose literal
//! passes through that node's subtree, appended at insertion time without
//! deduplication. Duplicate literals are resolved at lookup time, by literal
//! identity. The root keeps no suffix list: a query whose first character
//! matches no edge has no candidates, whatever its length.
//!
//! Lookup walks the query's prefix path as far as it matches, scans the
//! terminal suffix list when the whole query matched, then backtracks up to
//! [`ERASE_LIMIT`] ancestors. Each candidate is weighted by
//! `5 / (5 + distance + extra_weight)` where `distance` is the length gap
//! between query and candidate and `extra_weight` counts backtrack steps.
//! An exact literal therefore comes back with its TF-IDF unchanged.

use std::collections::HashMap;

/// Maximum tolerated length difference between a query term and a candidate,
/// and the maximum number of backtrack steps up the matched prefix path.
pub const ERASE_LIMIT: usize = 2;

/// Numerator and additive base of the candidate penalty.
const PENALTY_BASE: f64 = 5.0;

/// An approximate match returned by [`PrefixTrie::lookup`].
///
/// Carries a penalized **copy** of the indexed term's TF-IDF; the trie
/// itself is never mutated by lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Literal of the indexed term this candidate came from.
    pub literal: String,
    /// The term's TF-IDF scaled by the match penalty.
    pub tf_idf: f64,
}

/// Indexed term payload. Stored once; suffix lists refer to it by id.
#[derive(Debug, Clone)]
struct TermEntry {
    literal: String,
    chars: usize,
    tf_idf: f64,
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, u32>,
    /// Term whose literal terminates exactly at this node, if any.
    exact: Option<u32>,
    /// Ids of every term passing through this subtree, duplicates kept.
    suffixes: Vec<u32>,
}

/// Per-document trie for approximate prefix lookup.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    /// Arena of nodes; `nodes[0]` is the root.
    nodes: Vec<Node>,
    terms: Vec<TermEntry>,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            terms: Vec::new(),
        }
    }

    /// Number of indexed terms (suffix-list duplicates not counted).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Insert a term, creating nodes along its literal as needed.
    ///
    /// The term is appended to the suffix list of every node on the path
    /// below the root - the terminal node included, the root never. At the
    /// terminal node it also takes the exact slot, replacing any previous
    /// occupant with the same literal.
    pub fn insert(&mut self, literal: &str, tf_idf: f64) {
        if literal.is_empty() {
            return;
        }

        let term_id = self.terms.len() as u32;
        self.terms.push(TermEntry {
            literal: literal.to_string(),
            chars: literal.chars().count(),
            tf_idf,
        });

        let mut node = 0u32;
        for ch in literal.chars() {
            let next = match self.nodes[node as usize].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    self.nodes[node as usize].children.insert(ch, child);
                    child
                }
            };
            node = next;
            self.nodes[node as usize].suffixes.push(term_id);
        }
        self.nodes[node as usize].exact = Some(term_id);
    }

    /// Approximate lookup of `query`.
    ///
    /// Walks the matched prefix path, scans the terminal node's suffix list
    /// when the full query matched (`extra_weight` 0), then up to
    /// [`ERASE_LIMIT`] ancestors with `extra_weight` 1, 2, ... Candidates
    /// whose length differs from the query by more than [`ERASE_LIMIT`] are
    /// rejected; survivors are weighted by `5 / (5 + distance + extra_weight)`
    /// with `distance` the length gap. At most one candidate per distinct
    /// literal survives: the one with the highest penalized TF-IDF, which is
    /// always the one claimed at the closest level.
    ///
    /// Results are sorted by literal so identical lookups return identical
    /// vectors.
    pub fn lookup(&self, query: &str) -> Vec<Candidate> {
        let query_len = query.chars().count();
        if query_len == 0 {
            return Vec::new();
        }

        // Walk the matched prefix path, deepest node last.
        let mut path: Vec<u32> = Vec::with_capacity(query_len);
        let mut node = 0u32;
        for ch in query.chars() {
            match self.nodes[node as usize].children.get(&ch) {
                Some(&child) => {
                    node = child;
                    path.push(child);
                }
                None => break,
            }
        }

        // The root holds no suffix list: no shared first character means no
        // usable prefix within the erase limit.
        if path.is_empty() {
            return Vec::new();
        }

        // First scan weight: 0 when the whole query matched a path, 1 when
        // we are already below a partial prefix.
        let mut extra_weight = usize::from(path.len() < query_len);

        let mut best: HashMap<&str, f64> = HashMap::new();
        for &node_id in path.iter().rev() {
            if extra_weight > ERASE_LIMIT {
                break;
            }
            self.scan_level(node_id, query_len, extra_weight, &mut best);
            extra_weight += 1;
        }

        let mut candidates: Vec<Candidate> = best
            .into_iter()
            .map(|(literal, tf_idf)| Candidate {
                literal: literal.to_string(),
                tf_idf,
            })
            .collect();
        candidates.sort_by(|a, b| a.literal.cmp(&b.literal));
        candidates
    }

    /// Scan one node's suffix list, folding penalized weights into `best`.
    fn scan_level<'a>(
        &'a self,
        node_id: u32,
        query_len: usize,
        extra_weight: usize,
        best: &mut HashMap<&'a str, f64>,
    ) {
        for &term_id in &self.nodes[node_id as usize].suffixes {
            let term = &self.terms[term_id as usize];
            let distance = query_len.abs_diff(term.chars);
            if distance > ERASE_LIMIT {
                continue;
            }

            let penalty = PENALTY_BASE / (PENALTY_BASE + (distance + extra_weight) as f64);
            let weighted = term.tf_idf * penalty;

            best.entry(term.literal.as_str())
                .and_modify(|current| {
                    if weighted > *current {
                        *current = weighted;
                    }
                })
                .or_insert(weighted);
        }
    }
}
