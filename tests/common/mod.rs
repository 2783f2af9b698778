//! Shared test utilities and fixtures.

#![allow(dead_code)]

use trawl::{MemorySource, SearchEngine};

/// Build an engine over in-memory documents.
pub fn engine_from(pairs: &[(&str, &str)]) -> SearchEngine {
    SearchEngine::from_source(MemorySource::new(pairs.iter().copied()))
}

/// Doc ids of the hits, in rank order.
pub fn ranked_ids(engine: &SearchEngine, query: &str) -> Vec<usize> {
    engine
        .search(query)
        .iter()
        .map(|hit| hit.doc_id)
        .collect()
}

/// Source identifier of the top hit, if any.
pub fn top_id<'a>(engine: &'a SearchEngine, query: &str) -> Option<&'a str> {
    let hits = engine.search(query);
    let top = hits.first()?;
    engine.document(top.doc_id).map(|doc| doc.id())
}
