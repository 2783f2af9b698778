//! End-to-end search behavior: ranking, fuzziness, determinism, and the
//! directory document source.

mod common;

use common::{engine_from, ranked_ids, top_id};
use std::fs;
use trawl::{DirSource, SearchEngine};

// ============================================================================
// RANKING
// ============================================================================

#[test]
fn exact_term_ranks_owner_first() {
    let engine = engine_from(&[("doc1", "cat dog cat"), ("doc2", "dog bird")]);

    let ids = ranked_ids(&engine, "cat");
    assert!(!ids.is_empty());
    assert_eq!(ids[0], 0);
    // "cat" shares no usable prefix with "dog" or "bird", so doc2 either
    // doesn't appear at all or trails doc1
    assert!(ids.iter().all(|&id| id == 0) || ids == vec![0, 1]);
}

#[test]
fn repeated_term_outweighs_single_occurrence() {
    let engine = engine_from(&[
        ("heavy", "rust rust rust intro"),
        ("light", "rust mentioned once here"),
    ]);

    assert_eq!(top_id(&engine, "rust"), Some("heavy"));
}

#[test]
fn multi_term_query_prefers_document_covering_both() {
    let engine = engine_from(&[
        ("both", "cat dog"),
        ("one", "cat fish"),
        ("neither", "bird song"),
    ]);

    let hits = engine.search("cat dog");
    assert_eq!(hits[0].doc_id, 0);
    assert!(hits.len() >= 2);
}

// ============================================================================
// FUZZY MATCHING
// ============================================================================

#[test]
fn small_typos_still_match_at_lower_score() {
    let engine = engine_from(&[("doc1", "running")]);

    let exact = engine.search("running");
    assert_eq!(exact.len(), 1);

    for typo in ["runing", "runnin", "runningly"] {
        let fuzzy = engine.search(typo);
        assert_eq!(fuzzy.len(), 1, "query {:?} should match", typo);
        assert!(
            fuzzy[0].score < exact[0].score,
            "query {:?} must score below the exact query",
            typo
        );
        assert!(fuzzy[0].score > 0.0);
    }
}

#[test]
fn length_gap_beyond_erase_limit_finds_nothing() {
    let engine = engine_from(&[("doc1", "running")]);
    // |3 - 7| = 4 exceeds the erase limit
    assert!(engine.search("run").is_empty());
}

#[test]
fn unrelated_first_character_finds_nothing() {
    let engine = engine_from(&[("doc1", "dog bird")]);
    assert!(engine.search("cog").is_empty() || !ranked_ids(&engine, "cog").contains(&1));
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn empty_and_whitespace_queries_return_empty() {
    let engine = engine_from(&[("doc1", "content")]);
    assert!(engine.search("").is_empty());
    assert!(engine.search(" \t\n ").is_empty());
}

#[test]
fn query_of_unknown_terms_returns_empty() {
    let engine = engine_from(&[("doc1", "cat dog")]);
    assert!(engine.search("zebra quagga").is_empty());
}

#[test]
fn blank_documents_are_discarded() {
    let engine = engine_from(&[("blank", "   "), ("real", "actual words")]);

    assert!(engine.is_ready());
    assert_eq!(engine.documents().len(), 1);
    assert_eq!(engine.documents()[0].id(), "real");
}

#[test]
fn all_blank_feed_leaves_engine_not_ready() {
    let engine = engine_from(&[("a", ""), ("b", " \t ")]);
    assert!(!engine.is_ready());
    assert!(engine.search("anything").is_empty());
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn identical_searches_produce_identical_output() {
    let engine = engine_from(&[
        ("d1", "the quick brown fox"),
        ("d2", "jumps over the lazy dog"),
        ("d3", "the dog barks back"),
    ]);

    let first = engine.search("the dog");
    // interleave queries that touch unknown terms
    engine.search("zebra");
    engine.search("");
    let second = engine.search("the dog");

    assert_eq!(first, second);
}

#[test]
fn search_does_not_change_term_weights() {
    let engine = engine_from(&[("d1", "cat dog"), ("d2", "dog bird")]);

    let weights_before: Vec<f64> = engine.documents()[0]
        .terms()
        .iter()
        .map(|t| t.tf_idf())
        .collect();

    engine.search("cat zebra dog");

    let weights_after: Vec<f64> = engine.documents()[0]
        .terms()
        .iter()
        .map(|t| t.tf_idf())
        .collect();
    assert_eq!(weights_before, weights_after);
}

// ============================================================================
// DIRECTORY SOURCE
// ============================================================================

#[test]
fn dir_source_indexes_files_and_skips_the_rest() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("pets.txt"), "cat dog cat").expect("write");
    fs::write(dir.path().join("birds.txt"), "dog bird").expect("write");
    // non-UTF-8 content is skipped silently
    fs::write(dir.path().join("binary.bin"), [0xff, 0xfe, 0x00, 0x01]).expect("write");
    fs::create_dir(dir.path().join("nested")).expect("mkdir");
    fs::write(dir.path().join("nested").join("deep.txt"), "unseen").expect("write");

    let engine = SearchEngine::from_source(DirSource::new(dir.path()));

    assert!(engine.is_ready());
    assert_eq!(engine.documents().len(), 2);

    let top = top_id(&engine, "cat").expect("cat should match");
    assert!(top.ends_with("pets.txt"));
    assert!(engine.search("unseen").is_empty());
}

#[test]
fn dir_source_ids_are_stable_across_rebuilds() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.txt"), "alpha").expect("write");
    fs::write(dir.path().join("b.txt"), "beta").expect("write");

    let first = SearchEngine::from_source(DirSource::new(dir.path()));
    let second = SearchEngine::from_source(DirSource::new(dir.path()));

    let ids = |engine: &SearchEngine| -> Vec<String> {
        engine
            .documents()
            .iter()
            .map(|d| d.id().to_string())
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn empty_directory_leaves_engine_not_ready() {
    let dir = tempfile::tempdir().expect("tempdir");
    let engine = SearchEngine::from_source(DirSource::new(dir.path()));
    assert!(!engine.is_ready());
}
