// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document sources: where corpus text comes from.
//!
//! A source yields `(identifier, raw_text)` records. Failure is not a
//! source's problem to report - unreadable or missing entries are skipped
//! silently and the corpus simply sees fewer records. A feed that yields
//! nothing leaves the engine not ready, which the caller surfaces.

use std::fs;
use std::path::PathBuf;

/// One document as handed to the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    /// Identifier used in results and the document-frequency map
    /// (for [`DirSource`], the file path).
    pub id: String,
    /// Raw text, tokenized later by the corpus.
    pub text: String,
}

/// A sequence of documents to feed into a corpus.
pub trait DocumentSource {
    /// Produce all records. Consumes the source; the corpus is built in one
    /// pass and never goes back to it.
    fn records(self) -> Vec<SourceRecord>;
}

/// Reads every file directly under a directory, one record per file.
///
/// Subdirectories, unreadable files and non-UTF-8 files are skipped without
/// comment. An unreadable directory yields no records at all. Records come
/// back sorted by path so document indices are stable across runs.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for DirSource {
    fn records(self) -> Vec<SourceRecord> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut records: Vec<SourceRecord> = entries
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if !path.is_file() {
                    return None;
                }
                let text = fs::read_to_string(&path).ok()?;
                Some(SourceRecord {
                    id: path.display().to_string(),
                    text,
                })
            })
            .collect();

        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}

/// In-memory source for tests, benches and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<SourceRecord>,
}

impl MemorySource {
    pub fn new<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            records: pairs
                .into_iter()
                .map(|(id, text)| SourceRecord {
                    id: id.into(),
                    text: text.into(),
                })
                .collect(),
        }
    }
}

impl DocumentSource for MemorySource {
    fn records(self) -> Vec<SourceRecord> {
        self.records
    }
}
