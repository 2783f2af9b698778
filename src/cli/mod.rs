// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the trawl command-line interface.
//!
//! Three subcommands: `search` for one-shot queries, `repl` for an
//! interactive prompt over the same in-memory index, and `inspect` to dump
//! per-document term weights. The index is rebuilt from the directory on
//! every invocation - there is no on-disk format.

pub mod display;
pub mod run;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "trawl",
    about = "Fuzzy TF-IDF document ranking over a directory of text files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank documents in a directory against a query
    Search {
        /// Directory of text files, one document per file
        dir: String,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Index a directory once, then answer queries interactively
    Repl {
        /// Directory of text files, one document per file
        dir: String,
    },

    /// Dump per-document term weights (TF, IDF, TF-IDF, magnitude)
    Inspect {
        /// Directory of text files, one document per file
        dir: String,

        /// Emit the dump as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}
