// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command handlers behind the CLI definitions.
//!
//! All handlers rebuild the index from the directory - the engine lives for
//! one process and there is no persisted format. Failure to produce any
//! indexable document is the only hard error; everything else degrades to
//! "no results".

use std::io::{self, BufRead, Write};

use serde::Serialize;

use trawl::{DirSource, SearchEngine, SearchHit};

use crate::cli::{display, Cli, Commands};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use std::time::Duration;

/// JSON shape for `--json` output.
#[derive(Serialize)]
struct JsonHit<'a> {
    score: f64,
    id: &'a str,
    content: &'a str,
}

pub fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Search {
            dir,
            query,
            limit,
            json,
        } => run_search(&dir, &query, limit, json),
        Commands::Repl { dir } => run_repl(&dir),
        Commands::Inspect { dir, json } => run_inspect(&dir, json),
    }
}

/// Build an engine over `dir`, mapping a not-ready engine to a CLI error.
fn build_engine(dir: &str) -> Result<SearchEngine, String> {
    #[cfg(feature = "parallel")]
    let spinner = {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("indexing {}", dir));
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };

    let engine = SearchEngine::from_source(DirSource::new(dir));

    #[cfg(feature = "parallel")]
    spinner.finish_and_clear();

    if !engine.is_ready() {
        return Err(format!("no indexable documents under {}", dir));
    }
    Ok(engine)
}

fn print_hits(engine: &SearchEngine, hits: &[SearchHit], limit: usize) {
    if hits.is_empty() {
        println!("no matching documents");
        return;
    }
    for (rank, hit) in hits.iter().take(limit).enumerate() {
        // doc_id always resolves: hits index the engine's own documents
        if let Some(doc) = engine.document(hit.doc_id) {
            println!(
                "{}",
                display::result_line(rank + 1, hit.score, doc.id(), doc.content())
            );
        }
    }
}

fn hits_to_json(engine: &SearchEngine, hits: &[SearchHit], limit: usize) -> Result<String, String> {
    let rows: Vec<JsonHit<'_>> = hits
        .iter()
        .take(limit)
        .filter_map(|hit| {
            engine.document(hit.doc_id).map(|doc| JsonHit {
                score: hit.score,
                id: doc.id(),
                content: doc.content(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&rows).map_err(|e| format!("failed to encode results: {}", e))
}

fn run_search(dir: &str, query: &str, limit: usize, json: bool) -> Result<(), String> {
    let engine = build_engine(dir)?;
    let hits = engine.search(query);

    if json {
        println!("{}", hits_to_json(&engine, &hits, limit)?);
    } else {
        print_hits(&engine, &hits, limit);
    }
    Ok(())
}

fn run_repl(dir: &str) -> Result<(), String> {
    let engine = build_engine(dir)?;
    eprintln!(
        "indexed {} documents; empty line or \"0\" quits",
        engine.documents().len()
    );

    let stdin = io::stdin();
    loop {
        print!("search> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        let query = line.trim();
        // EOF, empty line or "0" (the classic menu exit) all quit
        if read == 0 || query.is_empty() || query == "0" {
            break;
        }

        print_hits(&engine, &engine.search(query), usize::MAX);
    }
    Ok(())
}

fn run_inspect(dir: &str, json: bool) -> Result<(), String> {
    let engine = build_engine(dir)?;

    if json {
        let dump: Vec<serde_json::Value> = engine
            .documents()
            .iter()
            .map(|doc| {
                serde_json::json!({
                    "id": doc.id(),
                    "magnitude": doc.magnitude(),
                    "terms": doc
                        .terms()
                        .iter()
                        .map(|t| {
                            serde_json::json!({
                                "literal": t.literal(),
                                "frequency": t.frequency(),
                                "tf": t.tf(),
                                "idf": t.idf(),
                                "tf_idf": t.tf_idf(),
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        let encoded = serde_json::to_string_pretty(&dump)
            .map_err(|e| format!("failed to encode dump: {}", e))?;
        println!("{}", encoded);
        return Ok(());
    }

    for doc in engine.documents() {
        println!(
            "{} {}",
            display::doc_id(doc.id()),
            display::dim(&format!("(magnitude {:.4})", doc.magnitude()))
        );
        for term in doc.terms() {
            println!(
                "  {:<24} freq={:<4} TF={:.4} IDF={:.4} TF-IDF={:.4}",
                term.literal(),
                term.frequency(),
                term.tf(),
                term.idf(),
                term.tf_idf()
            );
        }
        println!();
    }
    Ok(())
}
