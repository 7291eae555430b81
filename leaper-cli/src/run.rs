//! One solver run: search, optional DOT emission, and the report.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use leaper_core::{Board, Cell};
use leaper_dot::{DEFAULT_FILE_NAME, DotGraph, write_dot};
use leaper_paths::{PathSet, Piece, Reachability, ResultGraph, reconstruct};
use serde::Serialize;

use crate::args::RunConfig;

/// The path count exceeded `--max-paths`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooManyPaths {
    pub count: u128,
    pub limit: u64,
}

impl fmt::Display for TooManyPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shortest paths exceed the limit of {}",
            self.count, self.limit
        )
    }
}

impl std::error::Error for TooManyPaths {}

/// Result of a run, before it is printed.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub paths: PathSet,
    pub graph: ResultGraph,
    pub elapsed: Duration,
    pub dot_file: Option<PathBuf>,
}

/// Search, honour the path limit, and write the DOT file if configured.
pub fn solve(config: &RunConfig) -> Result<Outcome> {
    let started = Instant::now();
    let reach = Reachability::explore(&config.board, &config.piece, config.start, config.target);
    if let Some(limit) = config.max_paths {
        let count = reach.count_paths(config.target);
        if count > u128::from(limit) {
            return Err(TooManyPaths { count, limit }.into());
        }
    }
    let paths = reconstruct(&reach);
    let elapsed = started.elapsed();
    tracing::info!(
        paths = paths.len(),
        visited = reach.len(),
        "solved {} -> {} in {:?}",
        config.start,
        config.target,
        elapsed
    );

    let graph = ResultGraph::from_paths(&paths);

    let dot_file = match &config.dot_dir {
        Some(dir) => {
            let dot = DotGraph::new(config.board, &paths);
            let written = write_dot(dir, DEFAULT_FILE_NAME, &dot)
                .with_context(|| format!("writing solution graph into {}", dir.display()))?;
            tracing::info!("graph written to {}", written.display());
            Some(written)
        }
        None => None,
    };

    Ok(Outcome {
        paths,
        graph,
        elapsed,
        dot_file,
    })
}

#[derive(Serialize)]
struct JsonReport<'a> {
    piece: Piece,
    board: Board,
    start: Cell,
    target: Cell,
    moves: Option<usize>,
    count: usize,
    paths: &'a PathSet,
    graph: &'a ResultGraph,
    elapsed_ms: f64,
    dot_file: Option<&'a PathBuf>,
}

/// Print `outcome` as JSON or as the text summary.
pub fn report<W: Write>(config: &RunConfig, outcome: &Outcome, out: &mut W) -> Result<()> {
    if config.json {
        let report = JsonReport {
            piece: config.piece,
            board: config.board,
            start: config.start,
            target: config.target,
            moves: outcome.paths.moves(),
            count: outcome.paths.len(),
            paths: &outcome.paths,
            graph: &outcome.graph,
            elapsed_ms: outcome.elapsed.as_secs_f64() * 1000.0,
            dot_file: outcome.dot_file.as_ref(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "[RESULTS]")?;
    writeln!(out, "- Paths:")?;
    for p in &outcome.paths {
        writeln!(out, "  {p}")?;
    }
    writeln!(out, "- Number of paths: {}", outcome.paths.len())?;
    match outcome.paths.moves() {
        Some(m) => writeln!(out, "- Moves: {m}")?,
        None => writeln!(
            out,
            "- Moves: none, {} cannot reach {} from {}",
            config.piece, config.target, config.start
        )?,
    }
    writeln!(out, "- Execution Time: {:?}", outcome.elapsed)?;
    if let Some(file) = &outcome.dot_file {
        writeln!(out, "- Graph: {}", file.display())?;
    }
    Ok(())
}

/// Solve and report.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let outcome = solve(config)?;
    report(config, &outcome, out)
}
