//! `stats`: classified CSV rows plus a query in, summary report out.

use crate::query::{Predicate, QueryEvaluator, Summary, parse_query};
use crate::report::{RecordReader, ReportFormat, RowError, render_summary};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Evaluates `query` over CSV rows read from `input`.
///
/// The query is parsed before any row is read; a syntax error fails the run
/// without touching the input.
pub fn run_stats<R: Read>(input: R, query: &str) -> Result<(Summary, Vec<Predicate>)> {
    let predicates = parse_query(query)?;

    let mut evaluator = QueryEvaluator::new(&predicates);
    let mut reader = RecordReader::new(input);

    for (idx, row) in reader.records().enumerate() {
        match row {
            Ok(record) => evaluator.push(&record),
            Err(RowError::Csv(e)) if e.is_io_error() => {
                return Err(e).context("failed to read CSV input");
            }
            Err(e) => {
                tracing::debug!(row = idx + 1, error = %e, "skipping malformed row");
                evaluator.push_malformed();
            }
        }
    }

    let summary = evaluator.into_summary();
    if summary.valid == 0 {
        tracing::warn!(total = summary.total, "no valid rows in input");
    }

    Ok((summary, predicates))
}

/// Runs [`run_stats`] over a CSV file and renders the report.
pub fn stats_file(path: &Path, query: &str, format: ReportFormat) -> Result<String> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let (summary, predicates) = run_stats(BufReader::new(file), query)?;

    render_summary(&summary, &predicates, format)
}
