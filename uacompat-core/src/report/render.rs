use crate::query::{Predicate, Summary};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Plain,
    Pretty,
    Json,
}

pub fn render_summary(
    summary: &Summary,
    predicates: &[Predicate],
    format: ReportFormat,
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Plain => Ok(render_plain(summary)),
        ReportFormat::Pretty => Ok(render_pretty(summary, predicates)),
        ReportFormat::Json => Ok(render_json(summary, predicates)?),
    }
}

pub fn render_plain(summary: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} rows, {} valid ({:.1}%), {} skipped ({:.1}%)",
        summary.total,
        summary.valid,
        summary.valid_percent().unwrap_or(0.0),
        summary.skipped,
        summary.skipped_percent().unwrap_or(0.0)
    );

    match summary.match_percent() {
        Some(pct) => {
            let _ = writeln!(out, "{pct:.2}% of rows match query");
        }
        None => out.push_str("no valid rows\n"),
    }

    out
}

pub fn render_pretty(summary: &Summary, predicates: &[Predicate]) -> String {
    let mut out = String::new();

    let query = predicates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "{} {}\n", "Query:".bold(), query);

    let _ = writeln!(
        out,
        "Rows: {} | valid: {} ({:.1}%) | skipped: {} ({:.1}%)",
        summary.total,
        summary.valid.green(),
        summary.valid_percent().unwrap_or(0.0),
        summary.skipped.yellow(),
        summary.skipped_percent().unwrap_or(0.0)
    );

    match summary.match_percent() {
        Some(pct) => {
            let _ = writeln!(out, "Match: {}", format!("{pct:.2}%").bold().green());
        }
        None => {
            let _ = writeln!(out, "Match: {}", "no valid rows".red());
        }
    }

    if !summary.families.is_empty() {
        out.push_str("\nEquivalent browsers:\n");
        for (family, count) in &summary.families {
            let pct = *count as f64 / summary.valid as f64 * 100.0;
            let bars = ((pct / 5.0).floor() as usize).max(1);
            let _ = writeln!(
                out,
                "  {:<18} {:<20} {:>5.1}% ({count})",
                family,
                "█".repeat(bars),
                pct
            );
        }
    }

    out
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    query: Vec<String>,
    total: u64,
    valid: u64,
    skipped: u64,
    matched: u64,
    valid_percent: Option<f64>,
    skipped_percent: Option<f64>,
    match_percent: Option<f64>,
    families: &'a std::collections::BTreeMap<String, u64>,
}

pub fn render_json(summary: &Summary, predicates: &[Predicate]) -> serde_json::Result<String> {
    let json = SummaryJson {
        query: predicates.iter().map(ToString::to_string).collect(),
        total: summary.total,
        valid: summary.valid,
        skipped: summary.skipped,
        matched: summary.matched,
        valid_percent: summary.valid_percent(),
        skipped_percent: summary.skipped_percent(),
        match_percent: summary.match_percent(),
        families: &summary.families,
    };

    serde_json::to_string_pretty(&json)
}
