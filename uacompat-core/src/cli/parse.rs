//! `parse`: access log lines in, classified CSV rows out.
//!
//! stdin
//! parse_line
//! AccessLogEntry
//! (bot filter)
//! classify
//! ClassifiedRecord
//! RecordWriter
//! stdout

use crate::access_log::parse_line;
use crate::conf::types::ParseConfig;
use crate::report::RecordWriter;
use crate::user_agent::bot::build_bot_detector;
use crate::user_agent::classify;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use std::io::{BufRead, Write};

/// What happened to the lines of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Non-blank input lines
    pub lines: u64,
    /// Rows written, including `Unknown` ones
    pub emitted: u64,
    pub malformed: u64,
    pub missing_user_agent: u64,
    pub bots: u64,
    /// Emitted rows whose engine could not be resolved
    pub unknown: u64,
    pub first_seen: Option<DateTime<FixedOffset>>,
    pub last_seen: Option<DateTime<FixedOffset>>,
}

impl ParseOutcome {
    fn observe(&mut self, ts: DateTime<FixedOffset>) {
        self.first_seen = Some(self.first_seen.map_or(ts, |first| first.min(ts)));
        self.last_seen = Some(self.last_seen.map_or(ts, |last| last.max(ts)));
    }
}

pub fn run_parse<R: BufRead, W: Write>(
    input: R,
    output: W,
    cfg: &ParseConfig,
) -> Result<ParseOutcome> {
    let detector = build_bot_detector(cfg.bot_filter);
    let mut writer = RecordWriter::new(output);
    let mut outcome = ParseOutcome::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed to read log input")?;
        let line_no = idx + 1;

        if line.trim().is_empty() {
            continue;
        }
        outcome.lines += 1;

        let entry = match parse_line(line.trim_end()) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(line_no, error = %e, "skipping malformed log line");
                outcome.malformed += 1;
                continue;
            }
        };

        if let Some(ts) = entry.timestamp() {
            outcome.observe(ts);
        }

        if cfg.skip_missing_user_agent && !entry.has_user_agent() {
            outcome.missing_user_agent += 1;
            continue;
        }

        if detector
            .as_ref()
            .is_some_and(|d| d.is_bot(&entry.user_agent))
        {
            tracing::debug!(line_no, user_agent = %entry.user_agent, "skipping bot");
            outcome.bots += 1;
            continue;
        }

        let record = classify(&entry.user_agent);
        if !record.is_valid() {
            tracing::debug!(line_no, user_agent = %record.ua_string, "unrecognized user agent");
            outcome.unknown += 1;
        }

        writer
            .write(&record)
            .with_context(|| format!("failed to write row for line {line_no}"))?;
        outcome.emitted += 1;
    }

    writer.flush().context("failed to flush output")?;

    tracing::info!(
        lines = outcome.lines,
        emitted = outcome.emitted,
        malformed = outcome.malformed,
        missing_user_agent = outcome.missing_user_agent,
        bots = outcome.bots,
        unknown = outcome.unknown,
        first_seen = ?outcome.first_seen,
        last_seen = ?outcome.last_seen,
        "parse finished"
    );

    Ok(outcome)
}
