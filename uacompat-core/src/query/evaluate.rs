use crate::query::Predicate;
use crate::user_agent::ClassifiedRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts collected by one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: u64,
    /// Rows whose equivalent browser was resolved.
    pub valid: u64,
    /// `total - valid`: unclassifiable or malformed rows.
    pub skipped: u64,
    /// Valid rows satisfying at least one predicate.
    pub matched: u64,
    /// Valid rows per equivalent browser.
    pub families: BTreeMap<String, u64>,
}

impl Summary {
    pub fn valid_percent(&self) -> Option<f64> {
        percent(self.valid, self.total)
    }

    pub fn skipped_percent(&self) -> Option<f64> {
        percent(self.skipped, self.total)
    }

    /// `None` when there are no valid rows to match against.
    pub fn match_percent(&self) -> Option<f64> {
        percent(self.matched, self.valid)
    }
}

fn percent(part: u64, whole: u64) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

/// Streams records through a parsed query.
pub struct QueryEvaluator<'a> {
    predicates: &'a [Predicate],
    summary: Summary,
}

impl<'a> QueryEvaluator<'a> {
    pub fn new(predicates: &'a [Predicate]) -> Self {
        Self {
            predicates,
            summary: Summary::default(),
        }
    }

    pub fn push(&mut self, record: &ClassifiedRecord) {
        self.summary.total += 1;

        let Some(equivalent) = &record.equivalent else {
            self.summary.skipped += 1;
            return;
        };

        self.summary.valid += 1;
        *self
            .summary
            .families
            .entry(equivalent.name.clone())
            .or_insert(0) += 1;

        if self
            .predicates
            .iter()
            .any(|p| p.holds_for(&equivalent.name, equivalent.version))
        {
            self.summary.matched += 1;
        }
    }

    /// Counts a row that could not be read as a record at all.
    pub fn push_malformed(&mut self) {
        self.summary.total += 1;
        self.summary.skipped += 1;
    }

    pub fn into_summary(self) -> Summary {
        self.summary
    }
}

/// Evaluates `predicates` (OR-combined) over a batch of records.
pub fn evaluate<'r>(
    records: impl IntoIterator<Item = &'r ClassifiedRecord>,
    predicates: &[Predicate],
) -> Summary {
    let mut evaluator = QueryEvaluator::new(predicates);
    for record in records {
        evaluator.push(record);
    }
    evaluator.into_summary()
}
