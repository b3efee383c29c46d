use crate::user_agent::{ClassifiedRecord, EngineEquivalent};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use thiserror::Error;

/// browser_name, browser_version, equivalent_name, equivalent_version, ua_string
const RECORD_COLUMNS: usize = 5;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("expected 5 columns, found {found}")]
    ColumnCount { found: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Flat CSV shape of a [`ClassifiedRecord`]. Absent versions serialize as
/// empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordRow {
    pub browser_name: String,
    pub browser_version: Option<u32>,
    pub equivalent_name: Option<String>,
    pub equivalent_version: Option<u32>,
    pub ua_string: String,
}

impl From<&ClassifiedRecord> for RecordRow {
    fn from(record: &ClassifiedRecord) -> Self {
        Self {
            browser_name: record.browser_name.clone(),
            browser_version: record.browser_version,
            equivalent_name: record.equivalent_name().map(str::to_string),
            equivalent_version: record.equivalent_version(),
            ua_string: record.ua_string.clone(),
        }
    }
}

impl From<RecordRow> for ClassifiedRecord {
    /// A row with only one of the two equivalent fields carries no equivalent.
    fn from(row: RecordRow) -> Self {
        let equivalent = match (row.equivalent_name, row.equivalent_version) {
            (Some(name), Some(version)) if !name.is_empty() => {
                Some(EngineEquivalent { name, version })
            }
            _ => None,
        };

        Self {
            browser_name: row.browser_name,
            browser_version: row.browser_version,
            equivalent,
            ua_string: row.ua_string,
        }
    }
}

/// Writes classified records as header-less CSV rows.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            inner: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(output),
        }
    }

    pub fn write(&mut self, record: &ClassifiedRecord) -> csv::Result<()> {
        self.inner.serialize(RecordRow::from(record))
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Reads rows written by [`RecordWriter`]. Rows with the wrong number of
/// columns or non-numeric versions come back as errors, one per row.
pub struct RecordReader<R: Read> {
    inner: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            inner: csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(input),
        }
    }

    pub fn records(&mut self) -> impl Iterator<Item = Result<ClassifiedRecord, RowError>> + '_ {
        self.inner.records().map(|row| {
            let row = row?;
            if row.len() != RECORD_COLUMNS {
                return Err(RowError::ColumnCount { found: row.len() });
            }

            let parsed: RecordRow = row.deserialize(None)?;
            Ok(parsed.into())
        })
    }
}
