use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no client address starting a combined log record")]
    NoClientAddress,

    #[error("missing {field} field")]
    MissingField { field: &'static str },

    #[error("unterminated quote in {field} field")]
    UnterminatedQuote { field: &'static str },

    #[error("invalid {field} field '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
