use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid query clause \"{clause}\": {fault}")]
pub struct QuerySyntaxError {
    pub clause: String,
    pub fault: ClauseFault,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClauseFault {
    #[error("empty clause")]
    Empty,

    #[error("missing browser name")]
    MissingBrowser,

    #[error("missing comparison operator (expected one of <, <=, =, >=, >)")]
    MissingOperator,

    #[error("missing version")]
    MissingVersion,

    #[error("unexpected operator '{0}'")]
    UnexpectedOperator(String),

    #[error("version must be a non-negative integer, found '{0}'")]
    InvalidVersion(String),

    #[error("unexpected '{0}' after version")]
    TrailingInput(String),
}
