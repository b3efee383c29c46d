use crate::user_agent::ClassifiedRecord;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = ">")]
    Gt,
}

impl Operator {
    /// Tokenizer order: two-character operators first so `<` never matches
    /// the front of `<=`.
    pub const LONGEST_FIRST: [Operator; 5] = [
        Operator::Ge,
        Operator::Le,
        Operator::Eq,
        Operator::Gt,
        Operator::Lt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Eq => "=",
            Operator::Ge => ">=",
            Operator::Gt => ">",
        }
    }

    /// Evaluates `lhs <op> rhs`.
    pub fn compare(&self, lhs: u32, rhs: u32) -> bool {
        match self {
            Operator::Lt => lhs < rhs,
            Operator::Le => lhs <= rhs,
            Operator::Eq => lhs == rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Gt => lhs > rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    /// Lower-cased browser family, compared against the equivalent browser.
    pub browser_key: String,
    pub operator: Operator,
    pub version: u32,
}

impl Predicate {
    pub fn new(browser: &str, operator: Operator, version: u32) -> Self {
        Self {
            browser_key: browser.to_lowercase(),
            operator,
            version,
        }
    }

    /// Whether the predicate applies to `name` and holds for `version`.
    pub fn holds_for(&self, name: &str, version: u32) -> bool {
        name.to_lowercase() == self.browser_key && self.operator.compare(version, self.version)
    }

    /// Unclassified records never satisfy a predicate.
    pub fn matches(&self, record: &ClassifiedRecord) -> bool {
        record
            .equivalent
            .as_ref()
            .is_some_and(|e| self.holds_for(&e.name, e.version))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.browser_key, self.operator, self.version)
    }
}
