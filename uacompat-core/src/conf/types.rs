use crate::report::ReportFormat;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Represents the whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UacompatConfig {
    pub parse: ParseConfig,
    pub report: ReportConfig,
}

/// Settings for turning access log lines into classified rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Drop lines whose User-Agent field is `-`.
    pub skip_missing_user_agent: bool,

    pub bot_filter: BotFilterKind,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            skip_missing_user_agent: true,
            bot_filter: BotFilterKind::Heuristic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BotFilterKind {
    /// Keep every line
    Off,
    /// Product-token name heuristics
    #[default]
    Heuristic,
    /// woothee's crawler database
    Woothee,
}
