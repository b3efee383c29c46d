//! Access Log Extraction
//!
//! Parses nginx "combined" access log lines:
//!
//! `$remote_addr - $remote_user [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
//!
//! Lines shipped through a log forwarder usually carry a prefix of their own
//! (e.g. `<timestamp> <host> <program>:`). Everything before the client address
//! is discarded, whatever it looks like.

mod error;
mod extract;
mod quoted;
#[cfg(test)]
mod tests;
mod types;

pub use error::ExtractionError;
pub use extract::{extract_user_agent, parse_line};
pub use types::AccessLogEntry;
