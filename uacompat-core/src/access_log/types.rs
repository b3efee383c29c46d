use chrono::{DateTime, FixedOffset};
use std::net::IpAddr;

/// `$time_local` as nginx writes it, e.g. `10/Oct/2020:13:55:36 -0700`.
const TIME_LOCAL_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// A parsed combined-format access log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    pub remote_addr: IpAddr,
    /// `None` when nginx logged `-`
    pub remote_user: Option<String>,
    pub time_local: String,
    pub request: String,
    pub status: u16,
    pub body_bytes_sent: u64,
    /// `None` when nginx logged `-`
    pub referrer: Option<String>,
    /// The User-Agent field exactly as sent, after unescaping. `-` when the
    /// client sent no header.
    pub user_agent: String,
}

impl AccessLogEntry {
    pub fn has_user_agent(&self) -> bool {
        !self.user_agent.is_empty() && self.user_agent != "-"
    }

    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.time_local, TIME_LOCAL_FORMAT).ok()
    }

    pub fn method(&self) -> Option<&str> {
        self.request.split_whitespace().next()
    }
}
