use crate::access_log::quoted::read_quoted;
use crate::access_log::{AccessLogEntry, ExtractionError};
use std::net::IpAddr;
use std::str::FromStr;

/// Extracts the User-Agent field from a combined-format log line.
pub fn extract_user_agent(line: &str) -> Result<String, ExtractionError> {
    parse_line(line).map(|entry| entry.user_agent)
}

/// Parses a combined-format log line, discarding any prefix in front of the
/// client address.
///
/// Every token that looks like a record start (an IP address followed by
/// ` - `) is tried in turn, so a prefix that happens to contain one does not
/// hide the real record behind it. When no candidate parses, the error from
/// the last one is returned.
pub fn parse_line(line: &str) -> Result<AccessLogEntry, ExtractionError> {
    let mut last_err = ExtractionError::NoClientAddress;

    for (remote_addr, rest) in record_candidates(line) {
        match parse_record(remote_addr, rest) {
            Ok(entry) => return Ok(entry),
            Err(e) => {
                tracing::trace!(%remote_addr, error = %e, "record candidate rejected");
                last_err = e;
            }
        }
    }

    Err(last_err)
}

/// Parses everything after `$remote_addr - `.
fn parse_record(remote_addr: IpAddr, rest: &str) -> Result<AccessLogEntry, ExtractionError> {
    //-------------------------------------------------------------------------
    // $remote_user [$time_local]
    //-------------------------------------------------------------------------
    let (remote_user, rest) = rest
        .split_once(' ')
        .ok_or(ExtractionError::MissingField { field: "time_local" })?;

    let (time_local, rest) = rest
        .strip_prefix('[')
        .and_then(|r| r.split_once(']'))
        .ok_or(ExtractionError::MissingField { field: "time_local" })?;

    //-------------------------------------------------------------------------
    // "$request" $status $body_bytes_sent
    //-------------------------------------------------------------------------
    let (request, rest) = read_quoted(rest.trim_start(), "request")?;
    let (status, rest) = next_number::<u16>(rest, "status")?;
    let (body_bytes_sent, rest) = next_number::<u64>(rest, "body_bytes_sent")?;

    //-------------------------------------------------------------------------
    // "$http_referer" "$http_user_agent"
    //-------------------------------------------------------------------------
    let (referrer, rest) = read_quoted(rest.trim_start(), "http_referer")?;
    let (user_agent, trailing) = read_quoted(rest.trim_start(), "http_user_agent")?;

    if !trailing.trim().is_empty() {
        tracing::trace!(trailing, "ignoring fields after user agent");
    }

    Ok(AccessLogEntry {
        remote_addr,
        remote_user: dash_to_none(remote_user),
        time_local: time_local.to_string(),
        request,
        status,
        body_bytes_sent,
        referrer: dash_to_none(&referrer),
        user_agent,
    })
}

/// Tokens that parse as an IP address and are followed by ` - `, in line
/// order, each with everything after the separator.
fn record_candidates(line: &str) -> impl Iterator<Item = (IpAddr, &str)> {
    let mut offset = 0;

    line.split(' ').filter_map(move |token| {
        let end = offset + token.len();
        offset = end + 1;

        let addr = token.parse::<IpAddr>().ok()?;
        let rest = line[end..].strip_prefix(" - ")?;
        Some((addr, rest))
    })
}

fn next_number<'a, T: FromStr + Default>(
    input: &'a str,
    field: &'static str,
) -> Result<(T, &'a str), ExtractionError> {
    let input = input.trim_start();
    let end = input.find(' ').unwrap_or(input.len());
    let (raw, rest) = input.split_at(end);

    match raw {
        "" => Err(ExtractionError::MissingField { field }),
        // Apache writes `-` for an empty body
        "-" if field == "body_bytes_sent" => Ok((T::default(), rest)),
        _ => raw
            .parse()
            .map(|n| (n, rest))
            .map_err(|_| ExtractionError::InvalidNumber {
                field,
                value: raw.to_string(),
            }),
    }
}

fn dash_to_none(value: &str) -> Option<String> {
    (value != "-").then(|| value.to_string())
}
