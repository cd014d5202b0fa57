//! Extracts structured metrics from ApacheBench's text report.
//!
//! The report is matched field by field: three labeled scalars, the
//! connection-time table bounded by `Connection Times (ms)` and `Percentage`,
//! and every `<n>% <ms>` pair as a percentile. Each extractor maps its
//! failure to one [`ParseError`] variant.
mod grammar;


use tracing::debug;

use crate::domain::{
    ConnectionTimes, PHASE_COUNT, ParsedResult, Percentiles, Phase, RawOutput, STATISTIC_COUNT,
};
use crate::error::ParseError;

use grammar::{
    COMPLETE_REQUESTS, CONNECTION_TABLE_RE, PERCENTILE_RE, REQUESTS_PER_SECOND, TIME_PER_REQUEST,
};

/// Parses one benchmark report.
///
/// # Errors
///
/// Returns an error when a scalar field or the connection-time table is
/// missing, or when a table row is short or non-numeric.
pub fn parse(output: &RawOutput) -> Result<ParsedResult, ParseError> {
    let text = output.as_str();

    let complete_requests = COMPLETE_REQUESTS.number::<u64>(text)?;
    let requests_per_second = REQUESTS_PER_SECOND.number::<f64>(text)?;
    let time_per_request_ms = TIME_PER_REQUEST.number::<f64>(text)?;
    let connection_times = parse_connection_times(text)?;
    let percentiles = parse_percentiles(text)?;

    debug!(
        "Parsed {} complete requests, {} percentile(s)",
        complete_requests,
        percentiles.len()
    );

    Ok(ParsedResult {
        complete_requests,
        requests_per_second,
        time_per_request_ms,
        connection_times,
        percentiles,
    })
}

fn parse_connection_times(text: &str) -> Result<ConnectionTimes, ParseError> {
    let block = CONNECTION_TABLE_RE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .ok_or(ParseError::MissingConnectionTable)?
        .as_str();

    // First line is the column header; anything after the Total row is a note.
    let mut lines = block
        .trim()
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty());

    let mut rows = [[0.0; STATISTIC_COUNT]; PHASE_COUNT];
    for (phase, row) in Phase::ALL.iter().zip(rows.iter_mut()) {
        let line = lines
            .next()
            .ok_or(ParseError::MissingPhaseRow { phase: *phase })?;
        *row = parse_phase_row(*phase, line)?;
    }

    Ok(ConnectionTimes::from_phase_rows(&rows))
}

fn parse_phase_row(phase: Phase, line: &str) -> Result<[f64; STATISTIC_COUNT], ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().skip(1).collect();
    if tokens.len() < STATISTIC_COUNT {
        return Err(ParseError::ShortPhaseRow {
            phase,
            found: tokens.len(),
        });
    }

    let mut values = [0.0; STATISTIC_COUNT];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token
            .parse::<f64>()
            .map_err(|_err| ParseError::InvalidPhaseValue {
                phase,
                value: (*token).to_owned(),
            })?;
    }
    Ok(values)
}

fn parse_percentiles(text: &str) -> Result<Percentiles, ParseError> {
    let mut percentiles = Percentiles::default();
    for captures in PERCENTILE_RE.captures_iter(text) {
        let (_, [percentile, value]) = captures.extract();
        let percentile = percentile
            .parse::<u32>()
            .map_err(|_err| ParseError::InvalidNumber {
                field: "percentile",
                value: percentile.to_owned(),
            })?;
        let value_ms = value.parse::<u64>().map_err(|_err| ParseError::InvalidNumber {
            field: "percentile latency",
            value: value.to_owned(),
        })?;
        percentiles.insert(percentile, value_ms);
    }
    Ok(percentiles)
}
