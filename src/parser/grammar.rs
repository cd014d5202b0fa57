use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

#[expect(
    clippy::expect_used,
    reason = "Patterns are string literals checked by the parser tests."
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid benchmark output pattern")
}

static COMPLETE_REQUESTS_RE: Lazy<Regex> = Lazy::new(|| compile(r"Complete requests:\s+(\d+)"));
static REQUESTS_PER_SECOND_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"Requests per second:\s+([\d.]+)"));
static TIME_PER_REQUEST_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"Time per request:\s+([\d.]+) \[ms\]"));
pub(super) static CONNECTION_TABLE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?s)Connection Times \(ms\)(.*?)Percentage"));
pub(super) static PERCENTILE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+)%\s+(\d+)"));

/// A single `Label:   <number>` line of the benchmark report.
pub(super) struct LabeledField {
    pub(super) field: &'static str,
    pattern: &'static Lazy<Regex>,
}

impl LabeledField {
    /// First match wins; later occurrences of the label are ignored.
    pub(super) fn capture<'text>(&self, text: &'text str) -> Result<&'text str, ParseError> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|value| value.as_str())
            .ok_or(ParseError::MissingField { field: self.field })
    }

    pub(super) fn number<T: FromStr>(&self, text: &str) -> Result<T, ParseError> {
        let raw = self.capture(text)?;
        raw.parse::<T>().map_err(|_err| ParseError::InvalidNumber {
            field: self.field,
            value: raw.to_owned(),
        })
    }
}

pub(super) static COMPLETE_REQUESTS: LabeledField = LabeledField {
    field: "Complete requests",
    pattern: &COMPLETE_REQUESTS_RE,
};

pub(super) static REQUESTS_PER_SECOND: LabeledField = LabeledField {
    field: "Requests per second",
    pattern: &REQUESTS_PER_SECOND_RE,
};

pub(super) static TIME_PER_REQUEST: LabeledField = LabeledField {
    field: "Time per request",
    pattern: &TIME_PER_REQUEST_RE,
};
