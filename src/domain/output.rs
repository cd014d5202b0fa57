use serde::Serialize;

use super::{ConnectionTimes, Percentiles};

/// Unparsed text printed by one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput(String);

impl RawOutput {
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawOutput {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedResult {
    pub complete_requests: u64,
    pub requests_per_second: f64,
    pub time_per_request_ms: f64,
    pub connection_times: ConnectionTimes,
    pub percentiles: Percentiles,
}

/// PNG-encoded chart for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl ChartImage {
    #[must_use]
    pub const fn new(png: Vec<u8>, width: u32, height: u32) -> Self {
        Self { png, width, height }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}
