use std::fmt;

use url::Url;

use crate::args::PositiveU64;
use crate::error::ValidationError;

/// An endpoint under test, kept exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Validates `value` as an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not a URL or uses another scheme.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidTarget {
            value: trimmed.to_owned(),
            source: err,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(trimmed.to_owned())),
            other => Err(ValidationError::UnsupportedTargetScheme {
                value: trimmed.to_owned(),
                scheme: other.to_owned(),
            }),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request count and concurrency shared by every target of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    requests: PositiveU64,
    concurrency: PositiveU64,
}

impl RunConfig {
    /// # Errors
    ///
    /// Returns an error when `concurrency` exceeds `requests`; the benchmark
    /// tool refuses to start in that case.
    pub fn new(requests: PositiveU64, concurrency: PositiveU64) -> Result<Self, ValidationError> {
        if concurrency.get() > requests.get() {
            return Err(ValidationError::ConcurrencyExceedsRequests {
                concurrency: concurrency.get(),
                requests: requests.get(),
            });
        }
        Ok(Self {
            requests,
            concurrency,
        })
    }

    #[must_use]
    pub const fn requests(&self) -> u64 {
        self.requests.get()
    }

    #[must_use]
    pub const fn concurrency(&self) -> u64 {
        self.concurrency.get()
    }
}
