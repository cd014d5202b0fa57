use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Value must be >= {min}")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("No targets configured (set --url or provide `targets` in config).")]
    MissingTargets,
    #[error("Invalid target URL '{value}': {source}")]
    InvalidTarget {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported scheme '{scheme}' in target '{value}'. Use http or https.")]
    UnsupportedTargetScheme { value: String, scheme: String },
    #[error("Concurrency ({concurrency}) cannot exceed the request count ({requests}).")]
    ConcurrencyExceedsRequests { concurrency: u64, requests: u64 },
    #[error("Benchmark tool path must not be empty.")]
    EmptyToolPath,
    #[error("Report name must not be empty.")]
    EmptyReportName,
    #[error("All {count} target(s) failed; the report contains no sections.")]
    AllTargetsFailed { count: usize },
}
