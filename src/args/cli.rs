use clap::Parser;

use super::defaults::{
    DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_DIR, DEFAULT_REQUESTS, DEFAULT_TOOL_PATH,
};
use super::parsers::{parse_non_empty, parse_positive_u64};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Run ApacheBench against a list of API endpoints and build a PDF load test report."
)]
pub struct ReportArgs {
    /// Target URL to benchmark (repeat for several endpoints)
    #[arg(long = "url", short = 'u')]
    pub urls: Vec<String>,

    /// Total number of requests per target (ab -n)
    #[arg(
        long = "requests",
        short = 'n',
        default_value = DEFAULT_REQUESTS,
        value_parser = parse_positive_u64
    )]
    pub requests: PositiveU64,

    /// Number of concurrent requests (ab -c)
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value = DEFAULT_CONCURRENCY,
        value_parser = parse_positive_u64
    )]
    pub concurrency: PositiveU64,

    /// Path to the ApacheBench executable
    #[arg(
        long = "ab-path",
        env = "AB_PATH",
        default_value = DEFAULT_TOOL_PATH,
        value_parser = parse_non_empty
    )]
    pub ab_path: String,

    /// Extra argument passed to the benchmark tool before the URL (repeatable)
    #[arg(long = "tool-arg", allow_hyphen_values = true)]
    pub tool_args: Vec<String>,

    /// Directory the report is written to
    #[arg(long = "output-dir", short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Report file name (defaults to load_test_report_<n>n_<c>c.pdf)
    #[arg(long = "report-name")]
    pub report_name: Option<String>,

    /// Also write the parsed results as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Path to a TOML or JSON config file
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
