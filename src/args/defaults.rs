/// Benchmark tool looked up on `PATH` when no explicit path is configured.
pub(crate) const DEFAULT_TOOL_PATH: &str = "ab";
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "results";
pub(crate) const DEFAULT_REQUESTS: &str = "10000";
pub(crate) const DEFAULT_CONCURRENCY: &str = "500";

/// Report file names are `<prefix>_<requests>n_<concurrency>c.pdf`.
pub(crate) const DEFAULT_REPORT_PREFIX: &str = "load_test_report";

/// Config files checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["abreport.toml", "abreport.json"];
