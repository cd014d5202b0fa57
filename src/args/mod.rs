//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::ReportArgs;
pub use types::PositiveU64;

pub(crate) use defaults::{DEFAULT_CONFIG_FILES, DEFAULT_REPORT_PREFIX};
