mod app;
mod bench;
mod chart;
mod config;
mod parse;
mod report;
mod validation;

pub use app::{AppError, AppResult};
pub use bench::BenchmarkError;
pub use chart::ChartError;
pub use config::ConfigError;
pub use parse::ParseError;
pub use report::ReportError;
pub use validation::ValidationError;
