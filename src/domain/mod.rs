//! Value types shared by the runner, parser, chart generator and report builder.
mod connection_times;
mod output;
mod percentiles;
mod result_set;
mod target;

#[cfg(test)]
mod tests;

pub use connection_times::{
    ConnectionGrid, ConnectionTimes, ConnectionTimesError, PHASE_COUNT, Phase, STATISTIC_COUNT,
    Statistic,
};
pub use output::{ChartImage, ParsedResult, RawOutput};
pub use percentiles::Percentiles;
pub use result_set::{ReportResultSet, TargetResult};
pub use target::{RunConfig, Target};
