//! Runs every target through benchmark, parse and chart in order.
use std::fmt;

use tracing::{info, warn};

use crate::bench::BenchmarkTool;
use crate::charts::render_connection_times;
use crate::domain::{ReportResultSet, RunConfig, Target, TargetResult};
use crate::error::{BenchmarkError, ChartError, ParseError};
use crate::parser;

/// Why a target produced no report section.
#[derive(Debug)]
pub enum FailureKind {
    Benchmark(BenchmarkError),
    MalformedOutput(ParseError),
    Chart(ChartError),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Benchmark(err) => write!(f, "benchmark failed: {}", err),
            FailureKind::MalformedOutput(err) => write!(f, "malformed output: {}", err),
            FailureKind::Chart(err) => write!(f, "chart failed: {}", err),
        }
    }
}

#[derive(Debug)]
pub struct TargetFailure {
    pub target: Target,
    pub kind: FailureKind,
}

impl fmt::Display for TargetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.kind)
    }
}

/// Outcome of one pass over the configured targets.
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    pub results: ReportResultSet,
    pub failures: Vec<TargetFailure>,
}

impl PipelineOutcome {
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.results.is_empty() && !self.failures.is_empty()
    }
}

/// Benchmarks targets one after another. A failing target is logged and
/// skipped; the remaining targets still run.
pub async fn run_targets(
    tool: &dyn BenchmarkTool,
    targets: &[Target],
    run: &RunConfig,
) -> PipelineOutcome {
    let mut outcome = PipelineOutcome::default();
    for target in targets {
        info!("Testing {}...", target);
        match run_target(tool, target, run).await {
            Ok(result) => outcome.results.insert(result),
            Err(kind) => {
                warn!("Skipping {}: {}", target, kind);
                outcome.failures.push(TargetFailure {
                    target: target.clone(),
                    kind,
                });
            }
        }
    }
    outcome
}

async fn run_target(
    tool: &dyn BenchmarkTool,
    target: &Target,
    run: &RunConfig,
) -> Result<TargetResult, FailureKind> {
    let output = tool
        .run(target, run)
        .await
        .map_err(FailureKind::Benchmark)?;
    let parsed = parser::parse(&output).map_err(FailureKind::MalformedOutput)?;
    let chart = render_connection_times(target, &parsed.connection_times)
        .map_err(FailureKind::Chart)?;
    Ok(TargetResult {
        target: target.clone(),
        parsed,
        chart,
    })
}
