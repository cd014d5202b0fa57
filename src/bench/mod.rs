//! Invokes the external benchmark tool for one target at a time.
mod apache;


use async_trait::async_trait;

use crate::domain::{RawOutput, RunConfig, Target};
use crate::error::BenchmarkError;

pub use apache::ApacheBench;

/// A benchmarking backend that turns one target into raw report text.
#[async_trait]
pub trait BenchmarkTool: Send + Sync {
    /// Runs the benchmark to completion. No timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns an error when the tool cannot be started or exits non-zero.
    async fn run(&self, target: &Target, config: &RunConfig) -> Result<RawOutput, BenchmarkError>;
}
