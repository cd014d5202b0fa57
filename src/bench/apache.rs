use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::BenchmarkTool;
use crate::config::ToolSettings;
use crate::domain::{RawOutput, RunConfig, Target};
use crate::error::BenchmarkError;

/// Runs ApacheBench (`ab`) as a child process.
#[derive(Debug, Clone)]
pub struct ApacheBench {
    settings: ToolSettings,
}

impl ApacheBench {
    #[must_use]
    pub const fn new(settings: ToolSettings) -> Self {
        Self { settings }
    }

    /// Arguments passed after the program name: `-n`, `-c`, extra tool
    /// arguments, then the URL.
    #[must_use]
    pub fn arguments(&self, target: &Target, config: &RunConfig) -> Vec<String> {
        let mut args = Vec::with_capacity(self.settings.extra_args.len().saturating_add(5));
        args.push("-n".to_owned());
        args.push(config.requests().to_string());
        args.push("-c".to_owned());
        args.push(config.concurrency().to_string());
        args.extend(self.settings.extra_args.iter().cloned());
        args.push(target.as_str().to_owned());
        args
    }
}

#[async_trait]
impl BenchmarkTool for ApacheBench {
    async fn run(&self, target: &Target, config: &RunConfig) -> Result<RawOutput, BenchmarkError> {
        let args = self.arguments(target, config);
        info!("Running: {} {}", self.settings.program, args.join(" "));

        let output = Command::new(&self.settings.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| BenchmarkError::Spawn {
                program: self.settings.program.clone(),
                source: err,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            return Err(BenchmarkError::Execution {
                status: output.status,
                stderr,
            });
        }

        debug!(
            "Benchmark for {} produced {} bytes of output",
            target,
            output.stdout.len()
        );
        Ok(RawOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}
