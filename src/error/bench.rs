use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("Failed to start benchmark tool '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Benchmark tool exited with {status}: {stderr}")]
    Execution { status: ExitStatus, stderr: String },
}
