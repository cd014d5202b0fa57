use std::path::Path;

use crate::domain::{ReportResultSet, RunConfig};
use crate::error::ReportError;

/// Writes the parsed metrics (without charts) as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialization fails or the file cannot be written.
pub async fn export_json(
    path: &Path,
    results: &ReportResultSet,
    run: &RunConfig,
) -> Result<(), ReportError> {
    let serialize_error = |err| ReportError::Serialize {
        path: path.to_path_buf(),
        source: err,
    };

    let mut targets = Vec::with_capacity(results.len());
    for result in results.iter() {
        let metrics = serde_json::to_value(&result.parsed).map_err(serialize_error)?;
        targets.push(serde_json::json!({
            "target": result.target.as_str(),
            "metrics": metrics,
        }));
    }

    let document = serde_json::json!({
        "requests": run.requests(),
        "concurrency": run.concurrency(),
        "targets": targets,
    });
    let content = serde_json::to_string_pretty(&document).map_err(serialize_error)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| ReportError::CreateDir {
                path: parent.to_path_buf(),
                source: err,
            })?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|err| ReportError::Write {
            path: path.to_path_buf(),
            source: err,
        })
}
