use std::path::PathBuf;

use crate::args::{DEFAULT_REPORT_PREFIX, ReportArgs};
use crate::domain::{RunConfig, Target};
use crate::error::ValidationError;

/// How the external benchmark tool is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    pub program: String,
    pub extra_args: Vec<String>,
}

/// Fully resolved run configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Settings {
    pub targets: Vec<Target>,
    pub run: RunConfig,
    pub tool: ToolSettings,
    pub report_path: PathBuf,
    pub export_json: Option<PathBuf>,
}

impl Settings {
    /// Validates the merged CLI/config arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when no target is configured, a target is not an
    /// http(s) URL, the tool path or report name is empty, or concurrency
    /// exceeds the request count.
    pub fn from_args(args: &ReportArgs) -> Result<Self, ValidationError> {
        if args.urls.is_empty() {
            return Err(ValidationError::MissingTargets);
        }
        let targets = args
            .urls
            .iter()
            .map(|url| Target::parse(url))
            .collect::<Result<Vec<_>, _>>()?;

        let run = RunConfig::new(args.requests, args.concurrency)?;

        let program = args.ab_path.trim();
        if program.is_empty() {
            return Err(ValidationError::EmptyToolPath);
        }

        let report_name = match args.report_name.as_deref().map(str::trim) {
            Some("") => return Err(ValidationError::EmptyReportName),
            Some(name) => name.to_owned(),
            None => default_report_name(&run),
        };

        Ok(Self {
            targets,
            run,
            tool: ToolSettings {
                program: program.to_owned(),
                extra_args: args.tool_args.clone(),
            },
            report_path: PathBuf::from(&args.output_dir).join(report_name),
            export_json: args.export_json.as_ref().map(PathBuf::from),
        })
    }
}

pub(crate) fn default_report_name(run: &RunConfig) -> String {
    format!(
        "{}_{}n_{}c.pdf",
        DEFAULT_REPORT_PREFIX,
        run.requests(),
        run.concurrency()
    )
}
