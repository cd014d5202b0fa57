use serde::Deserialize;

use crate::args::PositiveU64;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "urls")]
    pub targets: Option<Vec<String>>,
    pub requests: Option<PositiveU64>,
    pub concurrency: Option<PositiveU64>,
    pub ab_path: Option<String>,
    pub tool_args: Option<Vec<String>>,
    pub output_dir: Option<String>,
    pub report_name: Option<String>,
    pub export_json: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
