use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::ReportArgs;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line or through the environment win over
/// values from the file.
pub fn apply_config(args: &mut ReportArgs, matches: &ArgMatches, config: &ConfigFile) {
    if !is_explicit(matches, "urls")
        && let Some(targets) = config.targets.clone()
    {
        args.urls = targets;
    }

    if !is_explicit(matches, "requests")
        && let Some(requests) = config.requests
    {
        args.requests = requests;
    }

    if !is_explicit(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = concurrency;
    }

    if !is_explicit(matches, "ab_path")
        && let Some(path) = config.ab_path.clone()
    {
        args.ab_path = path;
    }

    if !is_explicit(matches, "tool_args")
        && let Some(tool_args) = config.tool_args.clone()
    {
        args.tool_args = tool_args;
    }

    if !is_explicit(matches, "output_dir")
        && let Some(dir) = config.output_dir.clone()
    {
        args.output_dir = dir;
    }

    if !is_explicit(matches, "report_name")
        && let Some(name) = config.report_name.clone()
    {
        args.report_name = Some(name);
    }

    if !is_explicit(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
