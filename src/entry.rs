use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{DEFAULT_CONFIG_FILES, ReportArgs};
use crate::bench::ApacheBench;
use crate::config::Settings;
use crate::error::{AppError, AppResult, ValidationError};
use crate::pipeline::{TargetFailure, run_targets};

/// Parses the command line, runs every target and writes the report.
///
/// # Errors
///
/// Returns an error when arguments or configuration are invalid, the report
/// cannot be written, or every target failed.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    apply_config(&mut args, &matches)?;
    crate::logger::init_logging(args.verbose, args.no_color);

    let settings = Settings::from_args(&args).map_err(|err| {
        tracing::error!("{}", err);
        AppError::validation(err)
    })?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(settings))
}

fn parse_args() -> AppResult<Option<(ReportArgs, ArgMatches)>> {
    let mut cmd = ReportArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = ReportArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

fn apply_config(args: &mut ReportArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config);
    }
    Ok(())
}

async fn run_async(settings: Settings) -> AppResult<()> {
    let tool = ApacheBench::new(settings.tool.clone());
    let outcome = run_targets(&tool, &settings.targets, &settings.run).await;

    crate::report::build_report(&outcome.results, &settings.run, &settings.report_path).await?;
    println!(
        "PDF report generated: {}",
        settings.report_path.display()
    );

    if let Some(path) = settings.export_json.as_deref() {
        crate::report::export_json(path, &outcome.results, &settings.run).await?;
        println!("Results exported: {}", path.display());
    }

    if !outcome.failures.is_empty() {
        print_failures(&outcome.failures);
    }
    if outcome.all_failed() {
        return Err(AppError::validation(ValidationError::AllTargetsFailed {
            count: outcome.failures.len(),
        }));
    }
    Ok(())
}

fn print_failures(failures: &[TargetFailure]) {
    eprintln!("Failed targets:");
    for failure in failures {
        eprintln!("- {}", failure);
    }
}
