use std::path::Path;

use chrono::Local;
use tracing::{debug, info};

use super::layout::{PageWriter, TextRole};
use crate::domain::{ReportResultSet, RunConfig, TargetResult};
use crate::error::ReportError;

const REPORT_TITLE: &str = "Load Test Report";
const CHART_WIDTH_PT: f32 = 400.0;
const CHART_HEIGHT_PT: f32 = 300.0;
const SECTION_GAP_PT: f32 = 12.0;
const SECTION_END_PT: f32 = 24.0;

/// A rendered report held in memory.
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Lays out the title block and one section per target.
///
/// The first section shares the title page; every later section starts on a
/// new page.
///
/// # Errors
///
/// Returns an error when a chart cannot be decoded or the document cannot be
/// serialized.
pub fn render_report(
    results: &ReportResultSet,
    run: &RunConfig,
    output_path: &Path,
) -> Result<RenderedReport, ReportError> {
    let render_error = |message: String| ReportError::Render {
        path: output_path.to_path_buf(),
        message,
    };

    let mut writer = PageWriter::new(REPORT_TITLE).map_err(render_error)?;
    writer.text(REPORT_TITLE, TextRole::Title);
    writer.text(
        &format!(
            "Generated {} | {} requests per target | concurrency {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            run.requests(),
            run.concurrency()
        ),
        TextRole::Subtitle,
    );
    writer.spacer(SECTION_GAP_PT);

    if results.is_empty() {
        writer.text("No successful targets were benchmarked.", TextRole::Body);
    }

    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            writer.new_page();
        }
        write_section(&mut writer, result)?;
    }

    let pages = writer.pages();
    let bytes = writer.finish().map_err(render_error)?;
    debug!("Rendered report with {} page(s)", pages);
    Ok(RenderedReport { bytes, pages })
}

fn write_section(writer: &mut PageWriter, result: &TargetResult) -> Result<(), ReportError> {
    let parsed = &result.parsed;

    writer.text(&format!("API Path: {}", result.target), TextRole::Heading);
    writer.spacer(SECTION_GAP_PT);

    writer.text(
        &format!("Complete Requests: {}", parsed.complete_requests),
        TextRole::Body,
    );
    writer.text(
        &format!("Requests per Second: {:.2}", parsed.requests_per_second),
        TextRole::Body,
    );
    writer.text(
        &format!("Time per Request: {:.2} ms", parsed.time_per_request_ms),
        TextRole::Body,
    );
    writer.spacer(SECTION_GAP_PT);

    writer.text("Percentiles:", TextRole::Body);
    for (percentile, value_ms) in parsed.percentiles.iter() {
        writer.text(
            &format!("{}th Percentile: {} ms", percentile, value_ms),
            TextRole::Body,
        );
    }
    writer.spacer(SECTION_GAP_PT);

    let decoded =
        image::load_from_memory_with_format(result.chart.as_bytes(), image::ImageFormat::Png)
            .map_err(|err| ReportError::DecodeChart {
                target: result.target.to_string(),
                source: err,
            })?;
    writer.image(&result.chart, &decoded, CHART_WIDTH_PT, CHART_HEIGHT_PT);
    writer.spacer(SECTION_END_PT);
    Ok(())
}

/// Renders the report and writes it to `output_path`, creating the parent
/// directory when needed.
///
/// # Errors
///
/// Returns an error when the destination cannot be created or written, or
/// when rendering fails.
pub async fn build_report(
    results: &ReportResultSet,
    run: &RunConfig,
    output_path: &Path,
) -> Result<usize, ReportError> {
    let rendered = render_report(results, run, output_path)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| ReportError::CreateDir {
                path: parent.to_path_buf(),
                source: err,
            })?;
    }

    tokio::fs::write(output_path, &rendered.bytes)
        .await
        .map_err(|err| ReportError::Write {
            path: output_path.to_path_buf(),
            source: err,
        })?;

    info!(
        "Wrote {} section(s) on {} page(s) to {}",
        results.len(),
        rendered.pages,
        output_path.display()
    );
    Ok(rendered.pages)
}
