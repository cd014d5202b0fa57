use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{
    ChartImage, ConnectionGrid, ConnectionTimes, Phase, STATISTIC_COUNT, Statistic, Target,
};
use crate::error::ChartError;

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;

const BYTES_PER_PIXEL: usize = 3;
const BUFFER_LEN: usize = (CHART_WIDTH as usize) * (CHART_HEIGHT as usize) * BYTES_PER_PIXEL;

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);
const BAR_OPACITY: f64 = 0.7;
/// Headroom above the tallest bar.
const Y_HEADROOM: f64 = 1.1;

/// Renders the connection-time table as a 2x2 grid of bar charts, one panel
/// per phase, and returns it PNG-encoded.
///
/// # Errors
///
/// Returns an error before drawing anything when `times` does not hold
/// exactly the five statistics with four values each, or when drawing or
/// encoding fails.
pub fn render_connection_times(
    target: &Target,
    times: &ConnectionTimes,
) -> Result<ChartImage, ChartError> {
    let grid = times.grid()?;

    let mut pixels = vec![0u8; BUFFER_LEN];
    draw_grid(&mut pixels, target, &grid)?;

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&pixels, CHART_WIDTH, CHART_HEIGHT, image::ColorType::Rgb8)
        .map_err(|err| ChartError::Encode { source: err })?;

    Ok(ChartImage::new(png, CHART_WIDTH, CHART_HEIGHT))
}

fn draw_grid(pixels: &mut [u8], target: &Target, grid: &ConnectionGrid) -> Result<(), ChartError> {
    let root = BitMapBackend::with_buffer(pixels, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let body = root.titled(
        &format!("Connection Times for {}", target),
        ("sans-serif", 22).into_font(),
    )?;

    let panels = body.split_evenly((2, 2));
    for (phase, panel) in Phase::ALL.iter().zip(panels.iter()) {
        draw_phase_panel(panel, *phase, &grid.phase_values(*phase))?;
    }

    root.present()?;
    Ok(())
}

fn draw_phase_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    phase: Phase,
    values: &[f64; STATISTIC_COUNT],
) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(area)
        .caption(phase.as_str(), ("sans-serif", 18).into_font())
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d((0..STATISTIC_COUNT).into_segmented(), 0f64..axis_ceiling(values))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(STATISTIC_COUNT)
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(index) => Statistic::ALL
                .get(*index)
                .map(|statistic| statistic.label().to_owned())
                .unwrap_or_default(),
            SegmentValue::Exact(_) | SegmentValue::Last => String::new(),
        })
        .y_desc("Time (ms)")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.mix(BAR_OPACITY).filled())
            .margin(12)
            .data(values.iter().copied().enumerate()),
    )?;

    Ok(())
}

#[expect(
    clippy::float_arithmetic,
    reason = "Axis headroom is a ratio of the tallest bar."
)]
fn axis_ceiling(values: &[f64]) -> f64 {
    let tallest = values.iter().copied().fold(0.0, f64::max);
    if tallest > 0.0 {
        tallest * Y_HEADROOM
    } else {
        1.0
    }
}
