//! In-memory chart rendering for the report.
mod connection_times;


pub use connection_times::{CHART_HEIGHT, CHART_WIDTH, render_connection_times};
