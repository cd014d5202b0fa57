//! PDF report assembly and result export.
mod export;
mod layout;
mod pdf;


pub use export::export_json;
pub use pdf::{RenderedReport, build_report, render_report};
