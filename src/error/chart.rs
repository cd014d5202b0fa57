use plotters::prelude::{BitMapBackend, DrawingAreaErrorKind, DrawingBackend};
use thiserror::Error;

use crate::domain::ConnectionTimesError;

type PlottersError = DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Refusing to chart connection times: {source}")]
    InvalidConnectionTimes {
        #[from]
        source: ConnectionTimesError,
    },
    #[error("Failed to draw chart: {source}")]
    Draw {
        #[from]
        source: PlottersError,
    },
    #[error("Failed to encode chart as PNG: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },
}
