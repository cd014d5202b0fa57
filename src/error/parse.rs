use thiserror::Error;

use crate::domain::Phase;

/// Raised when benchmark output does not have the expected shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Missing '{field}' in benchmark output.")]
    MissingField { field: &'static str },
    #[error("Invalid {field} value '{value}'.")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Missing 'Connection Times (ms)' table in benchmark output.")]
    MissingConnectionTable,
    #[error("Connection Times table has no {phase} row.")]
    MissingPhaseRow { phase: Phase },
    #[error("Connection Times {phase} row has {found} value(s), expected 5.")]
    ShortPhaseRow { phase: Phase, found: usize },
    #[error("Connection Times {phase} row has non-numeric value '{value}'.")]
    InvalidPhaseValue { phase: Phase, value: String },
}
