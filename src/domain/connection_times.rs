use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

pub const PHASE_COUNT: usize = 4;
pub const STATISTIC_COUNT: usize = 5;

/// Row of the benchmark tool's connection-time table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Connect,
    Processing,
    Waiting,
    Total,
}

impl Phase {
    pub const ALL: [Phase; PHASE_COUNT] = [
        Phase::Connect,
        Phase::Processing,
        Phase::Waiting,
        Phase::Total,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Connect => "Connect",
            Phase::Processing => "Processing",
            Phase::Waiting => "Waiting",
            Phase::Total => "Total",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Phase::Connect => 0,
            Phase::Processing => 1,
            Phase::Waiting => 2,
            Phase::Total => 3,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column of the connection-time table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Min,
    Mean,
    StdDev,
    Median,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; STATISTIC_COUNT] = [
        Statistic::Min,
        Statistic::Mean,
        Statistic::StdDev,
        Statistic::Median,
        Statistic::Max,
    ];

    /// Key used in serialized output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Statistic::Min => "min",
            Statistic::Mean => "mean",
            Statistic::StdDev => "stddev",
            Statistic::Median => "median",
            Statistic::Max => "max",
        }
    }

    /// Axis label used in charts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Statistic::Min => "Min",
            Statistic::Mean => "Mean",
            Statistic::StdDev => "StdDev",
            Statistic::Median => "Median",
            Statistic::Max => "Max",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Statistic::Min => 0,
            Statistic::Mean => 1,
            Statistic::StdDev => 2,
            Statistic::Median => 3,
            Statistic::Max => 4,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectionTimesError {
    #[error("missing '{statistic}' statistic")]
    MissingStatistic { statistic: Statistic },
    #[error("'{statistic}' appears more than once")]
    DuplicateStatistic { statistic: Statistic },
    #[error("'{statistic}' has {found} value(s), expected 4")]
    WrongLength { statistic: Statistic, found: usize },
}

/// Connection times keyed by statistic, each holding one value per phase in
/// [`Phase::ALL`] order.
///
/// The pairs are kept in insertion order. Nothing here enforces the
/// five-by-four shape; call [`ConnectionTimes::grid`] before relying on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionTimes {
    columns: Vec<(Statistic, Vec<f64>)>,
}

impl ConnectionTimes {
    /// Transposes phase rows (one `[min, mean, stddev, median, max]` per
    /// phase) into statistic-keyed columns.
    #[must_use]
    pub fn from_phase_rows(rows: &[[f64; STATISTIC_COUNT]; PHASE_COUNT]) -> Self {
        let columns = Statistic::ALL
            .iter()
            .map(|statistic| {
                let values = rows
                    .iter()
                    .filter_map(|row| row.get(statistic.index()).copied())
                    .collect();
                (*statistic, values)
            })
            .collect();
        Self { columns }
    }

    #[must_use]
    pub const fn from_columns(columns: Vec<(Statistic, Vec<f64>)>) -> Self {
        Self { columns }
    }

    #[must_use]
    pub fn columns(&self) -> &[(Statistic, Vec<f64>)] {
        &self.columns
    }

    #[must_use]
    pub fn get(&self, statistic: Statistic) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(key, _)| *key == statistic)
            .map(|(_, values)| values.as_slice())
    }

    /// Checks the five-statistic, four-phase shape.
    ///
    /// # Errors
    ///
    /// Returns an error when a statistic is missing, repeated, or does not
    /// carry exactly one value per phase.
    pub fn grid(&self) -> Result<ConnectionGrid, ConnectionTimesError> {
        let mut slots: [Option<[f64; PHASE_COUNT]>; STATISTIC_COUNT] = [None; STATISTIC_COUNT];
        for (statistic, values) in &self.columns {
            let column = <[f64; PHASE_COUNT]>::try_from(values.as_slice()).map_err(|_err| {
                ConnectionTimesError::WrongLength {
                    statistic: *statistic,
                    found: values.len(),
                }
            })?;
            if let Some(slot) = slots.get_mut(statistic.index()) {
                if slot.is_some() {
                    return Err(ConnectionTimesError::DuplicateStatistic {
                        statistic: *statistic,
                    });
                }
                *slot = Some(column);
            }
        }

        let mut values = [[0.0; PHASE_COUNT]; STATISTIC_COUNT];
        for (statistic, (slot, target)) in Statistic::ALL
            .iter()
            .zip(slots.into_iter().zip(values.iter_mut()))
        {
            *target = slot.ok_or(ConnectionTimesError::MissingStatistic {
                statistic: *statistic,
            })?;
        }
        Ok(ConnectionGrid { values })
    }
}

impl Serialize for ConnectionTimes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (statistic, values) in &self.columns {
            map.serialize_entry(statistic.key(), values)?;
        }
        map.end()
    }
}

/// Validated connection times with a fixed five-by-four shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionGrid {
    values: [[f64; PHASE_COUNT]; STATISTIC_COUNT],
}

impl ConnectionGrid {
    /// Values of one phase, ordered as [`Statistic::ALL`].
    #[must_use]
    pub fn phase_values(&self, phase: Phase) -> [f64; STATISTIC_COUNT] {
        self.values
            .map(|column| column.get(phase.index()).copied().unwrap_or_default())
    }

    #[must_use]
    pub fn statistic_values(&self, statistic: Statistic) -> [f64; PHASE_COUNT] {
        self.values
            .get(statistic.index())
            .copied()
            .unwrap_or_default()
    }
}
