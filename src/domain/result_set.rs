use super::{ChartImage, ParsedResult, Target};

#[derive(Debug, Clone)]
pub struct TargetResult {
    pub target: Target,
    pub parsed: ParsedResult,
    pub chart: ChartImage,
}

/// Per-target results in configured order, consumed once by the report builder.
#[derive(Debug, Clone, Default)]
pub struct ReportResultSet {
    entries: Vec<TargetResult>,
}

impl ReportResultSet {
    /// Adds a result; a target that is already present is replaced in place.
    pub fn insert(&mut self, result: TargetResult) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.target == result.target)
        {
            Some(entry) => *entry = result,
            None => self.entries.push(result),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetResult> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.entries.iter().map(|entry| &entry.target)
    }
}
