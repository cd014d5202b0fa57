use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

/// Latency percentiles in the order the benchmark tool reported them.
///
/// Re-inserting a percentile keeps its original position and takes the new
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Percentiles {
    entries: Vec<(u32, u64)>,
}

impl Percentiles {
    pub fn insert(&mut self, percentile: u32, value_ms: u64) {
        match self.entries.iter_mut().find(|(key, _)| *key == percentile) {
            Some(entry) => entry.1 = value_ms,
            None => self.entries.push((percentile, value_ms)),
        }
    }

    #[must_use]
    pub fn get(&self, percentile: u32) -> Option<u64> {
        self.entries
            .iter()
            .find(|(key, _)| *key == percentile)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, u64)> for Percentiles {
    fn from_iter<I: IntoIterator<Item = (u32, u64)>>(iter: I) -> Self {
        let mut percentiles = Percentiles::default();
        for (percentile, value_ms) in iter {
            percentiles.insert(percentile, value_ms);
        }
        percentiles
    }
}

impl Serialize for Percentiles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (percentile, value_ms) in &self.entries {
            seq.serialize_element(&Entry {
                percentile: *percentile,
                value_ms: *value_ms,
            })?;
        }
        seq.end()
    }
}

#[derive(Serialize)]
struct Entry {
    percentile: u32,
    value_ms: u64,
}
