//! Ordered candidate → count mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Maps each requested candidate to its extracted vote count.
///
/// Keys keep the order the candidates were supplied in. Recording the
/// same name twice keeps its first position and the latest value, so
/// every candidate appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, Option<u64>)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a count, overwriting an earlier entry for the same name.
    pub fn record(&mut self, name: &str, count: Option<u64>) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = count;
        } else {
            self.entries.push((name.to_string(), count));
        }
    }

    /// The count recorded for `name`, or `None` if the candidate was
    /// never requested. A requested-but-unfound candidate is
    /// `Some(None)`.
    pub fn get(&self, name: &str) -> Option<Option<u64>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, count)| *count)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<u64>)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Tally {
    // A JSON object in insertion order. serde_json's own map type
    // sorts keys, so the entries are streamed by hand.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}
