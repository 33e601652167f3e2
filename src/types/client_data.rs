use serde::{Deserialize, Serialize};

/// One version label with its observed client count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub version: String,
    pub count: u64,
}

/// The raw version→count association produced by one fetch.
///
/// Keys are unique and first-insertion order is preserved: count sorts
/// break ties by the order entries arrived, and a count tie for the most
/// popular version goes to the earlier entry.
/// Replaced wholesale on each successful fetch, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientData {
    entries: Vec<ClientEntry>,
}

impl ClientData {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces the count for a version label.
    ///
    /// A repeated label keeps its original position; only the count changes.
    pub fn insert(&mut self, version: &str, count: u64) {
        match self.entries.iter_mut().find(|e| e.version == version) {
            Some(entry) => entry.count = count,
            None => self.entries.push(ClientEntry {
                version: version.to_string(),
                count,
            }),
        }
    }

    pub fn get(&self, version: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.version == version)
            .map(|e| e.count)
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> &[ClientEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convenience constructor for tests and fixtures.
    pub fn from_pairs(pairs: &[(&str, u64)]) -> Self {
        let mut data = Self::new();
        for (version, count) in pairs {
            data.insert(version, *count);
        }
        data
    }
}
