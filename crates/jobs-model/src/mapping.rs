use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column rename table, loaded once from a JSON object of old→new pairs.
///
/// Keys that do not match a column in the table are ignored at apply time;
/// columns without an entry pass through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    pub entries: BTreeMap<String, String>,
}

impl ColumnMapping {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn get(&self, old_name: &str) -> Option<&str> {
        self.entries.get(old_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }
}
