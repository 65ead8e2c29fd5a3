//! Name-keyed flattening of decoded records
//!
//! Downstream consumers (TTN, ChirpStack, Datacake style integrations) expect
//! a flat object keyed by `name_channel`. When two records produce the same
//! key the later one wins, and the key keeps its first position.

use crate::record::{SensorRecord, SensorValue};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Insertion-ordered map from flattened key to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatMap {
    entries: Vec<(String, SensorValue)>,
    index: HashMap<String, usize>,
}

impl FlatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: SensorValue) -> Option<SensorValue> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&SensorValue> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SensorValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// JSON object with the same key order
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::to_value(v).unwrap_or_default()))
            .collect();
        serde_json::Value::Object(object)
    }
}

impl Serialize for FlatMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Flatten records into a `name_channel` keyed map, last write wins
pub fn flatten(records: &[SensorRecord]) -> FlatMap {
    let mut map = FlatMap::new();
    for record in records {
        map.insert(record.key(), record.value.clone());
    }
    map
}
