//! Ordered key/value metadata for VM groups.
//!
//! Manifest metadata is free-form, but consumers may depend on the order in
//! which entries were declared, so it is kept as an ordered sequence of pairs
//! rather than a map. On the wire it still reads and writes as a plain
//! mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered key/value pairs with keyed lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert a pair. An existing key is updated in place, keeping its
    /// original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut meta = Metadata::new();
        for (k, v) in iter {
            meta.insert(k, v);
        }
        meta
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct MetadataVisitor;

impl<'de> Visitor<'de> for MetadataVisitor {
    type Value = Metadata;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping of string keys to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Metadata, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, String>()? {
            entries.push(entry);
        }
        Ok(Metadata { entries })
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MetadataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut meta = Metadata::new();
        meta.insert("group_type", "jumpbox");
        meta.insert("tier", "frontend");
        meta.insert("zone", "1");

        let keys: Vec<_> = meta.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["group_type", "tier", "zone"]);
    }

    #[test]
    fn test_keyed_lookup() {
        let mut meta = Metadata::new();
        meta.insert("group_type", "jumpbox");

        assert_eq!(meta.get("group_type"), Some("jumpbox"));
        assert_eq!(meta.get("missing"), None);
    }

    #[test]
    fn test_insert_updates_in_place() {
        let mut meta = Metadata::new();
        meta.insert("a", "1");
        meta.insert("b", "2");
        meta.insert("a", "3");

        assert_eq!(meta.len(), 2);
        assert_eq!(meta.get("a"), Some("3"));
        let keys: Vec<_> = meta.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_yaml_round_trip_keeps_order() {
        let yaml = "group_type: jumpbox\ntier: frontend\nzone: '1'\n";
        let meta: Metadata = serde_yaml::from_str(yaml).unwrap();

        let keys: Vec<_> = meta.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["group_type", "tier", "zone"]);

        let rendered = serde_yaml::to_string(&meta).unwrap();
        let reparsed: Metadata = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(meta, reparsed);
    }
}
