use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Field name to value mapping for a single form.
///
/// Insertion order is preserved: downstream rendering may truncate the field
/// list for display, so the order fields were discovered in must survive a
/// round trip through the engine. Keys are unique; inserting an existing key
/// overwrites its value in place without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormMapping {
    entries: Vec<(String, String)>,
}

impl FormMapping {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Alias of [`insert`](Self::insert) for call sites that update values
    /// already present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for FormMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut mapping = FormMapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl IntoIterator for FormMapping {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FormMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct FormMappingVisitor;

impl<'de> Visitor<'de> for FormMappingVisitor {
    type Value = FormMapping;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of field names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut mapping = FormMapping::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            mapping.insert(key, value);
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for FormMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(FormMappingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut mapping = FormMapping::new();
        mapping.insert("zebra", "1");
        mapping.insert("apple", "2");
        mapping.insert("mango", "3");

        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut mapping = FormMapping::new();
        mapping.insert("first", "a");
        mapping.insert("second", "b");
        mapping.insert("first", "updated");

        let entries: Vec<(&str, &str)> = mapping.iter().collect();
        assert_eq!(entries, vec![("first", "updated"), ("second", "b")]);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_serde_round_trip_in_order() {
        let mut mapping = FormMapping::new();
        mapping.insert("from_date", "01-01-2023");
        mapping.insert("to_date", "31-12-2023");
        mapping.insert("uin", "");

        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(
            json,
            r#"{"from_date":"01-01-2023","to_date":"31-12-2023","uin":""}"#
        );

        let restored: FormMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, mapping);
    }
}
