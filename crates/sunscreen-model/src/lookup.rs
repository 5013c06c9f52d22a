//! Case-insensitive, insertion-ordered lookup structures.

use indexmap::IndexMap;
use indexmap::map::Entry;

/// Comparison form of a name: trimmed and lower-cased.
///
/// Stored values are never rewritten with this; it only produces keys.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Map keyed by the [`normalize_key`] form of a filter name.
///
/// Ordering contract:
/// - iteration yields values in the order their keys were first inserted;
/// - [`FilterMap::insert`] on an existing key replaces the value but keeps
///   the key's original position;
/// - [`FilterMap::insert_if_absent`] never touches an existing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for FilterMap<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> FilterMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite (last write wins), returning the replaced value.
    pub fn insert(&mut self, name: &str, value: V) -> Option<V> {
        self.entries.insert(normalize_key(name), value)
    }

    /// Insert only when no entry exists for `name`. Returns whether it inserted.
    pub fn insert_if_absent(&mut self, name: &str, value: V) -> bool {
        match self.entries.entry(normalize_key(name)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_key(name))
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(&normalize_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries.into_values().collect()
    }

    /// `(normalized key, value)` pairs in insertion order.
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_trims_and_lowercases() {
        assert_eq!(normalize_key("  Zinc OXIDE \t"), "zinc oxide");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut map = FilterMap::new();
        map.insert("Zinc Oxide", 1);
        map.insert("Avobenzone", 2);
        let replaced = map.insert("ZINC OXIDE", 3);

        assert_eq!(replaced, Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.into_values(), vec![3, 2]);
    }

    #[test]
    fn insert_if_absent_never_replaces() {
        let mut map = FilterMap::new();
        assert!(map.insert_if_absent("Octocrylene", "declared"));
        assert!(!map.insert_if_absent(" octocrylene ", "inferred"));
        assert_eq!(map.get("OCTOCRYLENE"), Some(&"declared"));
        assert!(map.contains("octocrylene"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["octocrylene"]);
    }
}
