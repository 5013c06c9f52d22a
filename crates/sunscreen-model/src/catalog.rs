//! UV filter reference catalog.
//!
//! The catalog is built once and then only read. It holds:
//! - **Filter entries** in catalog order: canonical INCI name, category
//!   (`mineral`, `chemical`, ...) and aliases (trade names, older INCI names).
//! - **Ignore list**: ingredient names that are never treated as filters, even
//!   when they textually resemble one.
//!
//! ## Lookup
//!
//! Names and aliases are compared by their [`normalize_key`] form. When two
//! entries claim the same key, the entry that comes first in catalog order
//! wins; the collision is recorded as a [`CatalogConflict`] rather than
//! rejected.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::lookup::normalize_key;

/// A known UV filter compound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvFilter {
    /// Canonical INCI name (e.g., "Zinc Oxide").
    pub inci: String,

    /// Filter class (e.g., "mineral", "chemical").
    #[serde(alias = "type")]
    pub category: String,

    /// Alternative names that resolve to this entry.
    #[serde(default, alias = "aka")]
    pub aliases: Vec<String>,
}

impl UvFilter {
    pub fn new<I, S>(inci: impl Into<String>, category: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inci: inci.into(),
            category: category.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalized lookup keys: the INCI name first, then each alias, deduplicated.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::with_capacity(self.aliases.len() + 1);
        for name in std::iter::once(&self.inci).chain(&self.aliases) {
            let key = normalize_key(name);
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

/// Ingredient names excluded from filter detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IgnoreList {
    names: BTreeSet<String>,
}

impl IgnoreList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| normalize_key(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize_key(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Normalized names, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for IgnoreList {
    fn from(names: Vec<String>) -> Self {
        IgnoreList::new(names)
    }
}

impl From<IgnoreList> for Vec<String> {
    fn from(list: IgnoreList) -> Self {
        list.names.into_iter().collect()
    }
}

/// A lookup key claimed by more than one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogConflict {
    /// The normalized name or alias.
    pub key: String,
    /// INCI name of the entry lookups resolve to.
    pub winner: String,
    /// INCI names of later entries that also claim the key.
    pub shadowed: Vec<String>,
}

/// Immutable filter catalog plus ignore list.
///
/// Safe to share by reference across any number of concurrent pipeline runs.
#[derive(Debug, Clone)]
pub struct FilterCatalog {
    filters: Vec<UvFilter>,
    ignore: IgnoreList,
    /// Normalized name/alias -> index of the first entry claiming it.
    index: HashMap<String, usize>,
    conflicts: BTreeMap<String, CatalogConflict>,
}

impl FilterCatalog {
    pub fn new(filters: Vec<UvFilter>, ignore: IgnoreList) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut conflicts: BTreeMap<String, CatalogConflict> = BTreeMap::new();

        for (position, filter) in filters.iter().enumerate() {
            for key in filter.keys() {
                match index.get(&key) {
                    Some(&winner) => {
                        conflicts
                            .entry(key.clone())
                            .or_insert_with(|| CatalogConflict {
                                key,
                                winner: filters[winner].inci.clone(),
                                shadowed: Vec::new(),
                            })
                            .shadowed
                            .push(filter.inci.clone());
                    }
                    None => {
                        index.insert(key, position);
                    }
                }
            }
        }

        Self {
            filters,
            ignore,
            index,
            conflicts,
        }
    }

    /// First entry, in catalog order, whose INCI name or alias matches `ingredient`.
    pub fn find(&self, ingredient: &str) -> Option<&UvFilter> {
        self.index
            .get(&normalize_key(ingredient))
            .map(|&position| &self.filters[position])
    }

    pub fn is_ignored(&self, ingredient: &str) -> bool {
        self.ignore.contains(ingredient)
    }

    /// Entries in catalog order.
    pub fn filters(&self) -> &[UvFilter] {
        &self.filters
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore
    }

    /// Keys claimed by more than one entry, sorted by key.
    pub fn conflicts(&self) -> Vec<CatalogConflict> {
        self.conflicts.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FilterCatalog {
        FilterCatalog::new(
            vec![
                UvFilter::new("Zinc Oxide", "mineral", ["ZnO", "Zinc Oxide Nano"]),
                UvFilter::new(
                    "Butyl Methoxydibenzoylmethane",
                    "chemical",
                    ["Avobenzone", "Parsol 1789"],
                ),
                UvFilter::new("Avobenzone Nano", "chemical", ["avobenzone", "ZnO"]),
            ],
            IgnoreList::new(["Benzyl Salicylate"]),
        )
    }

    #[test]
    fn finds_by_inci_and_alias_case_insensitively() {
        let catalog = catalog();
        assert_eq!(
            catalog.find("  zinc oxide ").map(|f| f.inci.as_str()),
            Some("Zinc Oxide")
        );
        assert_eq!(
            catalog.find("PARSOL 1789").map(|f| f.inci.as_str()),
            Some("Butyl Methoxydibenzoylmethane")
        );
        assert!(catalog.find("Octocrylene").is_none());
    }

    #[test]
    fn first_entry_wins_overlapping_aliases() {
        let catalog = catalog();
        assert_eq!(
            catalog.find("Avobenzone").map(|f| f.inci.as_str()),
            Some("Butyl Methoxydibenzoylmethane")
        );
        assert_eq!(catalog.find("znO").map(|f| f.inci.as_str()), Some("Zinc Oxide"));
        assert_eq!(
            catalog.find("avobenzone nano").map(|f| f.inci.as_str()),
            Some("Avobenzone Nano")
        );
    }

    #[test]
    fn records_conflicts_sorted_by_key() {
        let conflicts = catalog().conflicts();
        assert_eq!(
            conflicts,
            vec![
                CatalogConflict {
                    key: "avobenzone".into(),
                    winner: "Butyl Methoxydibenzoylmethane".into(),
                    shadowed: vec!["Avobenzone Nano".into()],
                },
                CatalogConflict {
                    key: "zno".into(),
                    winner: "Zinc Oxide".into(),
                    shadowed: vec!["Avobenzone Nano".into()],
                },
            ]
        );
    }

    #[test]
    fn duplicate_alias_within_one_entry_is_not_a_conflict() {
        let catalog = FilterCatalog::new(
            vec![UvFilter::new("Homosalate", "chemical", ["HOMOSALATE", "HMS"])],
            IgnoreList::default(),
        );
        assert!(catalog.conflicts().is_empty());
        assert_eq!(catalog.filters()[0].keys(), vec!["homosalate", "hms"]);
    }

    #[test]
    fn ignore_list_compares_normalized_names() {
        let catalog = catalog();
        assert!(catalog.is_ignored(" BENZYL salicylate"));
        assert!(!catalog.is_ignored("Ethylhexyl Salicylate"));
        assert_eq!(catalog.ignore_list().len(), 1);
    }
}
