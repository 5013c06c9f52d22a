#![deny(unsafe_code)]

use std::collections::BTreeMap;

use sunscreen_model::{CatalogConflict, FilterCatalog};

/// Health summary of a loaded catalog, for data-quality review.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogReport {
    pub schema: String,
    pub schema_version: u32,
    pub counts: CatalogCounts,
    /// Entry count per category, keyed by lower-cased category.
    pub categories: BTreeMap<String, usize>,
    pub conflicts: Vec<CatalogConflict>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogCounts {
    pub filters: usize,
    pub aliases: usize,
    pub ignored: usize,
}

impl CatalogReport {
    pub fn from_catalog(catalog: &FilterCatalog) -> Self {
        let mut categories = BTreeMap::new();
        for filter in catalog.filters() {
            *categories
                .entry(filter.category.trim().to_lowercase())
                .or_insert(0) += 1;
        }
        Self {
            schema: "sunscreen.catalog-doctor".to_string(),
            schema_version: 1,
            counts: CatalogCounts {
                filters: catalog.len(),
                aliases: catalog.filters().iter().map(|f| f.aliases.len()).sum(),
                ignored: catalog.ignore_list().len(),
            },
            categories,
            conflicts: catalog.conflicts(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}
