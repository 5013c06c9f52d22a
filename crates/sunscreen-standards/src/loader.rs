//! UV filter catalog loader.
//!
//! A standards directory holds two CSV files:
//!
//! - `uv_filters.csv`: `INCI Name`, `Category`, `Aliases` (semicolon-separated).
//!   Row order is catalog order, which decides overlapping aliases.
//! - `uv_filter_ignore.csv`: `Ingredient`. Optional.
//!
//! A catalog can also be a single JSON document:
//!
//! ```text
//! { "filters": [{ "inci": "Zinc Oxide", "type": "mineral", "aka": ["ZnO"] }],
//!   "ignore": ["Benzyl Salicylate"] }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use sunscreen_model::{FilterCatalog, IgnoreList, UvFilter};

use crate::csv_utils::{default_standards_root, get_field, read_csv_rows, split_list};
use crate::error::StandardsError;

pub const FILTERS_FILE: &str = "uv_filters.csv";
pub const IGNORE_FILE: &str = "uv_filter_ignore.csv";

const COL_INCI: &str = "INCI Name";
const COL_CATEGORY: &str = "Category";
const COL_ALIASES: &str = "Aliases";
const COL_INGREDIENT: &str = "Ingredient";

/// Single-file catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    filters: Vec<UvFilter>,
    #[serde(default)]
    ignore: Vec<String>,
}

/// Load the catalog from the default standards directory.
pub fn load_default_catalog() -> Result<FilterCatalog, StandardsError> {
    load_catalog_dir(&default_standards_root())
}

/// Load a catalog from a standards directory or a JSON file.
pub fn load_catalog(path: &Path) -> Result<FilterCatalog, StandardsError> {
    if path.is_dir() {
        load_catalog_dir(path)
    } else {
        load_catalog_json(path)
    }
}

/// Load a catalog from the CSV files of a standards directory.
pub fn load_catalog_dir(dir: &Path) -> Result<FilterCatalog, StandardsError> {
    let filters_path = dir.join(FILTERS_FILE);
    if !filters_path.is_file() {
        return Err(StandardsError::MissingFile { path: filters_path });
    }

    let rows = read_csv_rows(&filters_path, &[COL_INCI, COL_CATEGORY])?;
    let mut filters = Vec::with_capacity(rows.len());
    for row in &rows {
        filters.push(UvFilter {
            inci: get_field(row, COL_INCI),
            category: get_field(row, COL_CATEGORY),
            aliases: split_list(&get_field(row, COL_ALIASES)),
        });
    }
    check_entries(&filters_path, &filters)?;

    let ignore_path = dir.join(IGNORE_FILE);
    let ignore = if ignore_path.is_file() {
        let rows = read_csv_rows(&ignore_path, &[COL_INGREDIENT])?;
        IgnoreList::new(rows.iter().map(|row| get_field(row, COL_INGREDIENT)))
    } else {
        debug!(path = %ignore_path.display(), "no ignore list, using an empty one");
        IgnoreList::default()
    };

    Ok(build_catalog(dir, filters, ignore))
}

/// Load a catalog from a single JSON document.
pub fn load_catalog_json(path: &Path) -> Result<FilterCatalog, StandardsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let document: CatalogDocument =
        serde_json::from_str(&contents).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    check_entries(path, &document.filters)?;
    let ignore = IgnoreList::new(&document.ignore);
    Ok(build_catalog(path, document.filters, ignore))
}

fn check_entries(path: &Path, filters: &[UvFilter]) -> Result<(), StandardsError> {
    for (idx, filter) in filters.iter().enumerate() {
        if filter.inci.trim().is_empty() {
            return Err(StandardsError::invalid(
                path,
                format!("entry {} has an empty INCI name", idx + 1),
            ));
        }
        if filter.category.trim().is_empty() {
            return Err(StandardsError::invalid(
                path,
                format!("entry {} ({}) has an empty category", idx + 1, filter.inci),
            ));
        }
    }
    Ok(())
}

fn build_catalog(source: &Path, filters: Vec<UvFilter>, ignore: IgnoreList) -> FilterCatalog {
    let catalog = FilterCatalog::new(filters, ignore);
    for conflict in catalog.conflicts() {
        warn!(
            key = %conflict.key,
            winner = %conflict.winner,
            shadowed = ?conflict.shadowed,
            "catalog key claimed by more than one entry; first entry wins"
        );
    }
    info!(
        source = %source.display(),
        filters = catalog.len(),
        ignored = catalog.ignore_list().len(),
        "loaded UV filter catalog"
    );
    catalog
}
