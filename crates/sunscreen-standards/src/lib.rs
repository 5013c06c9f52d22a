#![deny(unsafe_code)]

pub mod csv_utils;
pub mod doctor;
pub mod error;
pub mod loader;

pub use crate::csv_utils::{STANDARDS_ENV_VAR, default_standards_root};
pub use crate::doctor::CatalogReport;
pub use crate::error::StandardsError;
pub use crate::loader::{load_catalog, load_catalog_dir, load_catalog_json, load_default_catalog};
