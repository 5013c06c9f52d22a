//! Sanitization and UV filter inference for sunscreen submissions.
//!
//! The entry point is [`sanitize_submission`]: it takes an untrusted JSON
//! submission and a read-only [`FilterCatalog`](sunscreen_model::FilterCatalog)
//! and returns the normalized record with an ordered list of
//! [`Warning`](sunscreen_model::Warning)s, or a
//! [`SanitizeError`](sunscreen_model::SanitizeError) when the input is refused.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use sunscreen_model::{FilterCatalog, IgnoreList, UvFilter, Warning};
//! use sunscreen_sanitize::sanitize_submission;
//!
//! let catalog = FilterCatalog::new(
//!     vec![UvFilter::new("Zinc Oxide", "mineral", ["ZnO"])],
//!     IgnoreList::default(),
//! );
//! let raw = json!({
//!     "id": 1,
//!     "brand": "Acme",
//!     "product": "Acme Mineral Fluid",
//!     "type": "Fluid",
//!     "ingredients": ["Water", "zinc oxide"]
//! });
//!
//! let outcome = sanitize_submission(&raw, &catalog).unwrap();
//! assert_eq!(outcome.sunscreen.product, "Mineral Fluid");
//! assert_eq!(outcome.sunscreen.kind, "fluid");
//! assert_eq!(outcome.sunscreen.filters[0].name, "Zinc Oxide");
//! assert_eq!(outcome.warnings.len(), 2);
//! assert!(matches!(outcome.warnings[1], Warning::InferredFilter { .. }));
//! ```
//!
//! Every record goes through [`validate_submission`] first; a hand-built
//! [`Submission`](sunscreen_model::Submission) cannot be fed to the pipeline:
//!
//! ```compile_fail
//! use sunscreen_sanitize::pipeline::sanitize_validated;
//! ```
//!
//! # Design Principles
//!
//! - **Pure**: no I/O, no shared mutable state; the catalog is passed in
//! - **Fatal vs. non-fatal**: refused inputs are errors, corrections are warnings
//! - **Declared data wins**: inference never overrides what the submitter declared

pub mod detect;
pub mod ingredients;
pub mod pipeline;
pub mod reconcile;
pub mod strip;
pub mod text;
pub mod validate;

pub use detect::{Detection, UV_FILTER_FRAGMENTS, classify_ingredient, looks_like_uv_filter};
pub use pipeline::{SanitizeOutcome, sanitize_submission};
pub use validate::validate_submission;
