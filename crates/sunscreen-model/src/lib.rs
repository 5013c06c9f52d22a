//! Data model for sunscreen submissions and the UV filter catalog.
//!
//! - [`submission`]: raw-but-validated [`Submission`] and the [`SanitizedSubmission`] output
//! - [`filter`]: declared and detected UV filters on a record
//! - [`warning`]: non-fatal [`Warning`]s emitted by the sanitizer
//! - [`catalog`]: the read-only [`FilterCatalog`] and [`IgnoreList`]
//! - [`lookup`]: case-insensitive keys and the insertion-ordered [`FilterMap`]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod lookup;
pub mod submission;
pub mod warning;

pub use catalog::{CatalogConflict, FilterCatalog, IgnoreList, UvFilter};
pub use error::{RequiredField, Result, SanitizeError};
pub use filter::{DetectedFilter, Filter};
pub use lookup::{FilterMap, normalize_key};
pub use submission::{SanitizedSubmission, Submission, SubmissionId, is_truthy, json_type_name};
pub use warning::Warning;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_their_field() {
        let error = SanitizeError::MissingField {
            field: RequiredField::Brand,
        };
        assert_eq!(error.to_string(), "Missing required field: brand");
        assert_eq!(error.field(), Some(RequiredField::Brand));

        assert_eq!(
            SanitizeError::EmptyProduct.field(),
            Some(RequiredField::Product)
        );
        assert_eq!(
            SanitizeError::NotAnObject { found: "array" }.field(),
            None
        );
    }

    #[test]
    fn required_fields_are_checked_in_declaration_order() {
        let keys: Vec<&str> = RequiredField::ALL
            .iter()
            .copied()
            .map(RequiredField::as_str)
            .collect();
        assert_eq!(keys, vec!["id", "brand", "product", "type", "ingredients"]);
    }
}
