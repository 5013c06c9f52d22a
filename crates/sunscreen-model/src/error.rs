use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Fields a submission must carry before the pipeline touches it.
///
/// The declaration order is the order in which the validation gate checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Id,
    Brand,
    Product,
    Type,
    Ingredients,
}

impl RequiredField {
    pub const ALL: [RequiredField; 5] = [
        RequiredField::Id,
        RequiredField::Brand,
        RequiredField::Product,
        RequiredField::Type,
        RequiredField::Ingredients,
    ];

    /// JSON key of the field on a submission.
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::Brand => "brand",
            RequiredField::Product => "product",
            RequiredField::Type => "type",
            RequiredField::Ingredients => "ingredients",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal conditions that abort sanitization of a submission.
///
/// A given input always fails with the same variant; retrying is pointless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitizeError {
    #[error("Invalid sunscreen object: expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Missing required field: {field}")]
    MissingField { field: RequiredField },

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: RequiredField,
        expected: &'static str,
    },

    #[error("ingredients must be an array")]
    IngredientsNotArray,

    #[error("ingredients array is empty after normalization")]
    EmptyIngredients,

    #[error("Product name empty after sanitation")]
    EmptyProduct,
}

impl SanitizeError {
    /// The submission field this error is about, when it names one.
    pub fn field(&self) -> Option<RequiredField> {
        match self {
            SanitizeError::MissingField { field } | SanitizeError::InvalidField { field, .. } => {
                Some(*field)
            }
            SanitizeError::IngredientsNotArray | SanitizeError::EmptyIngredients => {
                Some(RequiredField::Ingredients)
            }
            SanitizeError::EmptyProduct => Some(RequiredField::Product),
            SanitizeError::NotAnObject { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SanitizeError>;
