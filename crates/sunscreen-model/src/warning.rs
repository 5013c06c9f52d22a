use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-fatal note about a correction or inference made during sanitization.
///
/// Serialized as `{"type": "<tag>", ...}`, e.g.
/// `{"type": "brand-removed-from-product", "brand": "Acme"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Warning {
    /// The brand name was stripped from the front of the product name.
    BrandRemovedFromProduct { brand: String },
    /// SPF/PA annotations were stripped; `original` is the name before this step.
    SpfPaRemovedFromProduct { original: String },
    /// An ingredient looks like a UV filter but is not in the catalog.
    UnknownUvFilter { ingredient: String },
    /// A catalog filter was found in the ingredients but not declared.
    InferredFilter { filter: String },
}

impl Warning {
    /// The serialized `type` tag.
    pub fn code(&self) -> &'static str {
        match self {
            Warning::BrandRemovedFromProduct { .. } => "brand-removed-from-product",
            Warning::SpfPaRemovedFromProduct { .. } => "spf-pa-removed-from-product",
            Warning::UnknownUvFilter { .. } => "unknown-uv-filter",
            Warning::InferredFilter { .. } => "inferred-filter",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::BrandRemovedFromProduct { brand } => {
                write!(f, "removed brand \"{brand}\" from product name")
            }
            Warning::SpfPaRemovedFromProduct { original } => {
                write!(f, "removed SPF/PA annotation from \"{original}\"")
            }
            Warning::UnknownUvFilter { ingredient } => {
                write!(f, "\"{ingredient}\" looks like a UV filter but is not in the catalog")
            }
            Warning::InferredFilter { filter } => {
                write!(f, "inferred undeclared filter \"{filter}\" from ingredients")
            }
        }
    }
}
