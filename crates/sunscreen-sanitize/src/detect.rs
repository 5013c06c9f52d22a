//! Per-ingredient UV filter detection.
//!
//! Each ingredient is classified on its own, in this order:
//! 1. on the ignore list: skipped, no warning;
//! 2. catalog name or alias match: recorded as a detected filter;
//! 3. contains a UV-filter word fragment: `unknown-uv-filter` warning;
//! 4. otherwise inert.

use tracing::{debug, trace};

use sunscreen_model::{DetectedFilter, FilterCatalog, FilterMap, UvFilter, Warning};

use crate::text::{normalize, title_case_inci};

/// Word fragments typical of UV filter chemistry.
pub const UV_FILTER_FRAGMENTS: [&str; 7] = [
    "triazone",
    "triazine",
    "benzotriazol",
    "benzophenone",
    "cinnamate",
    "salicylate",
    "benzylidene",
];

/// Outcome of classifying one ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection<'a> {
    /// On the ignore list.
    Ignored,
    /// Matches a catalog entry by INCI name or alias.
    Known(&'a UvFilter),
    /// Not in the catalog, but looks like a UV filter.
    Suspected,
    /// Not a filter as far as we can tell.
    Inert,
}

/// Conservative keyword check for ingredients that may be UV filters.
pub fn looks_like_uv_filter(name: &str) -> bool {
    let name = normalize(name);
    UV_FILTER_FRAGMENTS
        .iter()
        .any(|fragment| name.contains(fragment))
}

pub fn classify_ingredient<'a>(ingredient: &str, catalog: &'a FilterCatalog) -> Detection<'a> {
    if catalog.is_ignored(ingredient) {
        return Detection::Ignored;
    }
    if let Some(filter) = catalog.find(ingredient) {
        return Detection::Known(filter);
    }
    if looks_like_uv_filter(ingredient) {
        return Detection::Suspected;
    }
    Detection::Inert
}

/// Detect catalog filters across an ingredient list.
///
/// Results are keyed by the normalized canonical INCI name in first-detection
/// order; detecting the same filter again overwrites the value in place.
/// Suspected filters only produce an `unknown-uv-filter` warning.
pub fn detect_filters(
    ingredients: &[String],
    catalog: &FilterCatalog,
    warnings: &mut Vec<Warning>,
) -> FilterMap<DetectedFilter> {
    let mut detected = FilterMap::new();

    for ingredient in ingredients {
        match classify_ingredient(ingredient, catalog) {
            Detection::Ignored => {
                trace!(ingredient = %ingredient, "ingredient on ignore list");
            }
            Detection::Known(filter) => {
                debug!(ingredient = %ingredient, filter = %filter.inci, "matched catalog filter");
                detected.insert(
                    &filter.inci,
                    DetectedFilter {
                        name: title_case_inci(&filter.inci),
                        category: filter.category.clone(),
                    },
                );
            }
            Detection::Suspected => {
                debug!(ingredient = %ingredient, "possible UV filter not in catalog");
                warnings.push(Warning::UnknownUvFilter {
                    ingredient: ingredient.clone(),
                });
            }
            Detection::Inert => {}
        }
    }

    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunscreen_model::IgnoreList;

    fn catalog() -> FilterCatalog {
        FilterCatalog::new(
            vec![
                UvFilter::new("ZINC OXIDE", "mineral", ["ZnO"]),
                UvFilter::new("Ethylhexyl Salicylate", "chemical", ["Octisalate"]),
                UvFilter::new("Octocrylene", "chemical", Vec::<String>::new()),
            ],
            IgnoreList::new(["Benzyl Salicylate", "Octocrylene"]),
        )
    }

    #[test]
    fn keyword_heuristic_is_case_insensitive() {
        assert!(looks_like_uv_filter("Isoamyl CINNAMATE Derivative"));
        assert!(looks_like_uv_filter("novel triazine"));
        assert!(looks_like_uv_filter("Drometrizole Benzotriazolyl"));
        assert!(!looks_like_uv_filter("Homosalate Derivative"));
        assert!(!looks_like_uv_filter("Aqua"));
    }

    #[test]
    fn classifies_in_precedence_order() {
        let catalog = catalog();
        assert_eq!(
            classify_ingredient("benzyl salicylate", &catalog),
            Detection::Ignored
        );
        assert_eq!(
            classify_ingredient("Octocrylene", &catalog),
            Detection::Ignored
        );
        assert!(matches!(
            classify_ingredient("octisalate", &catalog),
            Detection::Known(filter) if filter.inci == "Ethylhexyl Salicylate"
        ));
        assert_eq!(
            classify_ingredient("Amyl Salicylate", &catalog),
            Detection::Suspected
        );
        assert_eq!(classify_ingredient("Glycerin", &catalog), Detection::Inert);
    }

    #[test]
    fn detects_title_cased_canonical_names() {
        let mut warnings = Vec::new();
        let ingredients = vec!["Water".to_string(), "zno".to_string()];
        let detected = detect_filters(&ingredients, &catalog(), &mut warnings);

        assert!(warnings.is_empty());
        assert_eq!(
            detected.into_entries(),
            vec![(
                "zinc oxide".to_string(),
                DetectedFilter {
                    name: "Zinc Oxide".into(),
                    category: "mineral".into(),
                }
            )]
        );
    }

    #[test]
    fn repeated_detection_is_idempotent() {
        let mut warnings = Vec::new();
        let ingredients = vec![
            "Zinc Oxide".to_string(),
            "Octisalate".to_string(),
            "ZnO".to_string(),
        ];
        let detected = detect_filters(&ingredients, &catalog(), &mut warnings);

        assert!(warnings.is_empty());
        assert_eq!(
            detected.keys().collect::<Vec<_>>(),
            vec!["zinc oxide", "ethylhexyl salicylate"]
        );
    }

    #[test]
    fn suspected_filters_warn_with_ingredient_text() {
        let mut warnings = Vec::new();
        let ingredients = vec!["Isoamyl Cinnamate Derivative".to_string()];
        let detected = detect_filters(&ingredients, &catalog(), &mut warnings);

        assert!(detected.is_empty());
        assert_eq!(
            warnings,
            vec![Warning::UnknownUvFilter {
                ingredient: "Isoamyl Cinnamate Derivative".into()
            }]
        );
    }
}
