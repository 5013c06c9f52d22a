//! Property tests: fixed point, ignore list, catalog determinism.

use proptest::prelude::*;
use serde_json::{Value, json};

use sunscreen_model::{FilterCatalog, IgnoreList, UvFilter, Warning};
use sunscreen_sanitize::sanitize_submission;

const BRANDS: [&str; 3] = ["Acme", "Soleil", "La Roche"];
const WORDS: [&str; 7] = ["Ultra", "Sheer", "Daily", "Gel", "Fluid", "Mist", "Invisible"];
const SEPARATORS: [&str; 4] = [" ", " - ", ": ", " – "];
const ANNOTATIONS: [&str; 6] = ["", " SPF50+", " spf 30", " (SPF 15)", " SPF50 PA++++", " PA+++"];
const INGREDIENTS: [&str; 12] = [
    "Water",
    "Glycerin",
    "Zinc Oxide",
    "zno",
    "Avobenzone",
    "PARSOL 1789",
    "Octisalate",
    "Homosalate",
    "Benzyl Salicylate",
    "Isoamyl Cinnamate Derivative",
    "Novel Triazine",
    "  Titanium Dioxide ",
];
const DECLARED: [&str; 4] = ["Zinc Oxide", "avobenzone", "Octocrylene", "HOMOSALATE"];

fn catalog() -> FilterCatalog {
    FilterCatalog::new(
        vec![
            UvFilter::new("Zinc Oxide", "mineral", ["ZnO"]),
            UvFilter::new("Titanium Dioxide", "mineral", ["TiO2"]),
            UvFilter::new(
                "Butyl Methoxydibenzoylmethane",
                "chemical",
                ["Avobenzone", "Parsol 1789"],
            ),
            UvFilter::new("Ethylhexyl Salicylate", "chemical", ["Octisalate"]),
            UvFilter::new("Homosalate", "chemical", Vec::<String>::new()),
            UvFilter::new("Octocrylene", "chemical", Vec::<String>::new()),
        ],
        IgnoreList::new(["Benzyl Salicylate", "Sodium Benzotriazolyl Butylphenol Sulfonate"]),
    )
}

/// Flip the case of characters where `mask` says so.
fn with_case(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().copied().chain(std::iter::repeat(false)))
        .map(|(ch, upper)| {
            if upper {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

fn raw_submission() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(BRANDS.to_vec()),
        any::<bool>(),
        prop::sample::select(SEPARATORS.to_vec()),
        prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..4),
        prop::sample::select(ANNOTATIONS.to_vec()),
        prop::collection::vec(prop::sample::select(INGREDIENTS.to_vec()), 1..6),
        prop::option::of(prop::collection::vec(
            prop::sample::select(DECLARED.to_vec()),
            0..3,
        )),
    )
        .prop_map(
            |(brand, prefixed, separator, words, annotation, ingredients, declared)| {
                let body = words.join(" ");
                let product = if prefixed {
                    format!("{brand}{separator}{body}{annotation}")
                } else {
                    format!("{body}{annotation}")
                };
                let mut raw = json!({
                    "id": "prop",
                    "brand": brand,
                    "product": product,
                    "type": "Lotion",
                    "ingredients": ingredients,
                });
                if let Some(declared) = declared {
                    raw["filters"] = declared
                        .iter()
                        .map(|name| json!({ "name": name, "category": "declared" }))
                        .collect();
                }
                raw
            },
        )
}

proptest! {
    #[test]
    fn second_pass_is_a_fixed_point(raw in raw_submission()) {
        let catalog = catalog();
        let first = sanitize_submission(&raw, &catalog).expect("first pass");
        let again = first.sunscreen.to_value().expect("re-emit");
        let second = sanitize_submission(&again, &catalog).expect("second pass");

        let corrections: Vec<&Warning> = second
            .warnings
            .iter()
            .filter(|w| !matches!(w, Warning::UnknownUvFilter { .. }))
            .collect();
        prop_assert!(corrections.is_empty(), "unexpected warnings: {:?}", corrections);
        prop_assert_eq!(second.sunscreen, first.sunscreen);
    }

    #[test]
    fn ignored_names_never_detect_or_warn(
        name in prop::sample::select(vec![
            "Benzyl Salicylate",
            "Sodium Benzotriazolyl Butylphenol Sulfonate",
        ]),
        mask in prop::collection::vec(any::<bool>(), 0..48),
        pad in 0usize..3,
    ) {
        let ingredient = format!("{}{}{}", " ".repeat(pad), with_case(name, &mask), " ".repeat(pad));
        let raw = json!({
            "id": 1,
            "brand": "Acme",
            "product": "Daily Fluid",
            "type": "lotion",
            "ingredients": [ingredient, "Water"],
        });

        let outcome = sanitize_submission(&raw, &catalog()).expect("sanitize");
        prop_assert!(outcome.warnings.is_empty());
        prop_assert!(outcome.sunscreen.filters.is_empty());
    }

    #[test]
    fn overlapping_alias_resolves_to_first_entry(
        mask in prop::collection::vec(any::<bool>(), 0..16),
    ) {
        let catalog = FilterCatalog::new(
            vec![
                UvFilter::new("Bemotrizinol", "chemical", ["Tinosorb S"]),
                UvFilter::new("Bisoctrizole", "chemical", ["Tinosorb S", "Tinosorb M"]),
            ],
            IgnoreList::default(),
        );
        let alias = with_case("tinosorb s", &mask);

        for _ in 0..3 {
            let found = catalog.find(&alias).map(|f| f.inci.as_str());
            prop_assert_eq!(found, Some("Bemotrizinol"));
        }
    }
}
