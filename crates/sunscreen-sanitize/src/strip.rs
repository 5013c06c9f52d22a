//! Product name cleanup: brand prefix and SPF/PA annotations.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use sunscreen_model::Warning;

/// `SPF50`, `spf 30+`, `SPF15`.
static SPF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSPF\s*\d+\+?").expect("Invalid SPF regex"));

/// `PA+` through `PA++++`.
static PA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPA\+{1,4}").expect("Invalid PA regex"));

/// Brackets and dashes left behind once annotations are gone.
static LEFTOVER_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()\-–]+").expect("Invalid punctuation regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Remove a leading brand name from the product name.
///
/// The prefix is compared case-insensitively but removed from the original
/// text, together with any separators (whitespace, `-`, `:`, `–`) after it.
/// When nothing would be left, the product name is returned unchanged and no
/// warning is emitted.
pub fn strip_brand_from_product(product: &str, brand: &str, warnings: &mut Vec<Warning>) -> String {
    let brand_name = brand.trim();
    if brand_name.is_empty() {
        return product.to_string();
    }
    let Some(rest) = strip_prefix_ignore_case(product.trim_start(), brand_name) else {
        return product.to_string();
    };

    let stripped = rest.trim_start_matches(is_separator).trim();
    if stripped.is_empty() {
        debug!(brand = %brand_name, "product name is only the brand; keeping it");
        return product.to_string();
    }

    debug!(brand = %brand_name, product = %stripped, "removed brand from product name");
    warnings.push(Warning::BrandRemovedFromProduct {
        brand: brand.to_string(),
    });
    stripped.to_string()
}

/// Remove SPF and PA annotations from the product name.
///
/// Emits a warning carrying the incoming name whenever the result differs
/// from it, including when only whitespace changed.
pub fn strip_spf_pa_from_product(product: &str, warnings: &mut Vec<Warning>) -> String {
    let cleaned = SPF_PATTERN.replace_all(product, "");
    let cleaned = PA_PATTERN.replace_all(&cleaned, "");
    let cleaned = LEFTOVER_PUNCTUATION.replace_all(&cleaned, " ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    if cleaned != product {
        debug!(original = %product, product = %cleaned, "removed SPF/PA annotation");
        warnings.push(Warning::SpfPaRemovedFromProduct {
            original: product.to_string(),
        });
    }
    cleaned.to_string()
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | ':' | '–')
}

/// Strip `prefix` from the start of `text`, comparing character by character
/// in lower case. Returns the remainder of `text` in its original casing.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.chars();
    let mut offset = 0;
    for expected in prefix.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        offset += actual.len_utf8();
    }
    Some(&text[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(product: &str, brand: &str) -> (String, Vec<Warning>) {
        let mut warnings = Vec::new();
        let result = strip_brand_from_product(product, brand, &mut warnings);
        (result, warnings)
    }

    fn spf(product: &str) -> (String, Vec<Warning>) {
        let mut warnings = Vec::new();
        let result = strip_spf_pa_from_product(product, &mut warnings);
        (result, warnings)
    }

    #[test]
    fn strips_brand_prefix_case_insensitively() {
        let (product, warnings) = brand("ACME Ultra Sheer", "Acme");
        assert_eq!(product, "Ultra Sheer");
        assert_eq!(
            warnings,
            vec![Warning::BrandRemovedFromProduct {
                brand: "Acme".into()
            }]
        );
    }

    #[test]
    fn strips_separators_after_brand() {
        assert_eq!(brand("Acme - Ultra", "acme").0, "Ultra");
        assert_eq!(brand("Acme: Ultra", "Acme").0, "Ultra");
        assert_eq!(brand("Acme – Ultra", "Acme").0, "Ultra");
        assert_eq!(brand("Acme-:-Ultra - Sheer", "Acme").0, "Ultra - Sheer");
    }

    #[test]
    fn keeps_product_when_only_brand_remains() {
        let (product, warnings) = brand("Acme", "acme");
        assert_eq!(product, "Acme");
        assert!(warnings.is_empty());

        let (product, warnings) = brand("Acme -", "Acme");
        assert_eq!(product, "Acme -");
        assert!(warnings.is_empty());
    }

    #[test]
    fn leaves_unrelated_products_alone() {
        let (product, warnings) = brand("Ultra Sheer by Acme", "Acme");
        assert_eq!(product, "Ultra Sheer by Acme");
        assert!(warnings.is_empty());
    }

    #[test]
    fn blank_brand_never_strips() {
        let (product, warnings) = brand("Ultra Sheer", "   ");
        assert_eq!(product, "Ultra Sheer");
        assert!(warnings.is_empty());
    }

    #[test]
    fn handles_non_ascii_brands() {
        assert_eq!(brand("ÉCLAT Soleil Fluide", "Éclat").0, "Soleil Fluide");
        assert_eq!(brand("Ölhaut", "ÖLHAUTX").0, "Ölhaut");
    }

    #[test]
    fn strips_spf_and_pa_annotations() {
        assert_eq!(spf("Ultra Sheer SPF50+").0, "Ultra Sheer");
        assert_eq!(spf("Ultra Sheer spf 30").0, "Ultra Sheer");
        assert_eq!(spf("UV Essence SPF50+ PA++++").0, "UV Essence");
        assert_eq!(spf("Daily Gel (SPF 30)").0, "Daily Gel");
        assert_eq!(spf("Daily Gel - SPF 30 - PA+++").0, "Daily Gel");
    }

    #[test]
    fn warning_carries_incoming_name() {
        let (product, warnings) = spf("Ultra Sheer SPF50+");
        assert_eq!(product, "Ultra Sheer");
        assert_eq!(
            warnings,
            vec![Warning::SpfPaRemovedFromProduct {
                original: "Ultra Sheer SPF50+".into()
            }]
        );
    }

    #[test]
    fn clean_names_produce_no_warning() {
        let (product, warnings) = spf("Ultra Sheer");
        assert_eq!(product, "Ultra Sheer");
        assert!(warnings.is_empty());
    }

    #[test]
    fn leftover_dashes_become_spaces() {
        let (product, warnings) = spf("Sun-Kissed Mist");
        assert_eq!(product, "Sun Kissed Mist");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn spf_needs_a_word_boundary() {
        assert_eq!(spf("CrispF50 Mist").0, "CrispF50 Mist");
        assert_eq!(spf("Spa++ Mist").0, "Spa++ Mist");
    }

    #[test]
    fn can_empty_the_name() {
        assert_eq!(spf("SPF 50").0, "");
    }
}
