//! Text helpers shared by the pipeline stages.

pub use sunscreen_model::normalize_key as normalize;

/// Title-case an INCI name: lower-case everything, then upper-case the first
/// character of each space-separated word.
///
/// Hyphenated parts stay lower-case after the first ("Bis-ethylhexyloxyphenol").
pub fn title_case_inci(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case_inci("ZINC OXIDE"), "Zinc Oxide");
        assert_eq!(title_case_inci("zinc oxide"), "Zinc Oxide");
        assert_eq!(
            title_case_inci("Bis-Ethylhexyloxyphenol Methoxyphenyl Triazine"),
            "Bis-ethylhexyloxyphenol Methoxyphenyl Triazine"
        );
        assert_eq!(title_case_inci("4-methylbenzylidene camphor"), "4-methylbenzylidene Camphor");
    }

    #[test]
    fn keeps_spacing_as_is() {
        assert_eq!(title_case_inci("ethylhexyl  triazone"), "Ethylhexyl  Triazone");
        assert_eq!(title_case_inci(""), "");
    }
}
