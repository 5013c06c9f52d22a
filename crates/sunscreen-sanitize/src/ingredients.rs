use serde_json::Value;

use sunscreen_model::{Result, SanitizeError};

/// Trim text entries and drop everything else.
///
/// Non-string entries count as empty. Fails when nothing is left.
pub fn normalize_ingredients(raw: &[Value]) -> Result<Vec<String>> {
    let ingredients: Vec<String> = raw
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(String::from)
        .collect();

    if ingredients.is_empty() {
        return Err(SanitizeError::EmptyIngredients);
    }
    Ok(ingredients)
}
