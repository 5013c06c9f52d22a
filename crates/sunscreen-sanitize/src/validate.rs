//! Validation gate: the only place malformed submissions are rejected.

use serde_json::{Map, Value};

use sunscreen_model::{
    RequiredField, Result, SanitizeError, Submission, SubmissionId, is_truthy, json_type_name,
};

/// Keys lifted out of the raw object into typed fields.
const KNOWN_FIELDS: [&str; 6] = ["id", "brand", "product", "type", "ingredients", "filters"];

/// Check a raw submission and copy it into a [`Submission`].
///
/// Checks run in a fixed order and the first violation is returned:
/// 1. the value is a JSON object;
/// 2. `id`, `brand`, `product`, `type`, `ingredients` are present and truthy;
/// 3. `ingredients` is an array;
/// 4. `brand`, `product` and `type` are strings.
///
/// Any truthy `id` is accepted and carried through unchanged.
///
/// The input is only read; the returned record owns copies of everything.
pub fn validate_submission(raw: &Value) -> Result<Submission> {
    let Value::Object(object) = raw else {
        return Err(SanitizeError::NotAnObject {
            found: json_type_name(raw),
        });
    };

    for field in RequiredField::ALL {
        if !object.get(field.as_str()).is_some_and(is_truthy) {
            return Err(SanitizeError::MissingField { field });
        }
    }

    let Some(Value::Array(ingredients)) = object.get(RequiredField::Ingredients.as_str()) else {
        return Err(SanitizeError::IngredientsNotArray);
    };

    let Some(id) = object.get(RequiredField::Id.as_str()) else {
        return Err(SanitizeError::MissingField {
            field: RequiredField::Id,
        });
    };

    Ok(Submission {
        id: SubmissionId::from_json(id),
        brand: text_field(object, RequiredField::Brand)?,
        product: text_field(object, RequiredField::Product)?,
        kind: text_field(object, RequiredField::Type)?,
        ingredients: ingredients.clone(),
        filters: object.get("filters").cloned(),
        extra: object
            .iter()
            .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    })
}

fn text_field(object: &Map<String, Value>, field: RequiredField) -> Result<String> {
    match object.get(field.as_str()) {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => Err(SanitizeError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}
