//! Submission records before and after sanitization.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::filter::Filter;

/// Identifier of a submission, as supplied by the submitter.
///
/// Any truthy JSON value is accepted; values other than strings and numbers
/// are carried verbatim in [`SubmissionId::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionId {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl SubmissionId {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => SubmissionId::Text(text.clone()),
            Value::Number(number) => SubmissionId::Number(number.clone()),
            other => SubmissionId::Other(other.clone()),
        }
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionId::Text(text) => f.write_str(text),
            SubmissionId::Number(number) => write!(f, "{number}"),
            SubmissionId::Other(value) => write!(f, "{value}"),
        }
    }
}

/// A submission that passed the validation gate.
///
/// Construct it through the gate rather than by hand: the gate guarantees the
/// required fields were present and truthy. `ingredients` and `filters` still
/// hold the submitter's raw values; later pipeline stages normalize them.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub brand: String,
    pub product: String,
    pub kind: String,
    pub ingredients: Vec<Value>,
    pub filters: Option<Value>,
    /// Every other field of the input object, untouched.
    pub extra: Map<String, Value>,
}

/// The normalized record handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizedSubmission {
    pub id: SubmissionId,
    pub brand: String,
    pub product: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ingredients: Vec<String>,
    pub filters: Vec<Filter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SanitizedSubmission {
    /// Re-emit the record in submission shape, with its filters declared.
    ///
    /// Feeding the result back through the pipeline is a fixed point.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy.
///
/// Empty arrays and objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
