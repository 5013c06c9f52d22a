use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A UV filter listed on a sanitized record.
///
/// Declared filters keep whatever extra fields the submitter attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Filter {
    pub fn new(name: impl Into<String>, category: Option<String>) -> Self {
        Self {
            name: name.into(),
            category,
            extra: Map::new(),
        }
    }

    /// Read a declared filter entry from submitter data.
    ///
    /// Returns `None` unless the entry is an object with a non-empty string
    /// `name`. A non-string `category` is kept verbatim among the extra fields.
    pub fn from_declared(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;
        let name = object.get("name")?.as_str().filter(|name| !name.is_empty())?;
        let (category, keep_category) = match object.get("category") {
            Some(Value::String(category)) => (Some(category.clone()), false),
            Some(Value::Null) | None => (None, false),
            Some(_) => (None, true),
        };
        let extra = object
            .iter()
            .filter(|(key, _)| key.as_str() != "name" && (keep_category || key.as_str() != "category"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Some(Self {
            name: name.to_string(),
            category,
            extra,
        })
    }
}

/// A filter found by catalog lookup against an ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFilter {
    /// Title-cased canonical INCI name.
    pub name: String,
    pub category: String,
}

impl From<DetectedFilter> for Filter {
    fn from(detected: DetectedFilter) -> Self {
        Filter::new(detected.name, Some(detected.category))
    }
}
