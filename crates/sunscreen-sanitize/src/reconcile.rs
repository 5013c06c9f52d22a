//! Merge of declared and detected filters.

use serde_json::Value;
use tracing::debug;

use sunscreen_model::{DetectedFilter, Filter, FilterMap, Warning};

/// Build the declared-filter map from a submission's raw `filters` value.
///
/// Anything but an array declares nothing. Entries without a usable name are
/// skipped; a later entry with the same case-insensitive name replaces an
/// earlier one in its original position.
pub fn declared_filters(filters: Option<&Value>) -> FilterMap<Filter> {
    let mut declared = FilterMap::new();
    let Some(Value::Array(entries)) = filters else {
        return declared;
    };
    for entry in entries {
        match Filter::from_declared(entry) {
            Some(filter) => {
                let name = filter.name.clone();
                declared.insert(&name, filter);
            }
            None => debug!(entry = %entry, "skipping declared filter without a name"),
        }
    }
    declared
}

/// Add detected filters the submitter did not declare.
///
/// Declared entries always win. Each added filter emits an `inferred-filter`
/// warning. Output order: declared entries first, then inferred ones in
/// detection order.
pub fn reconcile_filters(
    mut declared: FilterMap<Filter>,
    detected: FilterMap<DetectedFilter>,
    warnings: &mut Vec<Warning>,
) -> Vec<Filter> {
    for (key, filter) in detected.into_entries() {
        if declared.contains(&key) {
            debug!(filter = %filter.name, "filter already declared");
            continue;
        }
        warnings.push(Warning::InferredFilter {
            filter: filter.name.clone(),
        });
        declared.insert_if_absent(&key, filter.into());
    }
    declared.into_values()
}
