//! Batch sanitization over a submissions document.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use sunscreen_model::{FilterCatalog, SanitizedSubmission, SubmissionId, Warning};
use sunscreen_sanitize::sanitize_submission;

/// Everything produced by one batch run.
#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    pub sunscreens: Vec<SanitizedSubmission>,
    /// Input position of each entry of `sunscreens`.
    #[serde(skip)]
    positions: Vec<usize>,
    /// Warnings per sanitized submission; submissions without warnings are omitted.
    pub warnings: Vec<SubmissionWarnings>,
    pub errors: Vec<SubmissionFailure>,
}

/// Warnings of one sanitized submission.
///
/// `index` is the position in the input document, so records sharing an
/// `id` stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionWarnings {
    pub index: usize,
    pub id: SubmissionId,
    pub warnings: Vec<Warning>,
}

/// A submission the sanitizer refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionFailure {
    /// Position in the input document (0 for a single object).
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub error: String,
}

impl BatchResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.iter().map(|entry| entry.warnings.len()).sum()
    }

    /// Input position of the record at `slot` in `sunscreens`.
    pub fn position(&self, slot: usize) -> Option<usize> {
        self.positions.get(slot).copied()
    }

    /// Warnings emitted for the record at `slot` in `sunscreens`.
    pub fn warnings_for(&self, slot: usize) -> &[Warning] {
        let Some(index) = self.position(slot) else {
            return &[];
        };
        self.warnings
            .iter()
            .find(|entry| entry.index == index)
            .map(|entry| entry.warnings.as_slice())
            .unwrap_or_default()
    }

    /// Order records by brand, then product, ignoring case. Stable for ties.
    pub fn sort_by_brand_product(&mut self) {
        let mut paired: Vec<(usize, SanitizedSubmission)> = self
            .positions
            .drain(..)
            .zip(self.sunscreens.drain(..))
            .collect();
        paired.sort_by(|(_, a), (_, b)| compare_brand_product(a, b));
        (self.positions, self.sunscreens) = paired.into_iter().unzip();
    }
}

/// Sanitize a document holding one submission object or an array of them.
///
/// Each element is processed independently; a refused element is recorded
/// in `errors` and the rest of the batch continues.
pub fn sanitize_batch(document: &Value, catalog: &FilterCatalog) -> BatchResult {
    let items: Vec<&Value> = match document {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut result = BatchResult::default();
    for (index, raw) in items.into_iter().enumerate() {
        match sanitize_submission(raw, catalog) {
            Ok(outcome) => {
                if !outcome.warnings.is_empty() {
                    result.warnings.push(SubmissionWarnings {
                        index,
                        id: outcome.sunscreen.id.clone(),
                        warnings: outcome.warnings,
                    });
                }
                result.sunscreens.push(outcome.sunscreen);
                result.positions.push(index);
            }
            Err(error) => {
                let id = raw_id(raw);
                warn!(index, id = id.as_deref().unwrap_or("-"), %error, "submission rejected");
                result.errors.push(SubmissionFailure {
                    index,
                    id,
                    error: error.to_string(),
                });
            }
        }
    }

    info!(
        sanitized = result.sunscreens.len(),
        rejected = result.errors.len(),
        warnings = result.warning_count(),
        "batch complete"
    );
    result
}

fn compare_brand_product(a: &SanitizedSubmission, b: &SanitizedSubmission) -> Ordering {
    let brand = compare_ignore_case(&a.brand, &b.brand);
    if brand != Ordering::Equal {
        return brand;
    }
    compare_ignore_case(&a.product, &b.product)
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Best-effort id of a refused submission, for the error report.
fn raw_id(raw: &Value) -> Option<String> {
    raw.get("id")
        .filter(|id| !id.is_null())
        .map(|id| SubmissionId::from_json(id).to_string())
}
