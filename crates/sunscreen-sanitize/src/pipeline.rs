//! Pipeline orchestration.
//!
//! Stages, in order:
//! 1. validation gate (fatal on malformed input) and private copy
//! 2. product name: brand prefix strip, then SPF/PA strip
//! 3. ingredient normalization
//! 4. per-ingredient filter detection
//! 5. reconciliation with declared filters
//! 6. final trim of brand/product and lower-casing of type

use serde::Serialize;
use serde_json::Value;
use tracing::{debug_span, info};

use sunscreen_model::{
    FilterCatalog, Result, SanitizeError, SanitizedSubmission, Submission, Warning,
};

use crate::detect::detect_filters;
use crate::ingredients::normalize_ingredients;
use crate::reconcile::{declared_filters, reconcile_filters};
use crate::strip::{strip_brand_from_product, strip_spf_pa_from_product};
use crate::validate::validate_submission;

/// A sanitized record plus every warning emitted while producing it, in
/// emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizeOutcome {
    pub sunscreen: SanitizedSubmission,
    pub warnings: Vec<Warning>,
}

/// Validate and sanitize one raw submission against `catalog`.
///
/// `raw` is never modified. Deterministic: the same input and catalog always
/// give the same outcome or the same error.
pub fn sanitize_submission(raw: &Value, catalog: &FilterCatalog) -> Result<SanitizeOutcome> {
    let submission = validate_submission(raw)?;
    sanitize_validated(submission, catalog)
}

/// Run the pipeline on a submission that already passed the gate.
fn sanitize_validated(
    submission: Submission,
    catalog: &FilterCatalog,
) -> Result<SanitizeOutcome> {
    let span = debug_span!("sanitize", id = %submission.id);
    let _guard = span.enter();

    let Submission {
        id,
        brand,
        product,
        kind,
        ingredients,
        filters,
        extra,
    } = submission;
    let mut warnings = Vec::new();

    let product = strip_brand_from_product(&product, &brand, &mut warnings);
    let product = strip_spf_pa_from_product(&product, &mut warnings);
    if product.is_empty() {
        return Err(SanitizeError::EmptyProduct);
    }

    let ingredients = normalize_ingredients(&ingredients)?;
    let detected = detect_filters(&ingredients, catalog, &mut warnings);
    let filters = reconcile_filters(declared_filters(filters.as_ref()), detected, &mut warnings);

    let sunscreen = SanitizedSubmission {
        id,
        brand: brand.trim().to_string(),
        product: product.trim().to_string(),
        kind: kind.to_lowercase(),
        ingredients,
        filters,
        extra,
    };
    info!(
        id = %sunscreen.id,
        filters = sunscreen.filters.len(),
        warnings = warnings.len(),
        "sanitized submission"
    );
    Ok(SanitizeOutcome {
        sunscreen,
        warnings,
    })
}
