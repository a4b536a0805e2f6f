//! Estimate computation endpoint
//!
//! Runs the full pipeline on a submitted indicator form: canonicalize the
//! locale text fields, parse to base-unit numbers, gate on the positivity
//! checks, then evaluate the two formulas (corruption first, IPM consumes
//! it). Validation failures abort the computation entirely; no partial
//! result or chart is produced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use mekd_common::api::types::{ErrorResponse, EstimateRequest, EstimateResponse};
use mekd_common::chart::ChartSpec;
use mekd_common::indicators::IndicatorSet;
use mekd_common::validate::ValidationError;
use mekd_common::{model, numeric, validate};

/// POST /api/estimate
///
/// Returns 200 with both estimates and the chart specification, or 422
/// listing every failing check at once.
pub async fn compute_estimate(
    Json(form): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, EstimateError> {
    let form = canonicalized(form);
    let set = IndicatorSet::from_form(&form);

    let derived = validate::validate(&set)?;
    let result = model::estimate(&set, &derived);

    info!(
        corruption = result.corruption,
        ipm = result.ipm,
        spending_ratio = derived.spending_ratio,
        "estimate computed"
    );

    Ok(Json(EstimateResponse {
        corruption: result.corruption,
        ipm: result.ipm,
        corruption_display: numeric::format_rupiah(result.corruption),
        ipm_display: numeric::format_index(result.ipm),
        total_transfer: derived.total_transfer,
        spending_ratio: derived.spending_ratio,
        chart: ChartSpec::dual_axis(result.corruption, result.ipm),
    }))
}

/// Re-apply the as-you-type formatting to the locale text fields, so a
/// submission that bypassed the form (curl, tests) goes through the same
/// normalization the interactive surface applies on every keystroke.
/// The plain-number fields (temuan, usia, jawa) and tipe are untouched.
fn canonicalized(mut form: EstimateRequest) -> EstimateRequest {
    let locale_fields = [
        &mut form.pad,
        &mut form.dau,
        &mut form.dak,
        &mut form.dbh,
        &mut form.belanja,
        &mut form.pendapatan,
        &mut form.penduduk,
        &mut form.asn,
        &mut form.pdrb,
    ];
    for field in locale_fields {
        if let Some(value) = field {
            *value = numeric::normalize(value);
        }
    }
    form
}

/// Estimate endpoint errors
#[derive(Debug)]
pub enum EstimateError {
    Validation(ValidationError),
}

impl From<ValidationError> for EstimateError {
    fn from(err: ValidationError) -> Self {
        EstimateError::Validation(err)
    }
}

impl IntoResponse for EstimateError {
    fn into_response(self) -> Response {
        match self {
            EstimateError::Validation(err) => {
                let message = err.to_string();
                let body = ErrorResponse::with_fields("validation_failed", message, err.fields);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalized_reformats_locale_fields_only() {
        let form = EstimateRequest {
            pad: Some("1000000".to_string()),
            asn: Some("5000abc".to_string()),
            temuan: Some("3".to_string()),
            tipe: Some("kota".to_string()),
            ..Default::default()
        };

        let form = canonicalized(form);
        assert_eq!(form.pad.as_deref(), Some("1.000.000"));
        assert_eq!(form.asn.as_deref(), Some("5.000"));
        assert_eq!(form.temuan.as_deref(), Some("3"));
        assert_eq!(form.tipe.as_deref(), Some("kota"));
    }
}
