//! The two calibrated log-linear estimation formulas
//!
//! Formula A estimates the regional corruption magnitude on a log scale and
//! exponentiates; formula B estimates the IPM (human-development index) on a
//! direct scale and consumes formula A's result, so evaluation order is
//! fixed: A fully resolves before B.
//!
//! The engine assumes its inputs already passed [`crate::validate::validate`]
//! (every logarithm argument strictly positive). It performs no
//! re-validation and never fails; called on unvalidated input it simply
//! produces a non-finite number. No rounding happens here — formatting is a
//! presentation concern.

use serde::Serialize;

use crate::indicators::{DerivedIndicators, IndicatorSet};

/// Calibrated coefficients of the corruption formula (ln scale).
///
/// Plain named data: recalibration edits these constants, never control
/// flow.
pub mod corruption {
    pub const INTERCEPT: f64 = 21.872;
    pub const LN_PAD: f64 = -0.039;
    pub const LN_TOTAL_TRANSFER: f64 = -0.013;
    pub const LN_SPENDING_RATIO: f64 = 0.094;
    pub const AUDIT_FINDINGS: f64 = -0.038;
    pub const LN_POPULATION: f64 = 0.036;
    pub const LN_CIVIL_SERVANTS: f64 = 0.4;
    pub const LN_GRDP: f64 = 0.005;
    pub const REGION_AGE: f64 = -0.02;
    pub const JAVA: f64 = -0.377;
    pub const KABUPATEN: f64 = -0.525;
    pub const KOTA: f64 = -0.63;
}

/// Calibrated coefficients of the IPM formula (direct scale).
pub mod ipm {
    pub const INTERCEPT: f64 = 42.518;
    pub const LN_PAD: f64 = 0.155;
    pub const LN_TOTAL_TRANSFER: f64 = 0.284;
    pub const LN_SPENDING_RATIO: f64 = 2.803;
    pub const AUDIT_FINDINGS: f64 = -0.052;
    pub const LN_CORRUPTION: f64 = -0.55;
    pub const LN_POPULATION: f64 = 0.333;
    pub const LN_CIVIL_SERVANTS: f64 = 1.152;
    pub const LN_GRDP: f64 = 0.027;
    pub const REGION_AGE: f64 = 0.465;
    pub const JAVA: f64 = 0.027;
    pub const KABUPATEN: f64 = 0.435;
    pub const KOTA: f64 = 9.678;
}

/// The two estimates, in engine precision (no rounding).
///
/// `corruption` is in rupiah and is always positive for validated input,
/// being the exponential of a real-valued sum. `ipm` is intended to lie
/// near [0, 100] but is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub corruption: f64,
    pub ipm: f64,
}

/// Evaluate both formulas on a validated indicator set.
pub fn estimate(set: &IndicatorSet, derived: &DerivedIndicators) -> Estimate {
    let dummy_kab = set.region.dummy_kabupaten();
    let dummy_kota = set.region.dummy_kota();

    let ln_corruption = corruption::INTERCEPT
        + corruption::LN_PAD * set.pad.ln()
        + corruption::LN_TOTAL_TRANSFER * derived.total_transfer.ln()
        + corruption::LN_SPENDING_RATIO * derived.spending_ratio.ln()
        + corruption::AUDIT_FINDINGS * set.temuan
        + corruption::LN_POPULATION * set.penduduk.ln()
        + corruption::LN_CIVIL_SERVANTS * set.asn.ln()
        + corruption::LN_GRDP * set.pdrb.ln()
        + corruption::REGION_AGE * set.usia
        + corruption::JAVA * set.jawa
        + corruption::KABUPATEN * dummy_kab
        + corruption::KOTA * dummy_kota;

    let corruption_estimate = ln_corruption.exp();

    let ipm_estimate = ipm::INTERCEPT
        + ipm::LN_PAD * set.pad.ln()
        + ipm::LN_TOTAL_TRANSFER * derived.total_transfer.ln()
        + ipm::LN_SPENDING_RATIO * derived.spending_ratio.ln()
        + ipm::AUDIT_FINDINGS * set.temuan
        + ipm::LN_CORRUPTION * corruption_estimate.ln()
        + ipm::LN_POPULATION * set.penduduk.ln()
        + ipm::LN_CIVIL_SERVANTS * set.asn.ln()
        + ipm::LN_GRDP * set.pdrb.ln()
        + ipm::REGION_AGE * set.usia
        + ipm::JAVA * set.jawa
        + ipm::KABUPATEN * dummy_kab
        + ipm::KOTA * dummy_kota;

    Estimate {
        corruption: corruption_estimate,
        ipm: ipm_estimate,
    }
}
