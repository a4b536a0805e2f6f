//! Positivity validation gating the regression inputs
//!
//! Every value the formulas feed to `ln()` must be strictly positive, and the
//! belanja/pendapatan ratio must be defined and positive. All failures are
//! collected and reported together so the user sees one combined message, not
//! a field at a time.

use thiserror::Error;

use crate::indicators::{DerivedIndicators, IndicatorSet};

/// Display name of the ratio check in failure reports
pub const RATIO_DISPLAY_NAME: &str = "Rasio (Total Belanja / Total Pendapatan)";

/// One or more required-positive values were missing or not positive.
///
/// `fields` holds the display names of every failing check, in check-list
/// order (the ratio check last).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Nilai berikut harus lebih dari 0 agar perhitungan tidak error: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<String>,
}

/// Check every logarithm argument and the spending ratio.
///
/// Returns the derived total transfer and ratio on success so the engine
/// does not recompute them. On failure, returns the full list of failing
/// display names at once; no partial result is produced.
pub fn validate(set: &IndicatorSet) -> Result<DerivedIndicators, ValidationError> {
    let total_transfer = set.total_transfer();
    let spending_ratio = if set.pendapatan == 0.0 {
        None
    } else {
        Some(set.belanja / set.pendapatan)
    };

    let checks = [
        ("Pendapatan Asli Daerah (PAD)", set.pad),
        ("Total Transfer (DAU+DAK+DBH)", total_transfer),
        ("Total Belanja Daerah", set.belanja),
        ("Total Pendapatan Daerah", set.pendapatan),
        ("Jumlah Penduduk", set.penduduk),
        ("Jumlah ASN", set.asn),
        ("PDRB", set.pdrb),
    ];

    // !(v > 0.0) also catches NaN
    let mut failed: Vec<String> = checks
        .iter()
        .filter(|(_, value)| !(*value > 0.0))
        .map(|(name, _)| name.to_string())
        .collect();

    match spending_ratio {
        Some(ratio) if ratio > 0.0 => {
            if failed.is_empty() {
                Ok(DerivedIndicators {
                    total_transfer,
                    spending_ratio: ratio,
                })
            } else {
                Err(ValidationError { fields: failed })
            }
        }
        _ => {
            failed.push(RATIO_DISPLAY_NAME.to_string());
            Err(ValidationError { fields: failed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::RegionType;

    fn valid_set() -> IndicatorSet {
        IndicatorSet {
            pad: 1e12,
            dau: 5e11,
            dak: 2e11,
            dbh: 1e11,
            belanja: 9e11,
            pendapatan: 1e12,
            temuan: 3.0,
            penduduk: 2e6,
            asn: 5000.0,
            pdrb: 5e10,
            usia: 2.0,
            jawa: 1.0,
            region: RegionType::Kota,
        }
    }

    #[test]
    fn valid_set_returns_derived_values() {
        let derived = validate(&valid_set()).expect("should validate");
        assert_eq!(derived.total_transfer, 8e11);
        assert_eq!(derived.spending_ratio, 0.9);
    }

    #[test]
    fn reports_every_failing_field_in_order() {
        let mut set = valid_set();
        set.pad = 0.0;
        set.penduduk = 0.0;

        let err = validate(&set).expect_err("should fail");
        assert_eq!(
            err.fields,
            vec!["Pendapatan Asli Daerah (PAD)", "Jumlah Penduduk"]
        );
    }

    #[test]
    fn blank_asn_reports_only_asn() {
        let mut set = valid_set();
        set.asn = 0.0;

        let err = validate(&set).expect_err("should fail");
        assert_eq!(err.fields, vec!["Jumlah ASN"]);
    }

    #[test]
    fn zero_pendapatan_reports_the_ratio_check() {
        let mut set = valid_set();
        set.pendapatan = 0.0;

        let err = validate(&set).expect_err("should fail");
        assert!(err.fields.contains(&"Total Pendapatan Daerah".to_string()));
        assert_eq!(err.fields.last().map(String::as_str), Some(RATIO_DISPLAY_NAME));
    }

    #[test]
    fn negative_value_fails_the_gate() {
        let mut set = valid_set();
        set.pdrb = -1.0;

        let err = validate(&set).expect_err("should fail");
        assert_eq!(err.fields, vec!["PDRB"]);
    }

    #[test]
    fn temuan_usia_jawa_are_never_checked() {
        let mut set = valid_set();
        set.temuan = 0.0;
        set.usia = 0.0;
        set.jawa = 0.0;
        set.region = RegionType::Other;

        assert!(validate(&set).is_ok());
    }

    #[test]
    fn error_message_lists_all_fields() {
        let mut set = valid_set();
        set.pad = 0.0;
        set.asn = 0.0;

        let err = validate(&set).expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("Pendapatan Asli Daerah (PAD)"));
        assert!(message.contains("Jumlah ASN"));
    }
}
