//! Indicator data model and unit scaling
//!
//! An [`IndicatorForm`] is the raw submission exactly as posted by the entry
//! form (text fields, possibly absent). [`IndicatorSet::from_form`] is the
//! single place where text becomes numbers and form units become base units:
//! the fiscal amounts and the population are entered in millions and scaled
//! here, once.

use serde::{Deserialize, Serialize};

use crate::numeric;

/// Scale factor for the fields entered in millions (juta rupiah, juta jiwa).
pub const MILLION: f64 = 1_000_000.0;

/// Raw indicator submission, field-for-field as posted by the entry form.
///
/// Every field is optional: an absent or blank field parses to zero and is
/// then reported by validation where the formulas require it to be positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorForm {
    /// Pendapatan Asli Daerah, juta Rp, locale formatted
    pub pad: Option<String>,
    /// Dana Alokasi Umum, juta Rp, locale formatted
    pub dau: Option<String>,
    /// Dana Alokasi Khusus, juta Rp, locale formatted
    pub dak: Option<String>,
    /// Dana Bagi Hasil, juta Rp, locale formatted
    pub dbh: Option<String>,
    /// Total Belanja Daerah, juta Rp, locale formatted
    pub belanja: Option<String>,
    /// Total Pendapatan Daerah, juta Rp, locale formatted
    pub pendapatan: Option<String>,
    /// Jumlah temuan audit, plain number
    pub temuan: Option<String>,
    /// Jumlah penduduk, juta jiwa, locale formatted
    pub penduduk: Option<String>,
    /// Jumlah ASN, jiwa, locale formatted
    pub asn: Option<String>,
    /// PDRB, Rp, locale formatted
    pub pdrb: Option<String>,
    /// Usia pemerintahan daerah (kode kategori), plain number
    pub usia: Option<String>,
    /// Berlokasi di Pulau Jawa (1) atau tidak (0), plain number
    pub jawa: Option<String>,
    /// Tipe daerah: "kabupaten", "kota", atau lainnya
    pub tipe: Option<String>,
}

/// Region category, driving the two mutually exclusive dummy variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionType {
    Kabupaten,
    Kota,
    Other,
}

impl RegionType {
    /// Map the form's tipe value. Only the exact strings "kabupaten" and
    /// "kota" select a category; anything else is Other.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "kabupaten" => RegionType::Kabupaten,
            "kota" => RegionType::Kota,
            _ => RegionType::Other,
        }
    }

    /// 1.0 for a kabupaten, 0.0 otherwise
    pub fn dummy_kabupaten(&self) -> f64 {
        match self {
            RegionType::Kabupaten => 1.0,
            _ => 0.0,
        }
    }

    /// 1.0 for a kota, 0.0 otherwise
    pub fn dummy_kota(&self) -> f64 {
        match self {
            RegionType::Kota => 1.0,
            _ => 0.0,
        }
    }
}

/// Parsed and scaled indicator values, in base units (Rp, jiwa).
///
/// Immutable once built; validation and estimation only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub pad: f64,
    pub dau: f64,
    pub dak: f64,
    pub dbh: f64,
    pub belanja: f64,
    pub pendapatan: f64,
    pub temuan: f64,
    pub penduduk: f64,
    pub asn: f64,
    pub pdrb: f64,
    pub usia: f64,
    pub jawa: f64,
    pub region: RegionType,
}

impl IndicatorSet {
    /// Parse a raw form into base-unit values.
    ///
    /// The fiscal amounts and the population are entered in millions and
    /// scaled by [`MILLION`]; asn and pdrb are entered already in base
    /// units. temuan, usia, and jawa are plain numbers with no scaling.
    pub fn from_form(form: &IndicatorForm) -> Self {
        Self {
            pad: numeric::parse(form.pad.as_deref()) * MILLION,
            dau: numeric::parse(form.dau.as_deref()) * MILLION,
            dak: numeric::parse(form.dak.as_deref()) * MILLION,
            dbh: numeric::parse(form.dbh.as_deref()) * MILLION,
            belanja: numeric::parse(form.belanja.as_deref()) * MILLION,
            pendapatan: numeric::parse(form.pendapatan.as_deref()) * MILLION,
            temuan: numeric::plain_number(form.temuan.as_deref()),
            penduduk: numeric::parse(form.penduduk.as_deref()) * MILLION,
            asn: numeric::parse(form.asn.as_deref()),
            pdrb: numeric::parse(form.pdrb.as_deref()),
            usia: numeric::plain_number(form.usia.as_deref()),
            jawa: numeric::plain_number(form.jawa.as_deref()),
            region: RegionType::from_form_value(form.tipe.as_deref().unwrap_or("lainnya")),
        }
    }

    /// Total central-government transfer: DAU + DAK + DBH
    pub fn total_transfer(&self) -> f64 {
        self.dau + self.dak + self.dbh
    }
}

/// Values derived during validation, handed to the engine so it does not
/// recompute them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedIndicators {
    /// DAU + DAK + DBH, base units
    pub total_transfer: f64,
    /// belanja / pendapatan
    pub spending_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_dummies_are_mutually_exclusive() {
        let kab = RegionType::from_form_value("kabupaten");
        assert_eq!(kab.dummy_kabupaten(), 1.0);
        assert_eq!(kab.dummy_kota(), 0.0);

        let kota = RegionType::from_form_value("kota");
        assert_eq!(kota.dummy_kabupaten(), 0.0);
        assert_eq!(kota.dummy_kota(), 1.0);

        for other in ["lainnya", "", "Kota", "provinsi"] {
            let region = RegionType::from_form_value(other);
            assert_eq!(region, RegionType::Other);
            assert_eq!(region.dummy_kabupaten(), 0.0);
            assert_eq!(region.dummy_kota(), 0.0);
        }
    }

    #[test]
    fn from_form_scales_million_fields() {
        let form = IndicatorForm {
            pad: Some("1.000.000".to_string()),
            dau: Some("500.000".to_string()),
            penduduk: Some("2".to_string()),
            asn: Some("5.000".to_string()),
            pdrb: Some("50.000.000.000".to_string()),
            temuan: Some("3".to_string()),
            tipe: Some("kota".to_string()),
            ..Default::default()
        };

        let set = IndicatorSet::from_form(&form);
        assert_eq!(set.pad, 1e12);
        assert_eq!(set.dau, 5e11);
        assert_eq!(set.penduduk, 2e6);
        assert_eq!(set.asn, 5000.0);
        assert_eq!(set.pdrb, 5e10);
        assert_eq!(set.temuan, 3.0);
        assert_eq!(set.region, RegionType::Kota);
    }

    #[test]
    fn from_form_blank_fields_parse_to_zero() {
        let form = IndicatorForm {
            asn: Some("".to_string()),
            ..Default::default()
        };

        let set = IndicatorSet::from_form(&form);
        assert_eq!(set.asn, 0.0);
        assert_eq!(set.pad, 0.0);
        assert_eq!(set.region, RegionType::Other);
    }

    #[test]
    fn total_transfer_sums_the_three_funds() {
        let form = IndicatorForm {
            dau: Some("500.000".to_string()),
            dak: Some("200.000".to_string()),
            dbh: Some("100.000".to_string()),
            ..Default::default()
        };

        let set = IndicatorSet::from_form(&form);
        assert_eq!(set.total_transfer(), 8e11);
    }
}
