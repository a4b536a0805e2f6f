//! Locale-aware numeric text handling
//!
//! All numeric entry in MEKD uses the Indonesian convention: `.` groups
//! thousands, `,` separates decimals. This module covers the whole text
//! lifecycle of a value:
//! - [`normalize`] reformats a field as the user types (grouping, at most
//!   one decimal comma)
//! - [`parse`] converts a locale-formatted string to `f64` on submit,
//!   degrading silently to zero so the positivity gate catches it later
//! - [`plain_number`] handles the plain (`.`-decimal) count/category fields
//! - [`format_rupiah`] / [`format_index`] render the two estimates for
//!   display

/// Reformat locale numeric text: keep only digits and at most one decimal
/// comma, grouping the integer part with `.` every three digits.
///
/// Idempotent, never fails; malformed characters are silently dropped.
/// An empty or all-garbage input yields an empty string. Anything after a
/// second comma is discarded, and a trailing comma with no fraction digits
/// is removed.
///
/// ```
/// use mekd_common::numeric::normalize;
///
/// assert_eq!(normalize("1234567,5"), "1.234.567,5");
/// assert_eq!(normalize("1.234.567,5"), "1.234.567,5");
/// ```
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    let mut parts = cleaned.split(',');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");

    let grouped = group_thousands(int_part);
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{},{}", grouped, frac_part)
    }
}

/// Parse a locale-formatted string ("1.234,56" or "1.234") to a number.
///
/// Absent or blank input, anything that fails to parse after removing the
/// grouping dots and swapping the first comma for a decimal point, and any
/// non-finite parse result all yield 0.0. This silent-zero policy is
/// deliberate: "blank or garbage" means "no contribution", and the
/// positivity validation downstream is what reports the field to the user.
pub fn parse(text: Option<&str>) -> f64 {
    let Some(raw) = text else {
        return 0.0;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let dots_removed: String = trimmed.chars().filter(|c| *c != '.').collect();
    let standard = dots_removed.replacen(',', ".", 1);

    // f64::from_str accepts "inf"/"NaN" spellings; those are garbage here
    match standard.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a plain `.`-decimal number, for the fields entered without locale
/// grouping (temuan, usia, jawa). Same silent-zero policy as [`parse`].
pub fn plain_number(text: Option<&str>) -> f64 {
    let Some(raw) = text else {
        return 0.0;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format a rupiah amount for display: `Rp ` prefix, grouped integer part,
/// comma decimal, at most two fraction digits (trailing zeros trimmed).
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_grouped(value))
}

/// Format an index value for display with exactly two fraction digits and a
/// `.` decimal point (e.g. "67.25").
pub fn format_index(value: f64) -> String {
    format!("{:.2}", value)
}

/// Group a number in the id-ID convention with at most two fraction digits.
fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::new();
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Insert a `.` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
