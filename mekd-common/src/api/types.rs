//! Shared API request/response types
//!
//! Wire types for the estimation endpoint. The request body is the raw
//! indicator form itself; the response carries both estimates in engine
//! precision alongside their display renderings and the chart
//! specification for the rendering boundary.

use serde::Serialize;

use crate::chart::ChartSpec;

/// Request body of `POST /api/estimate`: the indicator form, field-for-field
/// as posted by the entry page.
pub use crate::indicators::IndicatorForm as EstimateRequest;

// ========================================
// Response Types
// ========================================

/// Successful estimation response
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    /// Corruption estimate, rupiah, engine precision
    pub corruption: f64,
    /// IPM estimate, engine precision
    pub ipm: f64,
    /// Corruption estimate rendered for display ("Rp 13.413.792.143,74")
    pub corruption_display: String,
    /// IPM estimate rendered for display ("67.25")
    pub ipm_display: String,
    /// DAU + DAK + DBH, base units
    pub total_transfer: f64,
    /// belanja / pendapatan
    pub spending_ratio: f64,
    /// Dual-axis chart configuration for the renderer
    pub chart: ChartSpec,
}

/// Error response for failed requests
///
/// Returned as 422 Unprocessable Entity when validation fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Display names of the failing checks, in check order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl ErrorResponse {
    /// Create new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Create error response with the failing field names
    pub fn with_fields(
        error: impl Into<String>,
        message: impl Into<String>,
        fields: Vec<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            fields,
        }
    }
}

// ========================================
// Tests
// ========================================
