//! # MEKD Common Library
//!
//! Shared code for the MEKD (Model Estimasi Korupsi Daerah) services:
//! - Locale-aware numeric normalization, parsing, and display formatting
//! - Indicator data model and unit scaling
//! - Positivity validation gating the regression inputs
//! - The two calibrated log-linear estimation formulas
//! - Dual-axis chart specification for the rendering boundary
//! - API request/response types
//! - Service configuration resolution

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod indicators;
pub mod model;
pub mod numeric;
pub mod validate;

pub use error::{Error, Result};
pub use indicators::{DerivedIndicators, IndicatorForm, IndicatorSet, RegionType};
pub use model::Estimate;
pub use validate::ValidationError;
