//! Shared API types for the MEKD services

pub mod types;
