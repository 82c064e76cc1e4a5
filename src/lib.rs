//! # Vitalage
//!
//! Biological age and wellness scoring engine.
//!
//! This crate provides:
//! - A deterministic, rule-based analyzer set over self-reported lifestyle
//!   and biometric data
//! - Aggregation of the local metric breakdown with an externally predicted
//!   biological age and health score
//! - A what-if engine for cheap, metrics-free previews of hypothetical
//!   lifestyle changes
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (profile, metrics, results) and scoring rules
//! - `ports`: Trait definitions for external operations (prediction service)
//! - `adapters`: Concrete implementations (HTTP predictor, log sanitization)
//! - `application`: Use cases orchestrating domain and ports

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use domain::{HealthProfile, HealthResults, RiskZone};

/// Result type for Vitalage operations
pub type Result<T> = std::result::Result<T, VitalageError>;

/// Main error type for Vitalage
#[derive(Debug, thiserror::Error)]
pub enum VitalageError {
    #[error("Prediction service call failed: {0}")]
    Predictor(#[from] adapters::PredictorError),

    #[error("Invalid health profile: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
