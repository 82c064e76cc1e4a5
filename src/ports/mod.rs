//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the external prediction service.

mod predictor;

pub use predictor::{Prediction, Predictor, PredictorRequest};
