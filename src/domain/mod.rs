//! Domain layer: Core business types and scoring logic.
//!
//! This module contains pure Rust types with no I/O. The scoring rules are
//! total functions over a well-typed profile and never fail.

mod metric;
mod profile;
mod results;
pub mod scoring;

pub use metric::{Category, Impact, MetricAnalysis, MetricStatus, Recommendation};
pub use profile::{Frequency, Gender, HealthProfile, ProfileDelta, SleepQuality};
pub use results::{Assessment, HealthResults, RiskZone};
