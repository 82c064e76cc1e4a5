//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the core
//! use cases: committed assessments and what-if previews.

mod assessment;
mod what_if;

pub use assessment::AssessmentService;
pub use what_if::WhatIfService;
