//! Per-dimension metric analysis and recommendation types.

use serde::{Deserialize, Serialize};

/// Status classification for a single health dimension, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Excellent,
    Good,
    Moderate,
    Warning,
    Risk,
}

impl MetricStatus {
    /// Get the associated display color (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Excellent => (16, 185, 129), // Emerald (#10B981)
            Self::Good => (34, 197, 94),       // Green (#22C55E)
            Self::Moderate => (251, 191, 36),  // Amber (#FBBF24)
            Self::Warning => (249, 115, 22),   // Orange (#F97316)
            Self::Risk => (244, 63, 94),       // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "EXCELLENT"),
            Self::Good => write!(f, "GOOD"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::Warning => write!(f, "WARNING"),
            Self::Risk => write!(f, "RISK"),
        }
    }
}

/// Analysis of one health dimension.
///
/// Output-only: names and target strings are static vocabulary, so this
/// serializes but is never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricAnalysis {
    /// Display name of the dimension
    pub name: &'static str,
    /// The measured value driving the classification
    pub value: f64,
    pub status: MetricStatus,
    /// Human-readable target range
    pub optimal: &'static str,
}

/// Recommendation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sleep,
    Exercise,
    Nutrition,
    Habits,
    Medical,
}

/// Expected impact of acting on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// An actionable recommendation emitted by an analyzer.
///
/// Ids are fixed stable identifiers (`"sleep-1"`, `"bp-2"`, ...), unique
/// across analyzers and tiers. Icons are symbolic names, opaque here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub icon: &'static str,
}
