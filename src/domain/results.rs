//! Result types: the unified output of local scoring plus external prediction.

use serde::{Deserialize, Serialize};

use super::{MetricAnalysis, Recommendation};

/// Coarse tri-level classification derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskZone {
    Low,
    Medium,
    High,
}

impl RiskZone {
    /// Classify a 0-10 health score. Boundary values resolve to the better
    /// zone: exactly 7 is `Low`, exactly 4 is `Medium`.
    #[must_use]
    pub fn from_score(health_score: f64) -> Self {
        if health_score >= 7.0 {
            Self::Low
        } else if health_score >= 4.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - Keep up your current habits",
            Self::Medium => "Medium risk - Targeted improvements recommended",
            Self::High => "High risk - Significant lifestyle changes advised",
        }
    }

    /// Get the associated display color (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),    // Emerald (#10B981)
            Self::Medium => (251, 191, 36), // Amber (#FBBF24)
            Self::High => (244, 63, 94),    // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for RiskZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Unified result record.
///
/// `biological_age` and `health_score` come from the prediction service (or
/// the local fallback estimate); metrics and recommendations are computed
/// locally from the profile alone. On the what-if preview path both vectors
/// are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResults {
    /// Externally predicted effective age in years
    pub biological_age: f64,
    /// Health score on a 0-10 scale
    pub health_score: f64,
    pub risk_zone: RiskZone,
    /// `biological_age` minus chronological age; always recomputed locally,
    /// never taken from the wire
    pub age_difference: f64,
    /// At most 5, in analyzer order
    pub recommendations: Vec<Recommendation>,
    /// Fixed sequence of 8 on the full path, empty on the preview path
    pub metrics: Vec<MetricAnalysis>,
}

impl HealthResults {
    /// Build a metrics-free preview from a predicted pair.
    ///
    /// Used by the what-if engine: cheap, high-frequency path where the full
    /// metric recomputation is intentionally skipped.
    #[must_use]
    pub fn preview(biological_age: f64, health_score: f64, chronological_age: u32) -> Self {
        Self {
            biological_age,
            health_score,
            risk_zone: RiskZone::from_score(health_score),
            age_difference: biological_age - f64::from(chronological_age),
            recommendations: Vec::new(),
            metrics: Vec::new(),
        }
    }
}

/// Complete assessment record including metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Unique identifier
    pub id: String,

    pub results: HealthResults,

    /// Whether the age/score pair came from the local fallback estimate
    /// rather than the prediction service
    pub estimated: bool,

    /// Timestamp of the assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Create a new assessment from a result.
    #[must_use]
    pub fn new(results: HealthResults, estimated: bool) -> Self {
        Self {
            id: uuid_v4(),
            results,
            estimated,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Generate a simple UUID v4 (random) using CSPRNG.
///
/// Uses ChaCha20Rng seeded from OS entropy so identifiers are unpredictable
/// on all platforms.
fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}
