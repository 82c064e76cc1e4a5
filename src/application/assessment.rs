//! Assessment service: the committed prediction path.
//!
//! Translates a profile into the service schema, requests a prediction and
//! merges it with the locally computed metric breakdown. When the service is
//! unreachable the age/score pair is approximated locally so the user still
//! gets a result; such assessments are flagged `estimated`.

use std::sync::Arc;

use crate::adapters::PredictorError;
use crate::domain::scoring::{calculate_health_results, modifier_total};
use crate::domain::{Assessment, HealthProfile};
use crate::ports::{Prediction, Predictor, PredictorRequest};
use crate::VitalageError;

/// Weight applied to the net analyzer modifier when approximating the
/// health score locally.
const FALLBACK_SCORE_WEIGHT: f64 = 0.35;

/// Neutral health score for a profile whose modifiers cancel out.
const FALLBACK_SCORE_BASELINE: f64 = 7.0;

/// Service for running committed assessments.
pub struct AssessmentService<P>
where
    P: Predictor,
{
    predictor: Arc<P>,
}

impl<P> AssessmentService<P>
where
    P: Predictor,
    P::Error: Into<PredictorError>,
{
    /// Create a new assessment service.
    pub fn new(predictor: Arc<P>) -> Self {
        Self { predictor }
    }

    /// Run the full assessment pipeline:
    /// 1. Translate the profile into the predictor schema
    /// 2. Request a prediction (falling back to a local estimate on failure)
    /// 3. Compute the metric breakdown and recommendations locally
    ///
    /// # Errors
    /// Never fails on predictor unavailability (the fallback covers it);
    /// reserved for future orchestration failures.
    pub fn assess(&self, profile: &HealthProfile) -> Result<Assessment, VitalageError> {
        let request = PredictorRequest::from_profile(profile);

        tracing::debug!("Requesting prediction from service...");
        let (prediction, estimated) = match self.predictor.predict(&request) {
            Ok(prediction) => (prediction, false),
            Err(e) => {
                let err: PredictorError = e.into();
                tracing::warn!("Predict failed, using local estimate: {err}");
                (local_estimate(profile), true)
            }
        };

        let results =
            calculate_health_results(profile, prediction.biological_age, prediction.health_score);

        tracing::info!(
            "Assessment complete: biological_age={:.1}, score={:.2}, risk={}, estimated={}",
            results.biological_age,
            results.health_score,
            results.risk_zone,
            estimated
        );

        Ok(Assessment::new(results, estimated))
    }
}

/// Approximate an age/score pair from the analyzer modifiers alone.
///
/// The health score centers on a neutral baseline and degrades (or improves)
/// with the net modifier. The biological age then replicates the service's
/// own age-banded clamp so local and remote results stay comparable.
#[must_use]
pub fn local_estimate(profile: &HealthProfile) -> Prediction {
    let total = modifier_total(profile);
    let health_score = round2((FALLBACK_SCORE_BASELINE - FALLBACK_SCORE_WEIGHT * total).clamp(0.0, 10.0));
    let biological_age = round2(clamp_biological_age(profile.age, health_score));

    Prediction {
        biological_age,
        health_score,
        age_acceleration: round2(biological_age - f64::from(profile.age)),
    }
}

/// Biological age from chronological age and a 0-10 health score, bounded by
/// an age-banded maximum deviation. Mirrors the prediction service.
fn clamp_biological_age(age: u32, health_score: f64) -> f64 {
    let max_diff = match age {
        0..=25 => 1.0,
        26..=35 => 2.0,
        36..=50 => 4.0,
        51..=65 => 6.0,
        _ => 8.0,
    };

    let age = f64::from(age);
    let raw = age + (5.0 - health_score) * 2.0;
    raw.clamp(age - max_diff, age + max_diff)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
