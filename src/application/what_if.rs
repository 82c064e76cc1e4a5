//! What-if service: speculative re-scoring without touching committed state.
//!
//! Applies a partial override to a baseline profile and fetches a cheap,
//! metrics-free preview from the prediction service. Every call is
//! independent and idempotent; debouncing and ordering of overlapping calls
//! are the caller's concern. There is no fallback on this path: a stale
//! committed result is better than a fabricated preview.

use std::sync::Arc;

use crate::adapters::PredictorError;
use crate::domain::{HealthProfile, HealthResults, ProfileDelta};
use crate::ports::{Predictor, PredictorRequest};
use crate::VitalageError;

/// Service for what-if previews.
pub struct WhatIfService<P>
where
    P: Predictor,
{
    predictor: Arc<P>,
}

impl<P> WhatIfService<P>
where
    P: Predictor,
    P::Error: Into<PredictorError>,
{
    /// Create a new what-if service.
    pub fn new(predictor: Arc<P>) -> Self {
        Self { predictor }
    }

    /// Merge the delta over the baseline, request a simulation and return a
    /// preview with empty metrics and recommendations.
    ///
    /// The baseline is never mutated; the merged record exists only for this
    /// call. The age difference is recomputed from the merged profile's age,
    /// not taken from the wire.
    ///
    /// # Errors
    /// Returns `VitalageError::Predictor` if the simulation call fails.
    pub fn simulate(
        &self,
        baseline: &HealthProfile,
        delta: &ProfileDelta,
    ) -> Result<HealthResults, VitalageError> {
        let merged = baseline.merged(delta);
        let request = PredictorRequest::from_profile(&merged);

        let prediction = self
            .predictor
            .simulate(&request)
            .map_err(|e| VitalageError::Predictor(e.into()))?;

        tracing::debug!(
            "Simulation preview: biological_age={:.1}, score={:.2}",
            prediction.biological_age,
            prediction.health_score
        );

        Ok(HealthResults::preview(
            prediction.biological_age,
            prediction.health_score,
            merged.age,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frequency, Gender, RiskZone, SleepQuality};
    use crate::ports::Prediction;

    struct MockPredictor {
        prediction: Prediction,
    }

    impl Predictor for MockPredictor {
        type Error = PredictorError;

        fn predict(&self, _request: &PredictorRequest) -> Result<Prediction, PredictorError> {
            Ok(self.prediction)
        }

        fn simulate(&self, _request: &PredictorRequest) -> Result<Prediction, PredictorError> {
            Ok(self.prediction)
        }
    }

    struct FailingPredictor;

    impl Predictor for FailingPredictor {
        type Error = PredictorError;

        fn predict(&self, _request: &PredictorRequest) -> Result<Prediction, PredictorError> {
            Err(PredictorError::Transport {
                reason: "connection refused".to_string(),
            })
        }

        fn simulate(&self, _request: &PredictorRequest) -> Result<Prediction, PredictorError> {
            Err(PredictorError::Transport {
                reason: "connection refused".to_string(),
            })
        }
    }

    fn baseline() -> HealthProfile {
        HealthProfile {
            age: 40,
            gender: Gender::Male,
            sleep_hours: 6.0,
            sleep_quality: SleepQuality::Fair,
            daily_steps: 6000,
            water_intake: 1.5,
            smoker: true,
            alcohol: Frequency::Weekly,
            exercise: Frequency::Occasionally,
            bmi: 27.5,
            resting_heart_rate: 78,
            systolic_bp: 132,
            diastolic_bp: 86,
            cholesterol: 215,
            blood_sugar: 105,
            family_heart_disease: true,
            family_diabetes: false,
            family_cancer: false,
            family_longevity: false,
        }
    }

    #[test]
    fn test_preview_has_no_metrics_or_recommendations() {
        let service = WhatIfService::new(Arc::new(MockPredictor {
            prediction: Prediction {
                biological_age: 44.5,
                health_score: 5.2,
                age_acceleration: 4.5,
            },
        }));

        let delta = ProfileDelta {
            smoker: Some(false),
            ..Default::default()
        };
        let preview = service.simulate(&baseline(), &delta).expect("Should simulate");

        assert!(preview.metrics.is_empty());
        assert!(preview.recommendations.is_empty());
        assert_eq!(preview.risk_zone, RiskZone::Medium);
        assert!((preview.age_difference - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_delta_translates_like_the_baseline() {
        let base = baseline();
        let merged = base.merged(&ProfileDelta::default());
        assert_eq!(
            PredictorRequest::from_profile(&merged),
            PredictorRequest::from_profile(&base)
        );
    }

    #[test]
    fn test_age_difference_follows_overridden_age() {
        let service = WhatIfService::new(Arc::new(MockPredictor {
            prediction: Prediction {
                biological_age: 44.5,
                health_score: 7.0,
                age_acceleration: 0.0,
            },
        }));

        let delta = ProfileDelta {
            age: Some(45),
            ..Default::default()
        };
        let preview = service.simulate(&baseline(), &delta).expect("Should simulate");
        assert!((preview.age_difference - -0.5).abs() < 1e-9);
        assert_eq!(preview.risk_zone, RiskZone::Low);
    }

    #[test]
    fn test_simulation_failure_propagates() {
        let service = WhatIfService::new(Arc::new(FailingPredictor));
        let result = service.simulate(&baseline(), &ProfileDelta::default());
        assert!(matches!(result, Err(VitalageError::Predictor(_))));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let service = WhatIfService::new(Arc::new(MockPredictor {
            prediction: Prediction {
                biological_age: 41.0,
                health_score: 6.5,
                age_acceleration: 1.0,
            },
        }));

        let base = baseline();
        let delta = ProfileDelta {
            daily_steps: Some(12_000),
            ..Default::default()
        };
        let first = service.simulate(&base, &delta).expect("Should simulate");
        let second = service.simulate(&base, &delta).expect("Should simulate");
        assert_eq!(first, second);
        // Committed baseline untouched.
        assert_eq!(base.daily_steps, 6000);
    }
}
