//! Predictor port: the external biological-age prediction service.
//!
//! The request schema is core-owned and must stay bit-exact; it is the
//! contract with the service. Two encodings deliberately lose precision and
//! are preserved as-is: `sleep_quality` collapses excellent onto the same
//! code as good, and `alcohol` collapses frequency to a binary flag.

use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, HealthProfile, SleepQuality};

/// Wire payload for `POST /predict` and `POST /simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorRequest {
    pub age: u32,
    pub sleep_hours: f64,
    /// 0 = poor, 1 = fair, 2 = good or excellent
    pub sleep_quality: u8,
    /// 0 = no, 1 = yes
    pub smoker: u8,
    /// 0 = never, 1 = any consumption
    pub alcohol: u8,
    pub bmi: f64,
    pub resting_hr: u32,
    pub systolic_bp: u32,
    pub diastolic_bp: u32,
    pub cholesterol: u32,
    pub daily_steps: u32,
    /// OR of heart-disease/diabetes/cancer flags; longevity is not sent
    pub family_history: u8,
    pub water_intake: f64,
}

impl PredictorRequest {
    /// Translate a profile into the service's input schema.
    #[must_use]
    pub fn from_profile(profile: &HealthProfile) -> Self {
        Self {
            age: profile.age,
            sleep_hours: profile.sleep_hours,
            sleep_quality: match profile.sleep_quality {
                SleepQuality::Poor => 0,
                SleepQuality::Fair => 1,
                SleepQuality::Good | SleepQuality::Excellent => 2,
            },
            smoker: u8::from(profile.smoker),
            alcohol: u8::from(profile.alcohol != Frequency::Never),
            bmi: profile.bmi,
            resting_hr: profile.resting_heart_rate,
            systolic_bp: profile.systolic_bp,
            diastolic_bp: profile.diastolic_bp,
            cholesterol: profile.cholesterol,
            daily_steps: profile.daily_steps,
            family_history: u8::from(
                profile.family_heart_disease || profile.family_diabetes || profile.family_cancer,
            ),
            water_intake: profile.water_intake,
        }
    }
}

/// Response from the prediction service.
///
/// `age_acceleration` is received but never used: the age difference is
/// always recomputed locally from the two age fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub biological_age: f64,
    pub health_score: f64,
    pub age_acceleration: f64,
}

/// Trait for prediction service calls.
///
/// `predict` and `simulate` carry identical request/response shapes; the
/// service distinguishes the committed path from the cheap what-if path.
/// Calls are independent and idempotent for identical input. No ordering is
/// enforced between overlapping calls and no cancellation is offered;
/// rate-limiting is the caller's concern.
pub trait Predictor: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Request a committed prediction for a submitted profile.
    ///
    /// # Errors
    /// Returns a transport or status error; the caller may substitute a
    /// locally approximated result.
    fn predict(&self, request: &PredictorRequest) -> Result<Prediction, Self::Error>;

    /// Request a what-if preview for a hypothetical profile.
    ///
    /// # Errors
    /// Returns a transport or status error; there is no fallback on this
    /// path.
    fn simulate(&self, request: &PredictorRequest) -> Result<Prediction, Self::Error>;
}
