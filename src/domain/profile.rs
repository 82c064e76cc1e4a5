//! Health profile types: the self-reported input record.
//!
//! One profile is created per submission (or per slider tick when used as
//! simulation input) and is never mutated in place; every change goes
//! through [`HealthProfile::merged`].

use serde::{Deserialize, Serialize};

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Subjective sleep quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Frequency scale shared by alcohol consumption and exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Never,
    Occasionally,
    Weekly,
    Daily,
}

/// Self-reported lifestyle and biometric data, one record per submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Chronological age in years
    pub age: u32,
    pub gender: Gender,

    /// Average sleep per night in hours
    pub sleep_hours: f64,
    pub sleep_quality: SleepQuality,
    /// Average daily step count
    pub daily_steps: u32,
    /// Water intake in liters per day
    pub water_intake: f64,

    pub smoker: bool,
    pub alcohol: Frequency,
    pub exercise: Frequency,

    /// Body mass index
    pub bmi: f64,
    /// Resting heart rate in bpm
    pub resting_heart_rate: u32,
    /// Systolic blood pressure in mmHg
    pub systolic_bp: u32,
    /// Diastolic blood pressure in mmHg
    pub diastolic_bp: u32,
    /// Total cholesterol in mg/dL
    pub cholesterol: u32,
    /// Fasting blood sugar in mg/dL
    pub blood_sugar: u32,

    pub family_heart_disease: bool,
    pub family_diabetes: bool,
    pub family_cancer: bool,
    /// Close relatives who lived past 80
    pub family_longevity: bool,
}

/// Partial override of a [`HealthProfile`], used by the what-if engine.
///
/// Every field is optional; `None` keeps the baseline value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDelta {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<SleepQuality>,
    pub daily_steps: Option<u32>,
    pub water_intake: Option<f64>,
    pub smoker: Option<bool>,
    pub alcohol: Option<Frequency>,
    pub exercise: Option<Frequency>,
    pub bmi: Option<f64>,
    pub resting_heart_rate: Option<u32>,
    pub systolic_bp: Option<u32>,
    pub diastolic_bp: Option<u32>,
    pub cholesterol: Option<u32>,
    pub blood_sugar: Option<u32>,
    pub family_heart_disease: Option<bool>,
    pub family_diabetes: Option<bool>,
    pub family_cancer: Option<bool>,
    pub family_longevity: Option<bool>,
}

impl ProfileDelta {
    /// True if the delta overrides nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl HealthProfile {
    /// Produce a new profile with delta fields replacing baseline fields.
    ///
    /// The baseline is left untouched; repeated merges with the same delta
    /// yield identical records.
    #[must_use]
    pub fn merged(&self, delta: &ProfileDelta) -> Self {
        Self {
            age: delta.age.unwrap_or(self.age),
            gender: delta.gender.unwrap_or(self.gender),
            sleep_hours: delta.sleep_hours.unwrap_or(self.sleep_hours),
            sleep_quality: delta.sleep_quality.unwrap_or(self.sleep_quality),
            daily_steps: delta.daily_steps.unwrap_or(self.daily_steps),
            water_intake: delta.water_intake.unwrap_or(self.water_intake),
            smoker: delta.smoker.unwrap_or(self.smoker),
            alcohol: delta.alcohol.unwrap_or(self.alcohol),
            exercise: delta.exercise.unwrap_or(self.exercise),
            bmi: delta.bmi.unwrap_or(self.bmi),
            resting_heart_rate: delta.resting_heart_rate.unwrap_or(self.resting_heart_rate),
            systolic_bp: delta.systolic_bp.unwrap_or(self.systolic_bp),
            diastolic_bp: delta.diastolic_bp.unwrap_or(self.diastolic_bp),
            cholesterol: delta.cholesterol.unwrap_or(self.cholesterol),
            blood_sugar: delta.blood_sugar.unwrap_or(self.blood_sugar),
            family_heart_disease: delta
                .family_heart_disease
                .unwrap_or(self.family_heart_disease),
            family_diabetes: delta.family_diabetes.unwrap_or(self.family_diabetes),
            family_cancer: delta.family_cancer.unwrap_or(self.family_cancer),
            family_longevity: delta.family_longevity.unwrap_or(self.family_longevity),
        }
    }

    /// Validate that all fields are within plausible ranges.
    ///
    /// The scoring engine never calls this; out-of-range values fall through
    /// to the worst tier there. Callers that accept untrusted input (the CLI
    /// does) should validate first.
    ///
    /// # Errors
    /// Returns all violations as a vector of strings.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(18..=120).contains(&self.age) {
            errors.push(format!("Age {} out of range [18, 120]", self.age));
        }
        if !(0.0..=24.0).contains(&self.sleep_hours) {
            errors.push(format!(
                "Sleep hours {} out of range [0, 24]",
                self.sleep_hours
            ));
        }
        if self.daily_steps > 100_000 {
            errors.push(format!("Daily steps {} out of range [0, 100000]", self.daily_steps));
        }
        if !(0.0..=15.0).contains(&self.water_intake) {
            errors.push(format!(
                "Water intake {} out of range [0, 15]",
                self.water_intake
            ));
        }
        if !(10.0..=70.0).contains(&self.bmi) {
            errors.push(format!("BMI {} out of range [10, 70]", self.bmi));
        }
        if !(25..=250).contains(&self.resting_heart_rate) {
            errors.push(format!(
                "Resting heart rate {} out of range [25, 250]",
                self.resting_heart_rate
            ));
        }
        if !(50..=250).contains(&self.systolic_bp) {
            errors.push(format!(
                "Systolic BP {} out of range [50, 250]",
                self.systolic_bp
            ));
        }
        if !(30..=150).contains(&self.diastolic_bp) {
            errors.push(format!(
                "Diastolic BP {} out of range [30, 150]",
                self.diastolic_bp
            ));
        }
        if !(50..=500).contains(&self.cholesterol) {
            errors.push(format!(
                "Cholesterol {} out of range [50, 500]",
                self.cholesterol
            ));
        }
        if !(30..=600).contains(&self.blood_sugar) {
            errors.push(format!(
                "Blood sugar {} out of range [30, 600]",
                self.blood_sugar
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
