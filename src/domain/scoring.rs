//! Rule-based scoring engine.
//!
//! Nine pure analyzers, one per health dimension, each mapping a narrow
//! slice of the profile to a status tier, an optional recommendation and a
//! signed modifier (negative = protective, positive = risk-adding). Tiers
//! are evaluated top-down, first match wins.
//!
//! The aggregator does not sum modifiers into any displayed quantity; the
//! biological age comes from the prediction service. The modifier sum is
//! consumed only by the local fallback estimate (see
//! `application::assessment`), so tier boundaries and modifier values must
//! stay exact.

use super::{
    Category, Frequency, HealthProfile, HealthResults, Impact, MetricAnalysis, MetricStatus,
    Recommendation, RiskZone, SleepQuality,
};

/// Maximum number of recommendations surfaced in a result.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Output of a single analyzer.
///
/// Habits and family history are modifier-only: they never produce a metric,
/// only a risk adjustment and possibly a recommendation.
#[derive(Debug, Clone)]
pub struct MetricScore {
    pub modifier: f64,
    pub metric: Option<MetricAnalysis>,
    pub recommendation: Option<Recommendation>,
}

/// Compose all analyzer outputs with an externally supplied age/score pair
/// into a unified result record.
///
/// Total and deterministic over well-formed input: exactly 8 metrics in
/// fixed order (sleep, exercise, BMI, heart rate, blood pressure,
/// cholesterol, blood sugar, hydration), at most
/// [`MAX_RECOMMENDATIONS`] recommendations in analyzer order. Never reads
/// `biological_age` or `health_score` while generating metrics.
#[must_use]
pub fn calculate_health_results(
    profile: &HealthProfile,
    biological_age: f64,
    health_score: f64,
) -> HealthResults {
    let mut recommendations = Vec::new();
    let mut metrics = Vec::new();

    let scores = [
        analyze_sleep(profile.sleep_hours, profile.sleep_quality),
        analyze_exercise(profile.daily_steps, profile.exercise),
        analyze_habits(profile.smoker, profile.alcohol),
        analyze_bmi(profile.bmi),
        analyze_heart_rate(profile.resting_heart_rate),
        analyze_blood_pressure(profile.systolic_bp, profile.diastolic_bp),
        analyze_cholesterol(profile.cholesterol),
        analyze_blood_sugar(profile.blood_sugar),
        analyze_hydration(profile.water_intake),
        analyze_family_history(profile),
    ];

    for score in scores {
        if let Some(metric) = score.metric {
            metrics.push(metric);
        }
        if let Some(recommendation) = score.recommendation {
            recommendations.push(recommendation);
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);

    HealthResults {
        biological_age,
        health_score,
        risk_zone: RiskZone::from_score(health_score),
        age_difference: biological_age - f64::from(profile.age),
        recommendations,
        metrics,
    }
}

/// Net modifier across all dimensions, used by the local fallback estimate
/// when the prediction service is unavailable.
#[must_use]
pub fn modifier_total(profile: &HealthProfile) -> f64 {
    analyze_sleep(profile.sleep_hours, profile.sleep_quality).modifier
        + analyze_exercise(profile.daily_steps, profile.exercise).modifier
        + analyze_habits(profile.smoker, profile.alcohol).modifier
        + analyze_bmi(profile.bmi).modifier
        + analyze_heart_rate(profile.resting_heart_rate).modifier
        + analyze_blood_pressure(profile.systolic_bp, profile.diastolic_bp).modifier
        + analyze_cholesterol(profile.cholesterol).modifier
        + analyze_blood_sugar(profile.blood_sugar).modifier
        + analyze_hydration(profile.water_intake).modifier
        + analyze_family_history(profile).modifier
}

#[must_use]
pub fn analyze_sleep(hours: f64, quality: SleepQuality) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if (7.0..=9.0).contains(&hours) && quality == SleepQuality::Excellent {
        modifier = -2.0;
        status = MetricStatus::Excellent;
    } else if (6.0..=9.0).contains(&hours) && quality >= SleepQuality::Good {
        modifier = -1.0;
        status = MetricStatus::Good;
    } else if (5.0..=10.0).contains(&hours) {
        modifier = 1.0;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "sleep-1",
            category: Category::Sleep,
            title: "Optimize Your Sleep",
            description: "Aim for 7-9 hours of quality sleep. Consider establishing a consistent bedtime routine.",
            impact: Impact::High,
            icon: "Moon",
        });
    } else {
        modifier = 3.0;
        status = MetricStatus::Warning;
        recommendation = Some(Recommendation {
            id: "sleep-2",
            category: Category::Sleep,
            title: "Critical: Improve Sleep Habits",
            description: "Your sleep duration is far from optimal. Poor sleep significantly accelerates aging.",
            impact: Impact::High,
            icon: "Moon",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "Sleep Quality",
            value: hours,
            status,
            optimal: "7-9 hours",
        }),
        recommendation,
    }
}

#[must_use]
pub fn analyze_exercise(steps: u32, frequency: Frequency) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if steps >= 10_000 && frequency == Frequency::Daily {
        modifier = -3.0;
        status = MetricStatus::Excellent;
    } else if steps >= 7_000 && matches!(frequency, Frequency::Daily | Frequency::Weekly) {
        modifier = -1.0;
        status = MetricStatus::Good;
    } else if steps >= 5_000 {
        modifier = 1.0;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "exercise-1",
            category: Category::Exercise,
            title: "Increase Physical Activity",
            description: "Try to reach 10,000 steps daily and add strength training twice a week.",
            impact: Impact::High,
            icon: "Activity",
        });
    } else {
        modifier = 3.0;
        status = MetricStatus::Warning;
        recommendation = Some(Recommendation {
            id: "exercise-2",
            category: Category::Exercise,
            title: "Start Moving More",
            description: "Sedentary lifestyle is a major aging accelerator. Start with 30-minute daily walks.",
            impact: Impact::High,
            icon: "Activity",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "Daily Activity",
            value: f64::from(steps),
            status,
            optimal: "10,000+ steps",
        }),
        recommendation,
    }
}

/// Modifier-only. Smoking always flags and takes priority; the daily-alcohol
/// recommendation never overrides it.
#[must_use]
pub fn analyze_habits(smoker: bool, alcohol: Frequency) -> MetricScore {
    let mut modifier = 0.0;
    let mut recommendation = None;

    if smoker {
        modifier += 5.0;
        recommendation = Some(Recommendation {
            id: "habits-1",
            category: Category::Habits,
            title: "Quit Smoking",
            description: "Smoking adds years to your biological age. Consider cessation programs.",
            impact: Impact::High,
            icon: "Ban",
        });
    }

    if alcohol == Frequency::Daily {
        modifier += 2.0;
        if recommendation.is_none() {
            recommendation = Some(Recommendation {
                id: "habits-2",
                category: Category::Habits,
                title: "Reduce Alcohol Intake",
                description: "Daily alcohol consumption accelerates aging. Limit to occasional use.",
                impact: Impact::Medium,
                icon: "Wine",
            });
        }
    }

    if !smoker && matches!(alcohol, Frequency::Never | Frequency::Occasionally) {
        modifier -= 1.0;
    }

    MetricScore {
        modifier,
        metric: None,
        recommendation,
    }
}

#[must_use]
pub fn analyze_bmi(bmi: f64) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if (18.5..=24.9).contains(&bmi) {
        modifier = -1.0;
        status = MetricStatus::Excellent;
    } else if (17.0..=27.0).contains(&bmi) {
        modifier = 1.0;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "bmi-1",
            category: Category::Nutrition,
            title: "Optimize Body Composition",
            description: "Work towards a BMI between 18.5-24.9 through balanced nutrition and exercise.",
            impact: Impact::Medium,
            icon: "Scale",
        });
    } else {
        modifier = 3.0;
        status = MetricStatus::Warning;
        recommendation = Some(Recommendation {
            id: "bmi-2",
            category: Category::Nutrition,
            title: "Address Weight Management",
            description: "Your BMI is outside the healthy range. Consider consulting a nutritionist.",
            impact: Impact::High,
            icon: "Scale",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "BMI",
            value: bmi,
            status,
            optimal: "18.5-24.9",
        }),
        recommendation,
    }
}

#[must_use]
pub fn analyze_heart_rate(hr: u32) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if (50..=65).contains(&hr) {
        modifier = -2.0;
        status = MetricStatus::Excellent;
    } else if (60..=80).contains(&hr) {
        modifier = 0.0;
        status = MetricStatus::Good;
    } else if (80..=100).contains(&hr) {
        modifier = 1.0;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "heart-1",
            category: Category::Exercise,
            title: "Improve Cardiovascular Fitness",
            description: "Regular cardio exercise can lower your resting heart rate.",
            impact: Impact::Medium,
            icon: "Heart",
        });
    } else {
        modifier = 2.0;
        status = MetricStatus::Warning;
        recommendation = Some(Recommendation {
            id: "heart-2",
            category: Category::Medical,
            title: "Monitor Heart Rate",
            description: "Your resting heart rate is outside normal range. Consult a physician.",
            impact: Impact::High,
            icon: "Heart",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "Resting Heart Rate",
            value: f64::from(hr),
            status,
            optimal: "60-80 bpm",
        }),
        recommendation,
    }
}

#[must_use]
pub fn analyze_blood_pressure(systolic: u32, diastolic: u32) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if systolic < 120 && diastolic < 80 {
        modifier = -1.0;
        status = MetricStatus::Excellent;
    } else if systolic < 130 && diastolic < 85 {
        modifier = 0.0;
        status = MetricStatus::Good;
    } else if systolic < 140 && diastolic < 90 {
        modifier = 2.0;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "bp-1",
            category: Category::Medical,
            title: "Monitor Blood Pressure",
            description: "Your BP is elevated. Reduce sodium intake and increase physical activity.",
            impact: Impact::High,
            icon: "Stethoscope",
        });
    } else {
        modifier = 4.0;
        status = MetricStatus::Risk;
        recommendation = Some(Recommendation {
            id: "bp-2",
            category: Category::Medical,
            title: "High Blood Pressure Alert",
            description: "Consult a healthcare provider immediately. Hypertension requires attention.",
            impact: Impact::High,
            icon: "Stethoscope",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "Blood Pressure",
            value: f64::from(systolic),
            status,
            optimal: "<120/80 mmHg",
        }),
        recommendation,
    }
}

#[must_use]
pub fn analyze_cholesterol(total: u32) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if total < 180 {
        modifier = -1.0;
        status = MetricStatus::Excellent;
    } else if total < 200 {
        modifier = 0.0;
        status = MetricStatus::Good;
    } else if total < 240 {
        modifier = 1.0;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "chol-1",
            category: Category::Nutrition,
            title: "Manage Cholesterol",
            description: "Increase fiber intake and reduce saturated fats to improve cholesterol levels.",
            impact: Impact::Medium,
            icon: "Droplets",
        });
    } else {
        modifier = 3.0;
        status = MetricStatus::Risk;
        recommendation = Some(Recommendation {
            id: "chol-2",
            category: Category::Medical,
            title: "High Cholesterol Alert",
            description: "Consult your doctor about cholesterol management strategies.",
            impact: Impact::High,
            icon: "Droplets",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "Total Cholesterol",
            value: f64::from(total),
            status,
            optimal: "<200 mg/dL",
        }),
        recommendation,
    }
}

#[must_use]
pub fn analyze_blood_sugar(fasting: u32) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if fasting < 90 {
        modifier = -1.0;
        status = MetricStatus::Excellent;
    } else if fasting < 100 {
        modifier = 0.0;
        status = MetricStatus::Good;
    } else if fasting < 126 {
        modifier = 2.0;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "sugar-1",
            category: Category::Nutrition,
            title: "Pre-diabetes Warning",
            description: "Your blood sugar is elevated. Reduce refined carbs and increase activity.",
            impact: Impact::High,
            icon: "Cookie",
        });
    } else {
        modifier = 4.0;
        status = MetricStatus::Risk;
        recommendation = Some(Recommendation {
            id: "sugar-2",
            category: Category::Medical,
            title: "Diabetic Range Alert",
            description: "Your blood sugar indicates diabetes. Seek medical attention immediately.",
            impact: Impact::High,
            icon: "Cookie",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "Fasting Blood Sugar",
            value: f64::from(fasting),
            status,
            optimal: "<100 mg/dL",
        }),
        recommendation,
    }
}

#[must_use]
pub fn analyze_hydration(liters: f64) -> MetricScore {
    let modifier;
    let status;
    let mut recommendation = None;

    if liters >= 2.5 {
        modifier = -1.0;
        status = MetricStatus::Excellent;
    } else if liters >= 2.0 {
        modifier = 0.0;
        status = MetricStatus::Good;
    } else if liters >= 1.5 {
        modifier = 0.5;
        status = MetricStatus::Moderate;
        recommendation = Some(Recommendation {
            id: "hydration-1",
            category: Category::Nutrition,
            title: "Increase Water Intake",
            description: "Aim for at least 2.5 liters of water daily for optimal cellular function.",
            impact: Impact::Low,
            icon: "Droplet",
        });
    } else {
        modifier = 1.0;
        status = MetricStatus::Warning;
        recommendation = Some(Recommendation {
            id: "hydration-2",
            category: Category::Nutrition,
            title: "Dehydration Warning",
            description: "You are likely chronically dehydrated. This affects all body systems.",
            impact: Impact::Medium,
            icon: "Droplet",
        });
    }

    MetricScore {
        modifier,
        metric: Some(MetricAnalysis {
            name: "Daily Hydration",
            value: liters,
            status,
            optimal: "2.5+ liters",
        }),
        recommendation,
    }
}

/// Modifier-only. The recommendation fires only when the summed modifier
/// exceeds 1, so a longevity flag can cancel out adverse history.
#[must_use]
pub fn analyze_family_history(profile: &HealthProfile) -> MetricScore {
    let mut modifier = 0.0;

    if profile.family_heart_disease {
        modifier += 1.0;
    }
    if profile.family_diabetes {
        modifier += 1.0;
    }
    if profile.family_cancer {
        modifier += 0.5;
    }
    if profile.family_longevity {
        modifier -= 2.0;
    }

    let recommendation = if modifier > 1.0 {
        Some(Recommendation {
            id: "family-1",
            category: Category::Medical,
            title: "Preventive Health Focus",
            description: "Your family history suggests increased risk. Regular screenings are essential.",
            impact: Impact::High,
            icon: "Users",
        })
    } else {
        None
    };

    MetricScore {
        modifier,
        metric: None,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    fn baseline() -> HealthProfile {
        HealthProfile {
            age: 35,
            gender: Gender::Male,
            sleep_hours: 7.5,
            sleep_quality: SleepQuality::Good,
            daily_steps: 8000,
            water_intake: 2.0,
            smoker: false,
            alcohol: Frequency::Occasionally,
            exercise: Frequency::Weekly,
            bmi: 22.5,
            resting_heart_rate: 62,
            systolic_bp: 118,
            diastolic_bp: 76,
            cholesterol: 185,
            blood_sugar: 92,
            family_heart_disease: false,
            family_diabetes: false,
            family_cancer: false,
            family_longevity: false,
        }
    }

    #[test]
    fn test_eight_metrics_in_fixed_order() {
        let results = calculate_health_results(&baseline(), 34.0, 8.2);
        let names: Vec<&str> = results.metrics.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "Sleep Quality",
                "Daily Activity",
                "BMI",
                "Resting Heart Rate",
                "Blood Pressure",
                "Total Cholesterol",
                "Fasting Blood Sugar",
                "Daily Hydration",
            ]
        );
    }

    #[test]
    fn test_recommendations_capped_at_five() {
        // Worst-case profile: every analyzer wants to emit.
        let profile = HealthProfile {
            sleep_hours: 3.0,
            sleep_quality: SleepQuality::Poor,
            daily_steps: 1000,
            water_intake: 0.5,
            smoker: true,
            alcohol: Frequency::Daily,
            bmi: 34.0,
            resting_heart_rate: 110,
            systolic_bp: 150,
            diastolic_bp: 95,
            cholesterol: 260,
            blood_sugar: 140,
            family_heart_disease: true,
            family_diabetes: true,
            ..baseline()
        };
        let results = calculate_health_results(&profile, 48.0, 2.1);
        assert_eq!(results.recommendations.len(), MAX_RECOMMENDATIONS);
        // Analyzer order is preserved: sleep first, then exercise, habits...
        let ids: Vec<&str> = results.recommendations.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec!["sleep-2", "exercise-2", "habits-1", "bmi-2", "heart-2"]
        );
    }

    #[test]
    fn test_age_difference_recomputed() {
        let results = calculate_health_results(&baseline(), 39.5, 6.0);
        assert!((results.age_difference - 4.5).abs() < 1e-9);
        assert_eq!(results.risk_zone, RiskZone::Medium);
    }

    #[test]
    fn test_aggregator_is_idempotent() {
        let profile = baseline();
        let a = calculate_health_results(&profile, 34.27, 7.81);
        let b = calculate_health_results(&profile, 34.27, 7.81);
        let a_json = serde_json::to_string(&a).expect("Should serialize");
        let b_json = serde_json::to_string(&b).expect("Should serialize");
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn test_sleep_tier_boundaries() {
        let score = analyze_sleep(7.0, SleepQuality::Excellent);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Excellent);
        assert!((score.modifier - -2.0).abs() < f64::EPSILON);

        // 6.9h misses tier 1 on hours alone, lands in tier 2.
        let score = analyze_sleep(6.9, SleepQuality::Excellent);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Good);

        // Excellent quality alone does not rescue short sleep.
        let score = analyze_sleep(5.5, SleepQuality::Excellent);
        let metric = score.metric.expect("Has metric");
        assert_eq!(metric.status, MetricStatus::Moderate);
        assert_eq!(score.recommendation.expect("Has rec").id, "sleep-1");

        let score = analyze_sleep(4.0, SleepQuality::Good);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Warning);
        assert_eq!(score.recommendation.expect("Has rec").id, "sleep-2");
    }

    #[test]
    fn test_bmi_boundary_exclusivity() {
        let score = analyze_bmi(24.9);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Excellent);

        let score = analyze_bmi(25.0);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Moderate);
        assert_eq!(score.recommendation.expect("Has rec").id, "bmi-1");

        let score = analyze_bmi(16.0);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Warning);
    }

    #[test]
    fn test_blood_pressure_tiering() {
        // 135/82 fails tier 2 on systolic but matches tier 3.
        let score = analyze_blood_pressure(135, 82);
        let metric = score.metric.expect("Has metric");
        assert_eq!(metric.status, MetricStatus::Moderate);
        assert_eq!(score.recommendation.expect("Has rec").id, "bp-1");

        let score = analyze_blood_pressure(119, 79);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Excellent);

        let score = analyze_blood_pressure(145, 88);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Risk);
        assert!((score.modifier - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heart_rate_overlapping_tiers_resolve_top_down() {
        // 60-65 satisfies both tier 1 and tier 2; tier 1 wins.
        let score = analyze_heart_rate(62);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Excellent);

        // 80 satisfies tier 2 before tier 3.
        let score = analyze_heart_rate(80);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Good);

        let score = analyze_heart_rate(101);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Warning);
        assert_eq!(score.recommendation.expect("Has rec").id, "heart-2");
    }

    #[test]
    fn test_smoking_suppresses_alcohol_recommendation() {
        let score = analyze_habits(true, Frequency::Daily);
        let rec = score.recommendation.expect("Has rec");
        assert_eq!(rec.id, "habits-1");
        assert_eq!(rec.impact, Impact::High);
        // Both modifiers still accumulate.
        assert!((score.modifier - 7.0).abs() < f64::EPSILON);

        // In the full result, the habits analyzer contributes exactly one.
        let profile = HealthProfile {
            smoker: true,
            alcohol: Frequency::Daily,
            ..baseline()
        };
        let results = calculate_health_results(&profile, 40.0, 5.0);
        let habit_recs: Vec<&Recommendation> = results
            .recommendations
            .iter()
            .filter(|r| r.category == Category::Habits)
            .collect();
        assert_eq!(habit_recs.len(), 1);
        assert_eq!(habit_recs[0].id, "habits-1");
    }

    #[test]
    fn test_alcohol_alone_flags_at_daily_only() {
        let score = analyze_habits(false, Frequency::Daily);
        assert_eq!(score.recommendation.expect("Has rec").id, "habits-2");
        assert!((score.modifier - 2.0).abs() < f64::EPSILON);

        let score = analyze_habits(false, Frequency::Weekly);
        assert!(score.recommendation.is_none());
        assert!(score.modifier.abs() < f64::EPSILON);

        // Protective modifier for clean habits.
        let score = analyze_habits(false, Frequency::Never);
        assert!((score.modifier - -1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_family_history_threshold() {
        // All four flags: 1 + 1 + 0.5 - 2 = 0.5, below the > 1 threshold.
        let profile = HealthProfile {
            family_heart_disease: true,
            family_diabetes: true,
            family_cancer: true,
            family_longevity: true,
            ..baseline()
        };
        let score = analyze_family_history(&profile);
        assert!((score.modifier - 0.5).abs() < f64::EPSILON);
        assert!(score.recommendation.is_none());

        // Heart disease + diabetes alone crosses it.
        let profile = HealthProfile {
            family_heart_disease: true,
            family_diabetes: true,
            ..baseline()
        };
        let score = analyze_family_history(&profile);
        assert_eq!(score.recommendation.expect("Has rec").id, "family-1");
    }

    #[test]
    fn test_cholesterol_and_sugar_risk_tiers() {
        assert_eq!(
            analyze_cholesterol(240).metric.expect("Has metric").status,
            MetricStatus::Risk
        );
        assert_eq!(
            analyze_cholesterol(239).metric.expect("Has metric").status,
            MetricStatus::Moderate
        );
        assert_eq!(
            analyze_blood_sugar(126).metric.expect("Has metric").status,
            MetricStatus::Risk
        );
        assert_eq!(
            analyze_blood_sugar(89).metric.expect("Has metric").status,
            MetricStatus::Excellent
        );
    }

    #[test]
    fn test_hydration_tiers() {
        assert_eq!(
            analyze_hydration(2.5).metric.expect("Has metric").status,
            MetricStatus::Excellent
        );
        assert_eq!(
            analyze_hydration(1.5).metric.expect("Has metric").status,
            MetricStatus::Moderate
        );
        let score = analyze_hydration(0.8);
        assert_eq!(score.metric.expect("Has metric").status, MetricStatus::Warning);
        assert_eq!(score.recommendation.expect("Has rec").impact, Impact::Medium);
    }

    #[test]
    fn test_modifier_total_for_clean_profile() {
        // sleep -1, exercise -1, habits -1, bmi -1, hr -2, bp -1, chol 0,
        // sugar 0, hydration 0, family 0
        assert!((modifier_total(&baseline()) - -7.0).abs() < 1e-9);
    }
}
