//! Nutrition analysis
//!
//! Scalar diagnostics over the same inputs as the projection series: loss
//! rate estimates, days-to-goal, protein adequacy against deficit-aware
//! thresholds, and the calorie-to-protein ratio.
//!
//! This module's adaptation multipliers (0.85 weekly, 0.80 monthly) are a
//! second, independently parameterized model of the same phenomenon the
//! projection's day-indexed step schedule covers. The two disagree
//! numerically and are not unified.

use crate::projection::KCAL_PER_KG;
use crate::types::{LedgerTotals, NutritionReport, ProteinStatus, RatioStatus};

/// Adaptation multiplier applied to the weekly deficit
pub const WEEKLY_ADAPTATION: f64 = 0.85;

/// Adaptation multiplier applied to the monthly deficit
pub const MONTHLY_ADAPTATION: f64 = 0.80;

/// Minimum protein target (g/kg): higher in deficit to preserve muscle
const MIN_PROTEIN_DEFICIT: f64 = 1.6;
const MIN_PROTEIN_MAINTENANCE: f64 = 1.2;

/// Optimal protein target (g/kg)
const OPTIMAL_PROTEIN_DEFICIT: f64 = 2.0;
const OPTIMAL_PROTEIN_MAINTENANCE: f64 = 1.6;

/// Floor below which protein intake is critically low (g/kg)
const CRITICAL_PROTEIN_FLOOR: f64 = 0.8;

/// Compute the diagnostics bundle.
///
/// `days_to_goal` is defined only under a caloric deficit; surplus or exact
/// balance reports `None` rather than a number.
pub fn analyze(
    current_weight_kg: f64,
    goal_weight_kg: f64,
    totals: &LedgerTotals,
    tdee: f64,
) -> NutritionReport {
    let daily_deficit = totals.net_calories as f64 - tdee;

    let weekly_loss = (daily_deficit * 7.0 * WEEKLY_ADAPTATION) / KCAL_PER_KG;
    let monthly_loss = (daily_deficit * 30.0 * MONTHLY_ADAPTATION) / KCAL_PER_KG;
    let ninety_day_weight =
        current_weight_kg + (daily_deficit * 90.0 * MONTHLY_ADAPTATION) / KCAL_PER_KG;

    let days_to_goal = (daily_deficit < 0.0).then(|| {
        let remaining_kcal = (current_weight_kg - goal_weight_kg) * KCAL_PER_KG;
        (remaining_kcal / (daily_deficit * WEEKLY_ADAPTATION).abs()).ceil() as i64
    });

    let in_deficit = daily_deficit < 0.0;
    let min_protein = if in_deficit {
        MIN_PROTEIN_DEFICIT
    } else {
        MIN_PROTEIN_MAINTENANCE
    };
    let optimal_protein = if in_deficit {
        OPTIMAL_PROTEIN_DEFICIT
    } else {
        OPTIMAL_PROTEIN_MAINTENANCE
    };

    let protein_per_kg = totals.meal_protein / current_weight_kg;
    let protein_status = classify_protein(protein_per_kg, min_protein, optimal_protein);

    // Guarded on meal calories, not protein: zero protein with nonzero
    // calories legitimately yields an infinite ratio. Callers wanting to
    // distinguish "no data" must check meal_protein themselves.
    let calorie_protein_ratio = if totals.meal_calories > 0 {
        totals.meal_calories as f64 / totals.meal_protein
    } else {
        0.0
    };
    let ratio_status = classify_ratio(calorie_protein_ratio);

    let tdee_percentage = if totals.meal_calories > 0 {
        (totals.meal_calories as f64 / tdee) * 100.0
    } else {
        0.0
    };

    NutritionReport {
        daily_deficit,
        weekly_loss,
        monthly_loss,
        ninety_day_weight,
        days_to_goal,
        protein_per_kg,
        min_protein,
        optimal_protein,
        protein_status,
        calorie_protein_ratio,
        ratio_status,
        tdee_percentage,
    }
}

/// Ordered thresholds, first match wins; lower bounds are inclusive
fn classify_protein(protein_per_kg: f64, min_protein: f64, optimal_protein: f64) -> ProteinStatus {
    if protein_per_kg >= optimal_protein {
        ProteinStatus::Excellent
    } else if protein_per_kg >= min_protein {
        ProteinStatus::Good
    } else if protein_per_kg >= CRITICAL_PROTEIN_FLOOR {
        ProteinStatus::Low
    } else {
        ProteinStatus::Critical
    }
}

/// Ideal is 10-15 kcal per gram of protein for lean gains, under 10 for an
/// aggressive cut
fn classify_ratio(calorie_protein_ratio: f64) -> RatioStatus {
    if calorie_protein_ratio <= 10.0 {
        RatioStatus::Excellent
    } else if calorie_protein_ratio <= 15.0 {
        RatioStatus::Good
    } else {
        RatioStatus::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(meal_calories: i64, meal_protein: f64, workout_calories: i64) -> LedgerTotals {
        LedgerTotals {
            meal_calories,
            meal_protein,
            workout_calories,
            net_calories: meal_calories - workout_calories,
        }
    }

    #[test]
    fn test_loss_estimates() {
        // No intake, TDEE 2409: deficit -2409
        let report = analyze(82.0, 67.0, &totals(0, 0.0, 0), 2409.0);
        assert_eq!(report.daily_deficit, -2409.0);

        let expected_weekly = (-2409.0 * 7.0 * 0.85) / 7700.0;
        let expected_monthly = (-2409.0 * 30.0 * 0.80) / 7700.0;
        assert!((report.weekly_loss - expected_weekly).abs() < 1e-9);
        assert!((report.monthly_loss - expected_monthly).abs() < 1e-9);

        let expected_90 = 82.0 + (-2409.0 * 90.0 * 0.80) / 7700.0;
        assert!((report.ninety_day_weight - expected_90).abs() < 1e-9);
    }

    #[test]
    fn test_days_to_goal_in_deficit() {
        let report = analyze(82.0, 67.0, &totals(0, 0.0, 0), 2409.0);
        // ceil((82 - 67) * 7700 / |-2409 * 0.85|) = ceil(56.40...) = 57
        assert_eq!(report.days_to_goal, Some(57));
    }

    #[test]
    fn test_days_to_goal_none_without_deficit() {
        // Surplus
        let report = analyze(82.0, 67.0, &totals(3000, 100.0, 0), 2409.0);
        assert_eq!(report.days_to_goal, None);
        // Exact balance
        let report = analyze(82.0, 67.0, &totals(2409, 100.0, 0), 2409.0);
        assert_eq!(report.days_to_goal, None);
    }

    #[test]
    fn test_protein_thresholds_shift_with_deficit() {
        // Deficit: thresholds 1.6 / 2.0
        let report = analyze(80.0, 67.0, &totals(500, 100.0, 0), 2409.0);
        assert_eq!(report.min_protein, 1.6);
        assert_eq!(report.optimal_protein, 2.0);
        // Surplus: thresholds 1.2 / 1.6
        let report = analyze(80.0, 67.0, &totals(3000, 100.0, 0), 2409.0);
        assert_eq!(report.min_protein, 1.2);
        assert_eq!(report.optimal_protein, 1.6);
    }

    #[test]
    fn test_protein_status_boundaries_inclusive() {
        // 80 kg in deficit: min 1.6 -> 128 g exactly classifies Good
        let report = analyze(80.0, 67.0, &totals(500, 128.0, 0), 2409.0);
        assert_eq!(report.protein_status, ProteinStatus::Good);
        // Optimal 2.0 -> 160 g exactly classifies Excellent
        let report = analyze(80.0, 67.0, &totals(500, 160.0, 0), 2409.0);
        assert_eq!(report.protein_status, ProteinStatus::Excellent);
        // 0.8 g/kg -> 64 g exactly classifies Low
        let report = analyze(80.0, 67.0, &totals(500, 64.0, 0), 2409.0);
        assert_eq!(report.protein_status, ProteinStatus::Low);
        // Just below the floor -> Critical
        let report = analyze(80.0, 67.0, &totals(500, 63.0, 0), 2409.0);
        assert_eq!(report.protein_status, ProteinStatus::Critical);
    }

    #[test]
    fn test_ratio_statuses() {
        // 500 kcal / 50 g = 10.0 -> Excellent (inclusive)
        let report = analyze(80.0, 67.0, &totals(500, 50.0, 0), 2409.0);
        assert_eq!(report.calorie_protein_ratio, 10.0);
        assert_eq!(report.ratio_status, RatioStatus::Excellent);
        // 750 / 50 = 15.0 -> Good (inclusive)
        let report = analyze(80.0, 67.0, &totals(750, 50.0, 0), 2409.0);
        assert_eq!(report.ratio_status, RatioStatus::Good);
        // 800 / 50 = 16.0 -> High
        let report = analyze(80.0, 67.0, &totals(800, 50.0, 0), 2409.0);
        assert_eq!(report.ratio_status, RatioStatus::High);
    }

    #[test]
    fn test_ratio_zero_convention_without_meal_calories() {
        let report = analyze(80.0, 67.0, &totals(0, 0.0, 500), 2409.0);
        assert_eq!(report.calorie_protein_ratio, 0.0);
        assert_eq!(report.tdee_percentage, 0.0);
        // 0 classifies Excellent; callers must treat zero protein as a
        // precondition before trusting the ratio
        assert_eq!(report.ratio_status, RatioStatus::Excellent);
    }

    #[test]
    fn test_ratio_with_calories_but_no_protein_is_infinite() {
        let report = analyze(80.0, 67.0, &totals(500, 0.0, 0), 2409.0);
        assert!(report.calorie_protein_ratio.is_infinite());
        assert_eq!(report.ratio_status, RatioStatus::High);
    }

    #[test]
    fn test_tdee_percentage() {
        let report = analyze(80.0, 67.0, &totals(1200, 80.0, 0), 2400.0);
        assert!((report.tdee_percentage - 50.0).abs() < 1e-9);
    }
}
