//! Meal and workout ledger
//!
//! Entry construction rules (the unit economics the rest of the engine
//! assumes) plus the pure aggregation of both ledgers into totals and net
//! caloric balance. Construction is fallible by policy: an entry that would
//! contribute zero calories, or a workout with a non-positive duration or
//! distance, is rejected rather than logged.

use crate::types::{LedgerTotals, MealEntry, WorkoutEntry};

/// Calories contributed by one egg (kcal)
pub const CALORIES_PER_EGG: u32 = 70;

/// Protein contributed by one egg (grams)
pub const PROTEIN_PER_EGG: f64 = 6.0;

/// Calories per gram of cooked rice (kcal/g)
pub const CALORIES_PER_GRAM_RICE: f64 = 1.3;

/// Protein per gram of cooked rice (g/g)
pub const PROTEIN_PER_GRAM_RICE: f64 = 0.027;

/// Running energy cost coefficient (kcal per kg per km)
pub const RUN_KCAL_PER_KG_KM: f64 = 1.036;

impl MealEntry {
    /// Egg-based meal: 70 kcal and 6 g protein per egg.
    ///
    /// Returns `None` for a zero count (zero-calorie entries are not logged).
    pub fn eggs(id: i64, count: u32) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let name = if count == 1 {
            "1 egg".to_string()
        } else {
            format!("{count} eggs")
        };
        Some(Self {
            id,
            name,
            calories: count * CALORIES_PER_EGG,
            protein: f64::from(count) * PROTEIN_PER_EGG,
        })
    }

    /// Rice-based meal from a grams input: round(g x 1.3) kcal and
    /// round(g x 0.027) g protein.
    pub fn rice(id: i64, grams: u32) -> Option<Self> {
        let calories = (f64::from(grams) * CALORIES_PER_GRAM_RICE).round() as u32;
        if calories == 0 {
            return None;
        }
        Some(Self {
            id,
            name: format!("{grams}g rice"),
            calories,
            protein: (f64::from(grams) * PROTEIN_PER_GRAM_RICE).round(),
        })
    }

    /// Custom meal with caller-supplied calories and protein.
    pub fn custom(id: i64, calories: u32, protein: f64) -> Option<Self> {
        if calories == 0 {
            return None;
        }
        Some(Self {
            id,
            name: format!("{calories} cal"),
            calories,
            protein,
        })
    }
}

impl WorkoutEntry {
    /// Running workout: calories = round(weight_kg x distance_km x 1.036),
    /// pace = duration / distance at one-decimal resolution.
    ///
    /// Returns `None` for a non-positive duration or distance.
    pub fn run(id: i64, current_weight_kg: f64, distance_km: f64, duration_min: f64) -> Option<Self> {
        if duration_min <= 0.0 || distance_km <= 0.0 {
            return None;
        }
        let pace = duration_min / distance_km;
        Some(Self {
            id,
            distance_km,
            duration_min,
            pace_min_per_km: (pace * 10.0).round() / 10.0,
            calories: (current_weight_kg * distance_km * RUN_KCAL_PER_KG_KM).round() as u32,
        })
    }
}

/// Sum both ledgers into totals and net caloric balance.
///
/// Pure reduction: empty lists yield zero for every field, and the result is
/// independent of entry order.
pub fn aggregate(meals: &[MealEntry], workouts: &[WorkoutEntry]) -> LedgerTotals {
    let meal_calories: i64 = meals.iter().map(|m| i64::from(m.calories)).sum();
    let meal_protein: f64 = meals.iter().map(|m| m.protein).sum();
    let workout_calories: i64 = workouts.iter().map(|w| i64::from(w.calories)).sum();

    LedgerTotals {
        meal_calories,
        meal_protein,
        workout_calories,
        net_calories: meal_calories - workout_calories,
    }
}
