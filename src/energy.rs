//! Energy expenditure calculator
//!
//! BMR via the Katch-McArdle equation (driven by lean body mass rather than
//! total weight), TDEE as BMR scaled by the profile's activity multiplier.
//! Both are total functions over any positive weight: an unresolved category
//! substitutes fixed fallback constants instead of failing.

use crate::profile::{self, ResolvedProfile, FALLBACK_ACTIVITY_MULTIPLIER, FALLBACK_BMR};
use crate::types::ProfileSelection;

/// Basal metabolic rate (kcal/day), rounded to the nearest calorie.
///
/// Katch-McArdle: BMR = 370 + 21.6 x lean_body_mass_kg, with lean body mass
/// estimated from the profile's body-fat fraction.
pub fn compute_bmr(current_weight_kg: f64, selection: &ProfileSelection) -> f64 {
    match profile::resolve(selection) {
        ResolvedProfile::Known(profile) => {
            let lean_body_mass = current_weight_kg * (1.0 - profile.body_fat_fraction);
            (370.0 + 21.6 * lean_body_mass).round()
        }
        ResolvedProfile::Fallback => FALLBACK_BMR,
    }
}

/// Total daily energy expenditure (kcal/day), rounded to the nearest calorie
/// when the profile is known.
///
/// The fallback path multiplies the fallback BMR by 1.375 without rounding,
/// matching the historical behavior exactly.
pub fn compute_tdee(current_weight_kg: f64, selection: &ProfileSelection) -> f64 {
    let bmr = compute_bmr(current_weight_kg, selection);
    match profile::resolve(selection) {
        ResolvedProfile::Known(profile) => (bmr * profile.activity_multiplier).round(),
        ResolvedProfile::Fallback => bmr * FALLBACK_ACTIVITY_MULTIPLIER,
    }
}
