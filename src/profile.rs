//! Body-composition profile table
//!
//! Static mapping from activity category to assumed body-fat fraction and
//! activity multiplier. Resolution of a category key is infallible: an
//! unrecognized key resolves to the fallback constants, by policy rather
//! than as an error.

use crate::types::{ActivityCategory, BodyCompositionProfile, ProfileSelection};

/// BMR substituted when the category has no profile entry (kcal/day)
pub const FALLBACK_BMR: f64 = 1700.0;

/// Activity multiplier substituted when the category has no profile entry
pub const FALLBACK_ACTIVITY_MULTIPLIER: f64 = 1.375;

/// The four body-composition profiles, from highest to lowest body fat
pub static PROFILES: [BodyCompositionProfile; 4] = [
    BodyCompositionProfile {
        category: ActivityCategory::Fat,
        body_fat_fraction: 0.30,
        activity_multiplier: 1.2,
    },
    BodyCompositionProfile {
        category: ActivityCategory::Regular,
        body_fat_fraction: 0.22,
        activity_multiplier: 1.375,
    },
    BodyCompositionProfile {
        category: ActivityCategory::Fit,
        body_fat_fraction: 0.15,
        activity_multiplier: 1.55,
    },
    BodyCompositionProfile {
        category: ActivityCategory::Slim,
        body_fat_fraction: 0.10,
        activity_multiplier: 1.725,
    },
];

/// Resolution outcome for a category selection.
///
/// The fallback arm is an explicit variant rather than a nullable lookup so
/// the silent-substitution path stays visible and testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedProfile {
    Known(&'static BodyCompositionProfile),
    Fallback,
}

/// Resolve a category selection against the profile table
pub fn resolve(selection: &ProfileSelection) -> ResolvedProfile {
    match selection {
        ProfileSelection::Known(category) => {
            match PROFILES.iter().find(|p| p.category == *category) {
                Some(profile) => ResolvedProfile::Known(profile),
                // Unreachable while the table covers every variant, but the
                // fallback keeps resolution total if the table ever shrinks.
                None => ResolvedProfile::Fallback,
            }
        }
        ProfileSelection::Unrecognized(_) => ResolvedProfile::Fallback,
    }
}
