//! Core types for the Leanline engine
//!
//! This module defines the data structures that flow through each stage of the
//! engine: body-composition profiles, ledger entries, projection points, and
//! the diagnostics bundle returned to callers.

use serde::{Deserialize, Serialize};

/// Body-composition / activity category selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Fat,
    Regular,
    Fit,
    Slim,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Fat => "fat",
            ActivityCategory::Regular => "regular",
            ActivityCategory::Fit => "fit",
            ActivityCategory::Slim => "slim",
        }
    }
}

/// Category selection as it arrives from the caller or from persisted state.
///
/// Persisted category keys are free-form strings, so an unrecognized key is a
/// legal input: it resolves to fixed fallback BMR/TDEE constants instead of an
/// error. Keeping the unknown key visible here makes the fallback path explicit
/// and testable rather than a buried null-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileSelection {
    Known(ActivityCategory),
    /// Unrecognized category key, preserved as-is for round-tripping
    Unrecognized(String),
}

impl ProfileSelection {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileSelection::Known(category) => category.as_str(),
            ProfileSelection::Unrecognized(key) => key.as_str(),
        }
    }
}

impl From<ActivityCategory> for ProfileSelection {
    fn from(category: ActivityCategory) -> Self {
        ProfileSelection::Known(category)
    }
}

/// Static body-composition profile: assumed body-fat fraction plus activity
/// multiplier for a category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionProfile {
    pub category: ActivityCategory,
    /// Assumed body-fat fraction, in (0, 1)
    pub body_fat_fraction: f64,
    /// TDEE multiplier applied to BMR, > 1
    pub activity_multiplier: f64,
}

/// A logged meal. Immutable once created; removed only by explicit deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Unique id (millisecond-epoch based)
    pub id: i64,
    /// Display name, e.g. "3 eggs" or "150g rice"
    pub name: String,
    /// Calories (kcal), >= 0
    pub calories: u32,
    /// Protein (grams), >= 0
    pub protein: f64,
}

/// A logged running workout. Same lifecycle as [`MealEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Unique id (millisecond-epoch based)
    pub id: i64,
    /// Distance (km), > 0
    #[serde(rename = "distance")]
    pub distance_km: f64,
    /// Duration (minutes), > 0
    #[serde(rename = "duration")]
    pub duration_min: f64,
    /// Pace (min/km), duration / distance at one-decimal resolution
    #[serde(rename = "pace")]
    pub pace_min_per_km: f64,
    /// Calories burned (kcal), >= 0
    pub calories: u32,
}

/// Sums over the meal and workout ledgers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Total meal calories (kcal)
    pub meal_calories: i64,
    /// Total meal protein (grams)
    pub meal_protein: f64,
    /// Total workout calories (kcal)
    pub workout_calories: i64,
    /// Meal calories minus workout calories
    pub net_calories: i64,
}

/// One sampled point of the projected weight trajectory.
///
/// `before_goal` and `after_goal` carry the same weight split around the
/// goal-crossing sample so a renderer can draw two connected line segments;
/// indices outside a segment's domain are `None`, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Day offset from today (0, 15, 30, ... 90)
    pub day: u32,
    /// Projected weight (kg)
    pub weight: f64,
    /// Weight while the goal has not yet been reached (inclusive of crossing)
    pub before_goal: Option<f64>,
    /// Weight from the goal-crossing sample onward
    pub after_goal: Option<f64>,
}

/// Protein sufficiency classification (deficit-aware thresholds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinStatus {
    Excellent,
    Good,
    Low,
    Critical,
}

/// Calorie-to-protein ratio classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioStatus {
    Excellent,
    Good,
    High,
}

/// Scalar diagnostics from the nutrition analysis module.
///
/// Uses its own fixed weekly/monthly adaptation multipliers (0.85 / 0.80),
/// which intentionally disagree with the day-indexed schedule used by the
/// projection series. The two estimates ship side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Net calories minus TDEE; negative means caloric deficit
    pub daily_deficit: f64,
    /// Projected weekly weight change (kg, negative = loss)
    pub weekly_loss: f64,
    /// Projected monthly weight change (kg, negative = loss)
    pub monthly_loss: f64,
    /// Dashboard headline: flat 90-day estimate at a 0.80 adaptation factor
    pub ninety_day_weight: f64,
    /// Estimated days until goal weight; `None` unless in deficit
    pub days_to_goal: Option<i64>,
    /// Protein intake per kg of body weight (g/kg)
    pub protein_per_kg: f64,
    /// Minimum protein target (g/kg) for the current deficit state
    pub min_protein: f64,
    /// Optimal protein target (g/kg) for the current deficit state
    pub optimal_protein: f64,
    pub protein_status: ProteinStatus,
    /// Meal calories per gram of protein; 0 by convention when no meal
    /// calories are logged
    pub calorie_protein_ratio: f64,
    pub ratio_status: RatioStatus,
    /// Meal calories as a percentage of TDEE; 0 when no meal calories
    pub tdee_percentage: f64,
}

/// Sole input to every computation in the engine; no hidden state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    /// Current body weight (kg), > 0
    pub current_weight_kg: f64,
    /// Goal weight (kg), > 0, constant for a session
    pub goal_weight_kg: f64,
    /// Selected activity / body-composition category
    pub activity: ProfileSelection,
    /// Meal ledger, in insertion order
    pub meals: Vec<MealEntry>,
    /// Workout ledger, in insertion order
    pub workouts: Vec<WorkoutEntry>,
}

/// Complete engine output bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    pub totals: LedgerTotals,
    /// Weight trajectory sampled every 15 days over a 90-day horizon
    pub projection: Vec<ProjectionPoint>,
    pub diagnostics: NutritionReport,
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Versioned report envelope wrapping the engine output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    pub report_version: String,
    pub producer: ReportProducer,
    /// When the report was computed (RFC 3339, UTC)
    pub computed_at_utc: String,
    /// Inputs echoed back for provenance
    pub current_weight_kg: f64,
    pub goal_weight_kg: f64,
    pub activity: String,
    pub output: EngineOutput,
}
