//! Session state
//!
//! Owned, mutable tracking state for one user session: current weight,
//! selected category, and the two append-only ledgers with id-based removal.
//! The engine itself stays storage-agnostic; this module only defines the
//! serialized shape (keyed `weight` / `activityLevel` / `meals` /
//! `workouts`) and leaves where the bytes live to the caller.

use crate::error::EngineError;
use crate::types::{ActivityCategory, EngineInput, MealEntry, ProfileSelection, WorkoutEntry};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Lower bound for interactive weight writes (kg)
pub const MIN_WEIGHT_KG: f64 = 30.0;

/// Upper bound for interactive weight writes (kg)
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Persisted session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current body weight (kg)
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Selected activity / body-composition category
    #[serde(rename = "activityLevel")]
    pub activity: ProfileSelection,
    /// Meal ledger, insertion order is display order
    pub meals: Vec<MealEntry>,
    /// Workout ledger, insertion order is display order
    pub workouts: Vec<WorkoutEntry>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            weight_kg: 82.0,
            activity: ActivityCategory::Regular.into(),
            meals: Vec::new(),
            workouts: Vec::new(),
        }
    }
}

impl SessionState {
    /// Set the current weight, clamped to [30, 300] kg at 0.1 kg resolution
    pub fn set_weight(&mut self, weight_kg: f64) {
        let clamped = weight_kg.clamp(MIN_WEIGHT_KG, MAX_WEIGHT_KG);
        self.weight_kg = (clamped * 10.0).round() / 10.0;
    }

    /// Log an egg-based meal; returns the new entry id, or `None` if the
    /// entry was rejected (zero calories)
    pub fn log_eggs(&mut self, count: u32) -> Option<i64> {
        let id = self.next_id();
        let meal = MealEntry::eggs(id, count)?;
        self.meals.push(meal);
        Some(id)
    }

    /// Log a rice-based meal from a grams input
    pub fn log_rice(&mut self, grams: u32) -> Option<i64> {
        let id = self.next_id();
        let meal = MealEntry::rice(id, grams)?;
        self.meals.push(meal);
        Some(id)
    }

    /// Log a custom meal with explicit calories and protein
    pub fn log_custom_meal(&mut self, calories: u32, protein: f64) -> Option<i64> {
        let id = self.next_id();
        let meal = MealEntry::custom(id, calories, protein)?;
        self.meals.push(meal);
        Some(id)
    }

    /// Log a running workout against the current weight; returns `None` if
    /// the entry was rejected (non-positive duration or distance)
    pub fn log_run(&mut self, distance_km: f64, duration_min: f64) -> Option<i64> {
        let id = self.next_id();
        let workout = WorkoutEntry::run(id, self.weight_kg, distance_km, duration_min)?;
        self.workouts.push(workout);
        Some(id)
    }

    /// Delete a meal by id; returns whether an entry was removed
    pub fn delete_meal(&mut self, id: i64) -> bool {
        let before = self.meals.len();
        self.meals.retain(|meal| meal.id != id);
        self.meals.len() != before
    }

    /// Delete a workout by id; returns whether an entry was removed
    pub fn delete_workout(&mut self, id: i64) -> bool {
        let before = self.workouts.len();
        self.workouts.retain(|workout| workout.id != id);
        self.workouts.len() != before
    }

    /// Snapshot this session as an engine input against a goal weight
    pub fn to_input(&self, goal_weight_kg: f64) -> EngineInput {
        EngineInput {
            current_weight_kg: self.weight_kg,
            goal_weight_kg,
            activity: self.activity.clone(),
            meals: self.meals.clone(),
            workouts: self.workouts.clone(),
        }
    }

    /// Load session state from JSON
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::ParseError(e.to_string()))
    }

    /// Serialize session state to JSON
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(EngineError::from)
    }

    /// Millisecond-epoch id with a monotonic floor, so same-millisecond
    /// inserts still get distinct, strictly increasing ids
    fn next_id(&self) -> i64 {
        let max_existing = self
            .meals
            .iter()
            .map(|meal| meal.id)
            .chain(self.workouts.iter().map(|workout| workout.id))
            .max()
            .unwrap_or(0);
        Utc::now().timestamp_millis().max(max_existing + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_weight_clamps_and_rounds() {
        let mut session = SessionState::default();
        session.set_weight(1000.0);
        assert_eq!(session.weight_kg, 300.0);
        session.set_weight(12.34);
        assert_eq!(session.weight_kg, 30.0);
        session.set_weight(81.27);
        assert_eq!(session.weight_kg, 81.3);
    }

    #[test]
    fn test_log_and_delete_by_id() {
        let mut session = SessionState::default();
        let first = session.log_eggs(2).unwrap();
        let second = session.log_rice(100).unwrap();
        assert_eq!(session.meals.len(), 2);

        assert!(session.delete_meal(first));
        assert_eq!(session.meals.len(), 1);
        assert_eq!(session.meals[0].id, second);
        // Deleting again is a no-op
        assert!(!session.delete_meal(first));
    }

    #[test]
    fn test_rejected_entries_are_not_logged() {
        let mut session = SessionState::default();
        assert!(session.log_eggs(0).is_none());
        assert!(session.log_custom_meal(0, 20.0).is_none());
        assert!(session.log_run(5.0, 0.0).is_none());
        assert!(session.meals.is_empty());
        assert!(session.workouts.is_empty());
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut session = SessionState::default();
        let a = session.log_eggs(1).unwrap();
        let b = session.log_eggs(1).unwrap();
        let c = session.log_run(5.0, 30.0).unwrap();
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn test_run_uses_current_weight() {
        let mut session = SessionState::default();
        session.set_weight(80.0);
        session.log_run(5.0, 30.0).unwrap();
        assert_eq!(session.workouts[0].calories, 414);
    }

    #[test]
    fn test_json_round_trip_preserves_order_and_ids() {
        let mut session = SessionState::default();
        session.set_weight(75.5);
        session.activity = ActivityCategory::Fit.into();
        session.log_eggs(3);
        session.log_rice(150);
        session.log_custom_meal(430, 12.5);
        session.log_run(5.0, 30.0);

        let json = session.to_json().unwrap();
        let loaded = SessionState::from_json(&json).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_persistence_keys() {
        let session = SessionState::default();
        let value: serde_json::Value =
            serde_json::from_str(&session.to_json().unwrap()).unwrap();
        assert_eq!(value["weight"], 82.0);
        assert_eq!(value["activityLevel"], "regular");
        assert!(value["meals"].is_array());
        assert!(value["workouts"].is_array());
    }

    #[test]
    fn test_unknown_activity_level_survives_round_trip() {
        let json = r#"{"weight":70.0,"activityLevel":"athlete","meals":[],"workouts":[]}"#;
        let session = SessionState::from_json(json).unwrap();
        assert_eq!(
            session.activity,
            ProfileSelection::Unrecognized("athlete".to_string())
        );
        let back = session.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&back).unwrap();
        assert_eq!(value["activityLevel"], "athlete");
    }

    #[test]
    fn test_workout_serialized_field_names() {
        let mut session = SessionState::default();
        session.set_weight(80.0);
        session.log_run(5.0, 30.0);
        let value: serde_json::Value =
            serde_json::from_str(&session.to_json().unwrap()).unwrap();
        let workout = &value["workouts"][0];
        assert_eq!(workout["distance"], 5.0);
        assert_eq!(workout["duration"], 30.0);
        assert_eq!(workout["pace"], 6.0);
        assert_eq!(workout["calories"], 414);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SessionState::from_json("not json").is_err());
    }
}
