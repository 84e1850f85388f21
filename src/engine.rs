//! Engine orchestration
//!
//! This module provides the public API of the Leanline engine: a single
//! deterministic mapping from [`EngineInput`] to [`EngineOutput`].
//!
//! Stages:
//! 1. Energy calculator - BMR/TDEE from weight and profile
//! 2. Ledger aggregator - totals and net caloric balance
//! 3. Weight projection - 90-day sampled trajectory with goal split
//! 4. Nutrition analysis - scalar diagnostics
//!
//! The four downstream stages are independent pure functions of the same
//! input; re-running with identical inputs yields bit-identical results.

use crate::analysis;
use crate::energy;
use crate::ledger;
use crate::projection;
use crate::types::{EngineInput, EngineOutput};

/// Evaluate the full engine over one input snapshot.
///
/// # Example
/// ```
/// use leanline::engine::evaluate;
/// use leanline::types::{ActivityCategory, EngineInput};
///
/// let input = EngineInput {
///     current_weight_kg: 82.0,
///     goal_weight_kg: 67.0,
///     activity: ActivityCategory::Regular.into(),
///     meals: Vec::new(),
///     workouts: Vec::new(),
/// };
/// let output = evaluate(&input);
/// assert_eq!(output.bmr, 1752.0);
/// ```
pub fn evaluate(input: &EngineInput) -> EngineOutput {
    let bmr = energy::compute_bmr(input.current_weight_kg, &input.activity);
    let tdee = energy::compute_tdee(input.current_weight_kg, &input.activity);

    let totals = ledger::aggregate(&input.meals, &input.workouts);

    let projection = projection::project_weight(
        input.current_weight_kg,
        input.goal_weight_kg,
        totals.net_calories,
        tdee,
    );

    let diagnostics = analysis::analyze(
        input.current_weight_kg,
        input.goal_weight_kg,
        &totals,
        tdee,
    );

    EngineOutput {
        bmr,
        tdee,
        totals,
        projection,
        diagnostics,
    }
}
