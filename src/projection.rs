//! Weight projection model
//!
//! Simulates the forward weight trajectory over a 90-day horizon given the
//! net daily caloric balance, applying a day-indexed metabolic-adaptation
//! step schedule, and splits the series around the goal-crossing sample so a
//! renderer can draw two connected line segments.
//!
//! Note: the nutrition analysis module carries its own, differently
//! parameterized adaptation multipliers. The two estimates disagree
//! numerically and are kept separate on purpose.

use crate::types::ProjectionPoint;

/// Projection horizon in days (inclusive)
pub const HORIZON_DAYS: u32 = 90;

/// Sampling stride in days
pub const SAMPLE_STRIDE_DAYS: u32 = 15;

/// Energy density of body mass (kcal per kg), the standard approximation
pub const KCAL_PER_KG: f64 = 7700.0;

/// Metabolic adaptation factor for a given elapsed day.
///
/// Step schedule: full expenditure through day 30, 5% reduction through day
/// 60, 10% reduction beyond.
pub fn adaptation_factor(day: u32) -> f64 {
    if day > 60 {
        0.90
    } else if day > 30 {
        0.95
    } else {
        1.0
    }
}

/// Project the weight trajectory, sampled every 15 days from day 0 to 90.
///
/// For each sampled day `d`:
/// `weight(d) = current + (daily_deficit x adaptation(d) x d) / 7700`
/// where `daily_deficit = net_calories - tdee` (negative means loss).
///
/// The `before_goal` segment is populated up to and including the first
/// sample at or below the goal weight; `after_goal` from that sample onward.
/// Both are populated at exactly the crossing sample so the segments
/// connect. If the goal is never reached (e.g. caloric surplus), the whole
/// series is `before_goal` and `after_goal` stays empty.
pub fn project_weight(
    current_weight_kg: f64,
    goal_weight_kg: f64,
    net_calories: i64,
    tdee: f64,
) -> Vec<ProjectionPoint> {
    let daily_deficit = net_calories as f64 - tdee;

    let sampled: Vec<(u32, f64)> = (0..=HORIZON_DAYS)
        .step_by(SAMPLE_STRIDE_DAYS as usize)
        .map(|day| {
            let effective_deficit = daily_deficit * adaptation_factor(day);
            let cumulative_deficit = effective_deficit * f64::from(day);
            (day, current_weight_kg + cumulative_deficit / KCAL_PER_KG)
        })
        .collect();

    let crossing = sampled
        .iter()
        .position(|(_, weight)| *weight <= goal_weight_kg);

    sampled
        .into_iter()
        .enumerate()
        .map(|(index, (day, weight))| {
            let reached = crossing.is_some_and(|k| index >= k);
            ProjectionPoint {
                day,
                weight,
                before_goal: match crossing {
                    None => Some(weight),
                    Some(k) if index <= k => Some(weight),
                    Some(_) => None,
                },
                after_goal: reached.then_some(weight),
            }
        })
        .collect()
}
