use log::debug;

use crate::{
    ProgressionError, ProgressionScheme, ProgressionSettings, RPE, Reps, SetResult, SetResultKind,
    SetStructure, Weight, WorkoutLift, linear_progression_criterion_met,
};

use super::{ProgressionCalculator, ProgressionRecommendation, increment_weight, top_set, uniform};

/// Fraction of the weight kept after repeatedly missing the goal.
const DELOAD_FACTOR: f32 = 0.9;

/// Raise the weight whenever all sets were performed at the target.
pub struct LinearProgressionCalculator {
    settings: ProgressionSettings,
}

impl LinearProgressionCalculator {
    #[must_use]
    pub fn new(settings: ProgressionSettings) -> Self {
        Self { settings }
    }
}

struct Targets {
    set_count: u32,
    reps: Reps,
    rpe: RPE,
}

fn targets(lift: &WorkoutLift) -> Result<Targets, ProgressionError> {
    match &lift.sets {
        SetStructure::Straight {
            set_count,
            rep_range,
            rpe_target,
        } => Ok(Targets {
            set_count: *set_count,
            reps: rep_range.top,
            rpe: *rpe_target,
        }),
        SetStructure::Custom(_) => Err(ProgressionError::UnsupportedLift {
            lift_id: lift.lift_id,
            scheme: ProgressionScheme::LinearProgression.name(),
        }),
    }
}

fn sorted_results(
    lift: &WorkoutLift,
    previous: &[SetResult],
) -> Result<Vec<SetResult>, ProgressionError> {
    if let Some(result) = previous
        .iter()
        .find(|r| !matches!(r.kind, SetResultKind::LinearProgression { .. }))
    {
        return Err(ProgressionError::UnexpectedSetResult {
            lift_id: lift.lift_id,
            kind: result.kind.name(),
        });
    }
    let mut results = previous.to_vec();
    results.sort_by_key(|r| r.set_position);
    Ok(results)
}

impl ProgressionCalculator for LinearProgressionCalculator {
    fn calculate(
        &self,
        lift: &WorkoutLift,
        previous: &[SetResult],
        _is_deload_week: bool,
    ) -> Result<Vec<ProgressionRecommendation>, ProgressionError> {
        let targets = targets(lift)?;
        let results = sorted_results(lift, previous)?;
        let increment = self.settings.increment(lift);

        let weight = if linear_progression_criterion_met(
            targets.set_count,
            targets.reps,
            targets.rpe,
            &results,
        ) {
            top_set(&results).map(|t| increment_weight(increment, t))
        } else if let Some(missed) = results
            .iter()
            .find(|r| r.missed_lp_goals().is_some_and(|m| m > 1))
        {
            debug!(
                "deloading lift {} after {} missed goals",
                lift.lift_id,
                missed.missed_lp_goals().unwrap_or_default()
            );
            Some(Weight::round_to_nearest(
                f32::from(missed.weight) * DELOAD_FACTOR,
                increment,
            ))
        } else {
            results.first().map(|r| r.weight)
        };

        Ok(uniform(targets.set_count, weight))
    }
}

/// Results with their missed goal counter updated after the workout was completed.
///
/// The counter is reset if the goal was met and incremented otherwise.
pub fn update_missed_goals(
    lift: &WorkoutLift,
    results: &[SetResult],
) -> Result<Vec<SetResult>, ProgressionError> {
    let targets = targets(lift)?;
    let results = sorted_results(lift, results)?;
    let goal_met =
        linear_progression_criterion_met(targets.set_count, targets.reps, targets.rpe, &results);

    Ok(results
        .into_iter()
        .map(|r| {
            let missed_lp_goals = if goal_met {
                0
            } else {
                r.missed_lp_goals().unwrap_or_default() + 1
            };
            SetResult {
                kind: SetResultKind::LinearProgression { missed_lp_goals },
                ..r
            }
        })
        .collect())
}
