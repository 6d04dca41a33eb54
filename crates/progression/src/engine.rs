use std::collections::BTreeMap;

use log::{debug, error};

use crate::{
    LoggingSet, ProgressionError, ProgressionRecommendation, ProgressionScheme,
    ProgressionSettings, SetResult, Workout, WorkoutLift, WorkoutLiftID, logging_set::logging_sets,
    progression::calculator,
};

/// Entry point for calculating the weights of upcoming sets.
pub struct ProgressionEngine {
    settings: ProgressionSettings,
}

macro_rules! log_on_error {
    ($result: expr, $lift: expr) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!(
                "failed to calculate {} of lift {}: {err}",
                $lift.progression_scheme.name(),
                $lift.lift_id
            );
        }
        result
    }};
}

impl ProgressionEngine {
    #[must_use]
    pub fn new(settings: ProgressionSettings) -> Self {
        Self { settings }
    }

    /// Recommendations for every lift of `workout`, keyed by workout lift.
    ///
    /// `previous` may contain results of any lift. Whether a lift is in its
    /// deload week is derived from its latest result.
    pub fn calculate_workout_progression(
        &self,
        program_deload_week: u32,
        workout: &Workout,
        previous: &[SetResult],
    ) -> Result<BTreeMap<WorkoutLiftID, Vec<ProgressionRecommendation>>, ProgressionError> {
        workout
            .lifts
            .iter()
            .map(|lift| -> Result<_, ProgressionError> {
                let results = previous
                    .iter()
                    .filter(|r| r.lift_id == lift.lift_id)
                    .cloned()
                    .collect::<Vec<_>>();
                let deload_week = lift.deload_week.unwrap_or(program_deload_week);
                let deload = is_deload_week(deload_week, &results);
                debug!(
                    "calculating {} of lift {} with {} previous results{}",
                    lift.progression_scheme.name(),
                    lift.lift_id,
                    results.len(),
                    if deload { " in deload week" } else { "" }
                );
                let recommendations = log_on_error!(
                    calculator(lift.progression_scheme, self.settings, program_deload_week)
                        .calculate(lift, &results, deload),
                    lift
                )?;
                Ok((lift.id, recommendations))
            })
            .collect()
    }

    /// Sets of `lift` ready to be logged.
    ///
    /// `previous` are the results the recommendations are based on and
    /// `previous_for_display` the results shown next to each set.
    pub fn calculate_progression(
        &self,
        lift: &WorkoutLift,
        previous: &[SetResult],
        previous_for_display: &[SetResult],
        is_deload_week: bool,
        program_deload_week: u32,
    ) -> Result<Vec<LoggingSet>, ProgressionError> {
        let recommendations = log_on_error!(
            calculator(lift.progression_scheme, self.settings, program_deload_week).calculate(
                lift,
                previous,
                is_deload_week
            ),
            lift
        )?;

        let performed = if is_deload_week
            && lift.progression_scheme == ProgressionScheme::DoubleProgression
        {
            lift.deload_substitute()
        } else {
            lift.clone()
        };

        log_on_error!(
            logging_sets(
                &performed,
                self.settings.rest_time(lift),
                &recommendations,
                previous_for_display,
            ),
            lift
        )
    }
}

/// The week following the latest result is the one-based `deload_week`.
#[must_use]
pub fn is_deload_week(deload_week: u32, previous: &[SetResult]) -> bool {
    previous
        .iter()
        .max_by_key(|r| (r.meso_cycle, r.micro_cycle))
        .is_some_and(|r| deload_week.checked_sub(2) == Some(r.micro_cycle))
}
