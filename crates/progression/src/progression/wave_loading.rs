use log::debug;

use crate::{
    ProgressionError, ProgressionSettings, SetResult, SetStructure, Weight, WorkoutLift,
    set_result::group_by_position,
};

use super::{
    ProgressionCalculator, ProgressionRecommendation, check_custom_positions, increment_weight,
};

/// Raise the weight every week and step it back down in the deload week.
pub struct WaveLoadingProgressionCalculator {
    settings: ProgressionSettings,
    /// One-based week of the deload, unless overridden by the lift.
    program_deload_week: u32,
}

impl WaveLoadingProgressionCalculator {
    #[must_use]
    pub fn new(settings: ProgressionSettings, program_deload_week: u32) -> Self {
        Self {
            settings,
            program_deload_week,
        }
    }

    fn recommend(&self, lift: &WorkoutLift, deload_week: u32, result: &SetResult) -> Weight {
        let increment = self.settings.increment(lift);
        if !precedes_deload(deload_week, result) {
            return increment_weight(increment, result);
        }
        debug!(
            "deloading set {} of lift {} after micro cycle {}",
            result.set_position, lift.lift_id, result.micro_cycle
        );
        #[allow(clippy::cast_precision_loss)]
        let step_down = increment.trunc() * result.micro_cycle as f32;
        Weight::computed(f32::from(result.weight) - step_down)
    }
}

/// The result was performed in the week before the deload week.
///
/// `deload_week` is one-based and `micro_cycle` is zero-based, so the next
/// week is a deload week if `deload_week - 1 == micro_cycle + 1`.
fn precedes_deload(deload_week: u32, result: &SetResult) -> bool {
    deload_week.checked_sub(2) == Some(result.micro_cycle)
}

impl ProgressionCalculator for WaveLoadingProgressionCalculator {
    fn calculate(
        &self,
        lift: &WorkoutLift,
        previous: &[SetResult],
        _is_deload_week: bool,
    ) -> Result<Vec<ProgressionRecommendation>, ProgressionError> {
        let grouped = group_by_position(previous);
        let positions = match &lift.sets {
            SetStructure::Straight { set_count, .. } => (0..*set_count).collect::<Vec<_>>(),
            SetStructure::Custom(sets) => {
                check_custom_positions(lift, &grouped)?;
                let mut positions = sets.iter().map(|s| s.position()).collect::<Vec<_>>();
                positions.sort_unstable();
                positions
            }
        };
        let deload_week = lift.deload_week.unwrap_or(self.program_deload_week);

        let mut recommendations = vec![];

        for position in positions {
            match grouped.get(&position) {
                Some(results) => recommendations.extend(results.iter().map(|r| {
                    ProgressionRecommendation::new(
                        position,
                        r.myo_rep_set_position(),
                        Some(self.recommend(lift, deload_week, r)),
                    )
                })),
                None => recommendations.push(ProgressionRecommendation::new(position, None, None)),
            }
        }

        Ok(recommendations)
    }
}
