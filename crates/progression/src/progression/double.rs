use log::debug;

use crate::{
    CustomSet, ProgressionError, ProgressionSettings, RPE, RepRange, SetResult, SetStructure,
    Weight, WorkoutLift, custom_lift_set_criterion_met, deload_targets,
    double_progression_criterion_met,
    set_result::group_by_position,
};

use super::{
    ProgressionCalculator, ProgressionRecommendation, check_custom_positions, failure_weight,
    increment_weight, top_set, uniform,
};

/// Raise the weight once every set reached the top of its rep range.
pub struct DoubleProgressionCalculator {
    settings: ProgressionSettings,
}

impl DoubleProgressionCalculator {
    #[must_use]
    pub fn new(settings: ProgressionSettings) -> Self {
        Self { settings }
    }

    fn straight_sets(
        &self,
        lift: &WorkoutLift,
        set_count: u32,
        rep_range: RepRange,
        rpe_target: RPE,
        previous: &[SetResult],
    ) -> Vec<ProgressionRecommendation> {
        let mut results = previous
            .iter()
            .filter(|r| r.myo_rep_set_position().is_none())
            .cloned()
            .collect::<Vec<_>>();
        results.sort_by_key(|r| r.set_position);

        let Some(top) = top_set(&results) else {
            return uniform(set_count, None);
        };

        let increment = self.settings.increment(lift);
        let weight = if double_progression_criterion_met(rep_range.top, rpe_target, &results) {
            increment_weight(increment, top)
        } else {
            failure_weight(rep_range.bottom, rpe_target, increment, top)
        };

        uniform(set_count, Some(weight))
    }

    fn custom_sets(
        &self,
        lift: &WorkoutLift,
        sets: &[CustomSet],
        previous: &[SetResult],
    ) -> Result<Vec<ProgressionRecommendation>, ProgressionError> {
        let grouped = group_by_position(previous);
        check_custom_positions(lift, &grouped)?;

        let results_at = |position: u32| grouped.get(&position).map_or(&[][..], Vec::as_slice);

        let criterion_met = grouped.len() == sets.len()
            && sets
                .iter()
                .all(|s| custom_lift_set_criterion_met(s, results_at(s.position())));

        let increment = self.settings.increment(lift);
        let mut sets = sets.iter().collect::<Vec<_>>();
        sets.sort_by_key(|s| s.position());

        let mut recommendations = vec![];
        let mut preceding_weight: Option<Weight> = None;

        for set in sets {
            let position = set.position();
            let results = results_at(position);
            let activation = results
                .iter()
                .find(|r| r.myo_rep_set_position().is_none())
                .copied();

            match set {
                CustomSet::Standard(standard) => {
                    let weight = activation.map(|p| {
                        if criterion_met {
                            increment_weight(increment, p)
                        } else {
                            failure_weight(
                                standard.rep_range.bottom,
                                standard.rpe_target,
                                increment,
                                p,
                            )
                        }
                    });
                    recommendations.push(ProgressionRecommendation::new(position, None, weight));
                    preceding_weight = weight;
                }
                CustomSet::Drop(drop) => {
                    let weight = if criterion_met {
                        preceding_weight
                            .map(|w| Weight::computed(f32::from(w) * (1.0 - drop.drop_percentage)))
                    } else {
                        activation.map(|p| {
                            failure_weight(drop.rep_range.bottom, drop.rpe_target, increment, p)
                        })
                    };
                    recommendations.push(ProgressionRecommendation::new(position, None, weight));
                    preceding_weight = weight;
                }
                CustomSet::MyoRep(myo_rep) => {
                    if results.is_empty() {
                        recommendations.push(ProgressionRecommendation::new(position, None, None));
                        preceding_weight = None;
                        continue;
                    }
                    for result in results {
                        let weight = if criterion_met {
                            increment_weight(increment, result)
                        } else if result.myo_rep_set_position().is_none() {
                            failure_weight(
                                myo_rep.rep_range.bottom,
                                myo_rep.rpe_target,
                                increment,
                                result,
                            )
                        } else {
                            failure_weight(
                                myo_rep.rep_floor.unwrap_or_default(),
                                RPE::TEN,
                                increment,
                                result,
                            )
                        };
                        if result.myo_rep_set_position().is_none() {
                            preceding_weight = Some(weight);
                        }
                        recommendations.push(ProgressionRecommendation::new(
                            position,
                            result.myo_rep_set_position(),
                            Some(weight),
                        ));
                    }
                }
            }
        }

        Ok(recommendations)
    }
}

impl ProgressionCalculator for DoubleProgressionCalculator {
    fn calculate(
        &self,
        lift: &WorkoutLift,
        previous: &[SetResult],
        is_deload_week: bool,
    ) -> Result<Vec<ProgressionRecommendation>, ProgressionError> {
        match &lift.sets {
            SetStructure::Straight {
                set_count,
                rep_range,
                rpe_target,
            } => Ok(self.straight_sets(lift, *set_count, *rep_range, *rpe_target, previous)),
            SetStructure::Custom(sets) if is_deload_week => {
                let (rep_range, rpe_target) = deload_targets(sets);
                debug!(
                    "using deload targets {rep_range} @{rpe_target} for custom lift {}",
                    lift.lift_id
                );
                Ok(self.straight_sets(lift, lift.set_count(), rep_range, rpe_target, previous))
            }
            SetStructure::Custom(sets) => self.custom_sets(lift, sets, previous),
        }
    }
}
