use crate::{
    CustomSet, ProgressionError, ProgressionSettings, RPE, Reps, SetResult, SetStructure, Weight,
    WorkoutLift, custom_set_criterion_met, myo_rep_criterion_met,
    set_result::{group_by_position, result_at},
};

use super::{
    ProgressionCalculator, ProgressionRecommendation, check_custom_positions, increment_weight,
};

/// Raise the weight of each set independently once it reached its target.
pub struct DynamicDoubleProgressionCalculator {
    settings: ProgressionSettings,
}

impl DynamicDoubleProgressionCalculator {
    #[must_use]
    pub fn new(settings: ProgressionSettings) -> Self {
        Self { settings }
    }

    fn straight_sets(
        &self,
        lift: &WorkoutLift,
        set_count: u32,
        rep_range_top: Reps,
        rpe_target: RPE,
        previous: &[SetResult],
    ) -> Vec<ProgressionRecommendation> {
        let increment = self.settings.increment(lift);
        (0..set_count)
            .map(|position| {
                let weight = result_at(previous, position).map(|r| {
                    if r.reps == rep_range_top && r.rpe == rpe_target {
                        increment_weight(increment, r)
                    } else {
                        r.weight
                    }
                });
                ProgressionRecommendation::new(position, None, weight)
            })
            .collect()
    }

    fn custom_sets(
        &self,
        lift: &WorkoutLift,
        sets: &[CustomSet],
        previous: &[SetResult],
    ) -> Result<Vec<ProgressionRecommendation>, ProgressionError> {
        let grouped = group_by_position(previous);
        check_custom_positions(lift, &grouped)?;

        let increment = self.settings.increment(lift);
        // Sets without a result of their own start from zero once the lift has been performed.
        let missing_weight = (!previous.is_empty()).then_some(Weight::ZERO);

        let mut sets = sets.iter().collect::<Vec<_>>();
        sets.sort_by_key(|s| s.position());

        let mut recommendations = vec![];

        for set in sets {
            let position = set.position();
            let results = grouped.get(&position).map_or(&[][..], Vec::as_slice);
            let activation = results
                .iter()
                .find(|r| r.myo_rep_set_position().is_none())
                .copied();

            match set {
                CustomSet::Standard(_) | CustomSet::Drop(_) => {
                    let weight = activation.map_or(missing_weight, |r| {
                        if custom_set_criterion_met(set.rep_range(), set.rpe_target(), Some(r)) {
                            Some(increment_weight(increment, r))
                        } else {
                            Some(r.weight)
                        }
                    });
                    recommendations.push(ProgressionRecommendation::new(position, None, weight));
                }
                CustomSet::MyoRep(myo_rep) => {
                    if results.is_empty() {
                        recommendations.push(ProgressionRecommendation::new(
                            position,
                            None,
                            missing_weight,
                        ));
                        continue;
                    }
                    let bursts = results
                        .iter()
                        .filter(|r| r.myo_rep_set_position().is_some())
                        .copied()
                        .collect::<Vec<_>>();
                    let criterion_met = myo_rep_criterion_met(myo_rep, activation, &bursts);
                    recommendations.extend(results.iter().map(|r| {
                        ProgressionRecommendation::new(
                            position,
                            r.myo_rep_set_position(),
                            Some(if criterion_met {
                                increment_weight(increment, r)
                            } else {
                                r.weight
                            }),
                        )
                    }));
                }
            }
        }

        Ok(recommendations)
    }
}

impl ProgressionCalculator for DynamicDoubleProgressionCalculator {
    fn calculate(
        &self,
        lift: &WorkoutLift,
        previous: &[SetResult],
        _is_deload_week: bool,
    ) -> Result<Vec<ProgressionRecommendation>, ProgressionError> {
        match &lift.sets {
            SetStructure::Straight {
                set_count,
                rep_range,
                rpe_target,
            } => Ok(self.straight_sets(lift, *set_count, rep_range.top, *rpe_target, previous)),
            SetStructure::Custom(sets) => self.custom_sets(lift, sets, previous),
        }
    }
}
