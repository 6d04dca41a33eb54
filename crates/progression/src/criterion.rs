use crate::{CustomSet, MyoRepSet, RPE, RepRange, Reps, SetResult};

/// Every set reached the top of the rep range without exceeding the RPE target.
#[must_use]
pub fn double_progression_criterion_met(
    rep_range_top: Reps,
    rpe_target: RPE,
    results: &[SetResult],
) -> bool {
    !results.is_empty()
        && results
            .iter()
            .all(|r| r.reps >= rep_range_top && r.rpe <= rpe_target)
}

/// All configured sets were performed exactly at the rep and RPE target.
#[must_use]
pub fn linear_progression_criterion_met(
    set_count: u32,
    rep_range_top: Reps,
    rpe_target: RPE,
    results: &[SetResult],
) -> bool {
    !results.is_empty()
        && u32::try_from(results.len()).is_ok_and(|len| len == set_count)
        && results
            .iter()
            .all(|r| r.reps == rep_range_top && r.rpe == rpe_target)
}

/// Criterion of a standard or drop set within a custom lift.
#[must_use]
pub fn custom_set_criterion_met(
    rep_range: RepRange,
    rpe_target: RPE,
    previous: Option<&SetResult>,
) -> bool {
    previous.is_some_and(|p| p.rpe == rpe_target && p.reps >= rep_range.top)
}

/// Criterion of a myo-rep set.
///
/// The activation set and every burst have to reach the RPE target. With set
/// matching the bursts also have to add up to the top of the rep range, not
/// counting the activation set.
#[must_use]
pub fn myo_rep_criterion_met(
    set: &MyoRepSet,
    activation: Option<&SetResult>,
    bursts: &[&SetResult],
) -> bool {
    let Some(activation) = activation else {
        return false;
    };

    if activation.reps > set.rep_range.top
        || activation.rpe < set.rpe_target
        || bursts.iter().any(|b| b.rpe < set.rpe_target)
    {
        return false;
    }

    let enough_sets = u32::try_from(bursts.len()).is_ok_and(|len| len >= set.set_goal);

    if set.set_matching {
        enough_sets
            && bursts.iter().map(|b| u32::from(b.reps)).sum::<u32>() >= u32::from(set.rep_range.top)
    } else {
        enough_sets
    }
}

/// Criterion of any set within a custom lift.
///
/// `results` are the results of the set's position, as grouped by position.
#[must_use]
pub fn custom_lift_set_criterion_met(set: &CustomSet, results: &[&SetResult]) -> bool {
    let activation = results
        .iter()
        .find(|r| r.myo_rep_set_position().is_none())
        .copied();
    match set {
        CustomSet::Standard(standard) => {
            custom_set_criterion_met(standard.rep_range, standard.rpe_target, activation)
        }
        CustomSet::Drop(drop) => {
            custom_set_criterion_met(drop.rep_range, drop.rpe_target, activation)
        }
        CustomSet::MyoRep(myo_rep) => {
            let bursts = results
                .iter()
                .filter(|r| r.myo_rep_set_position().is_some())
                .copied()
                .collect::<Vec<_>>();
            myo_rep_criterion_met(myo_rep, activation, &bursts)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        StandardSet,
        set_result::tests::{myo_rep_result, set_result},
    };

    use super::*;

    fn myo_rep_set(set_matching: bool) -> MyoRepSet {
        MyoRepSet {
            position: 0,
            rep_range: RepRange {
                bottom: Reps(12),
                top: Reps(25),
            },
            rpe_target: RPE::EIGHT,
            rep_floor: Some(Reps(5)),
            set_goal: 2,
            max_sets: Some(3),
            set_matching,
        }
    }

    #[rstest]
    #[case::no_results(vec![], false)]
    #[case::all_at_top(
        vec![set_result(0, 100.0, 10, RPE::EIGHT), set_result(1, 100.0, 10, RPE::EIGHT)],
        true
    )]
    #[case::above_top_below_rpe(vec![set_result(0, 100.0, 12, RPE::SEVEN)], true)]
    #[case::one_below_top(
        vec![set_result(0, 100.0, 10, RPE::EIGHT), set_result(1, 100.0, 9, RPE::EIGHT)],
        false
    )]
    #[case::rpe_exceeded(vec![set_result(0, 100.0, 10, RPE::NINE)], false)]
    fn test_double_progression_criterion_met(
        #[case] results: Vec<SetResult>,
        #[case] expected: bool,
    ) {
        assert_eq!(
            double_progression_criterion_met(Reps(10), RPE::EIGHT, &results),
            expected
        );
    }

    #[rstest]
    #[case::no_results(vec![], false)]
    #[case::all_sets_at_target(
        vec![set_result(0, 100.0, 5, RPE::EIGHT), set_result(1, 100.0, 5, RPE::EIGHT)],
        true
    )]
    #[case::missing_set(vec![set_result(0, 100.0, 5, RPE::EIGHT)], false)]
    #[case::more_reps(
        vec![set_result(0, 100.0, 6, RPE::EIGHT), set_result(1, 100.0, 5, RPE::EIGHT)],
        false
    )]
    #[case::lower_rpe(
        vec![set_result(0, 100.0, 5, RPE::SEVEN), set_result(1, 100.0, 5, RPE::EIGHT)],
        false
    )]
    fn test_linear_progression_criterion_met(
        #[case] results: Vec<SetResult>,
        #[case] expected: bool,
    ) {
        assert_eq!(
            linear_progression_criterion_met(2, Reps(5), RPE::EIGHT, &results),
            expected
        );
    }

    #[rstest]
    #[case::no_result(None, false)]
    #[case::at_top(Some(set_result(0, 100.0, 10, RPE::EIGHT)), true)]
    #[case::below_top(Some(set_result(0, 100.0, 9, RPE::EIGHT)), false)]
    #[case::other_rpe(Some(set_result(0, 100.0, 10, RPE::SEVEN)), false)]
    fn test_custom_set_criterion_met(#[case] previous: Option<SetResult>, #[case] expected: bool) {
        assert_eq!(
            custom_set_criterion_met(
                RepRange {
                    bottom: Reps(8),
                    top: Reps(10)
                },
                RPE::EIGHT,
                previous.as_ref()
            ),
            expected
        );
    }

    #[rstest]
    #[case::no_activation(false, None, vec![], false)]
    #[case::goal_reached(
        false,
        Some(myo_rep_result(0, None, 50.0, 20, RPE::EIGHT)),
        vec![
            myo_rep_result(0, Some(0), 50.0, 5, RPE::TEN),
            myo_rep_result(0, Some(1), 50.0, 4, RPE::NINE),
        ],
        true
    )]
    #[case::too_few_bursts(
        false,
        Some(myo_rep_result(0, None, 50.0, 20, RPE::EIGHT)),
        vec![myo_rep_result(0, Some(0), 50.0, 5, RPE::TEN)],
        false
    )]
    #[case::activation_above_top(
        false,
        Some(myo_rep_result(0, None, 50.0, 26, RPE::EIGHT)),
        vec![
            myo_rep_result(0, Some(0), 50.0, 5, RPE::TEN),
            myo_rep_result(0, Some(1), 50.0, 4, RPE::TEN),
        ],
        false
    )]
    #[case::activation_too_easy(
        false,
        Some(myo_rep_result(0, None, 50.0, 20, RPE::SEVEN)),
        vec![
            myo_rep_result(0, Some(0), 50.0, 5, RPE::TEN),
            myo_rep_result(0, Some(1), 50.0, 4, RPE::TEN),
        ],
        false
    )]
    #[case::burst_too_easy(
        false,
        Some(myo_rep_result(0, None, 50.0, 20, RPE::EIGHT)),
        vec![
            myo_rep_result(0, Some(0), 50.0, 5, RPE::TEN),
            myo_rep_result(0, Some(1), 50.0, 4, RPE::SEVEN),
        ],
        false
    )]
    #[case::set_matching_reached(
        true,
        Some(myo_rep_result(0, None, 50.0, 15, RPE::EIGHT)),
        vec![
            myo_rep_result(0, Some(0), 50.0, 12, RPE::TEN),
            myo_rep_result(0, Some(1), 50.0, 13, RPE::TEN),
        ],
        true
    )]
    #[case::set_matching_activation_not_counted(
        true,
        Some(myo_rep_result(0, None, 50.0, 15, RPE::EIGHT)),
        vec![
            myo_rep_result(0, Some(0), 50.0, 12, RPE::TEN),
            myo_rep_result(0, Some(1), 50.0, 10, RPE::TEN),
        ],
        false
    )]
    fn test_myo_rep_criterion_met(
        #[case] set_matching: bool,
        #[case] activation: Option<SetResult>,
        #[case] bursts: Vec<SetResult>,
        #[case] expected: bool,
    ) {
        assert_eq!(
            myo_rep_criterion_met(
                &myo_rep_set(set_matching),
                activation.as_ref(),
                &bursts.iter().collect::<Vec<_>>()
            ),
            expected
        );
    }

    #[test]
    fn test_custom_lift_set_criterion_met() {
        let standard = CustomSet::Standard(StandardSet {
            position: 0,
            rep_range: RepRange {
                bottom: Reps(8),
                top: Reps(10),
            },
            rpe_target: RPE::EIGHT,
        });
        let result = set_result(0, 100.0, 10, RPE::EIGHT);
        assert!(custom_lift_set_criterion_met(&standard, &[&result]));
        assert!(!custom_lift_set_criterion_met(&standard, &[]));

        let myo_rep = CustomSet::MyoRep(myo_rep_set(false));
        let activation = myo_rep_result(0, None, 50.0, 20, RPE::EIGHT);
        let first = myo_rep_result(0, Some(0), 50.0, 5, RPE::TEN);
        let second = myo_rep_result(0, Some(1), 50.0, 5, RPE::TEN);
        assert!(custom_lift_set_criterion_met(
            &myo_rep,
            &[&activation, &first, &second]
        ));
        assert!(!custom_lift_set_criterion_met(&myo_rep, &[&first, &second]));
    }
}
