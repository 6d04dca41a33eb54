use crate::{
    CustomSet, MyoRepSet, ProgressionError, ProgressionRecommendation, RPE, RepRange, Reps,
    SetResult, SetStructure, Weight, WorkoutLift, previous_result_label,
    set_result::NO_PREVIOUS_RESULT,
};

/// A set ready to be logged, with its targets and the recommended weight.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSet {
    pub position: u32,
    pub myo_rep_set_position: Option<u32>,
    pub kind: LoggingSetKind,
    /// `None` for myo-rep bursts, which only have a rep floor.
    pub rep_range_bottom: Option<Reps>,
    pub rep_range_top: Option<Reps>,
    pub rep_range_placeholder: String,
    pub rpe_target: RPE,
    /// Seconds.
    pub rest_time: u32,
    pub weight_recommendation: Option<Weight>,
    pub previous_set_result_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoggingSetKind {
    Standard,
    Drop {
        drop_percentage: f32,
    },
    MyoRep {
        rep_floor: Option<Reps>,
        set_goal: u32,
        max_sets: Option<u32>,
        set_matching: bool,
    },
}

impl LoggingSet {
    fn with_rep_range(
        position: u32,
        kind: LoggingSetKind,
        rep_range: RepRange,
        rpe_target: RPE,
        rest_time: u32,
    ) -> Self {
        Self {
            position,
            myo_rep_set_position: None,
            kind,
            rep_range_bottom: Some(rep_range.bottom),
            rep_range_top: Some(rep_range.top),
            rep_range_placeholder: rep_range.to_string(),
            rpe_target,
            rest_time,
            weight_recommendation: None,
            previous_set_result_label: NO_PREVIOUS_RESULT.to_string(),
        }
    }

    /// A burst following the activation set of a myo-rep set.
    ///
    /// Bursts are performed to failure and only target the rep floor.
    #[must_use]
    pub fn myo_rep_burst(set: &MyoRepSet, myo_rep_set_position: u32, rest_time: u32) -> Self {
        Self {
            position: set.position,
            myo_rep_set_position: Some(myo_rep_set_position),
            kind: myo_rep_kind(set),
            rep_range_bottom: None,
            rep_range_top: None,
            rep_range_placeholder: rep_range_placeholder(set.rep_floor),
            rpe_target: RPE::TEN,
            rest_time,
            weight_recommendation: None,
            previous_set_result_label: NO_PREVIOUS_RESULT.to_string(),
        }
    }
}

fn myo_rep_kind(set: &MyoRepSet) -> LoggingSetKind {
    LoggingSetKind::MyoRep {
        rep_floor: set.rep_floor,
        set_goal: set.set_goal,
        max_sets: set.max_sets,
        set_matching: set.set_matching,
    }
}

/// Placeholder of a myo-rep burst: `>N` for a rep floor of `N`.
#[must_use]
pub fn rep_range_placeholder(rep_floor: Option<Reps>) -> String {
    match rep_floor {
        Some(rep_floor) => format!(">{rep_floor}"),
        None => NO_PREVIOUS_RESULT.to_string(),
    }
}

/// Combine the recommendations of a lift with its configured targets.
///
/// `lift` is the configuration the sets are performed with, which differs
/// from the configured lift in a deload week.
pub(crate) fn logging_sets(
    lift: &WorkoutLift,
    rest_time: u32,
    recommendations: &[ProgressionRecommendation],
    previous_for_display: &[SetResult],
) -> Result<Vec<LoggingSet>, ProgressionError> {
    recommendations
        .iter()
        .map(|recommendation| -> Result<LoggingSet, ProgressionError> {
            let position = recommendation.set_position;
            let logging_set = match &lift.sets {
                SetStructure::Straight {
                    rep_range,
                    rpe_target,
                    ..
                } => LoggingSet::with_rep_range(
                    position,
                    LoggingSetKind::Standard,
                    *rep_range,
                    *rpe_target,
                    rest_time,
                ),
                SetStructure::Custom(_) => {
                    match lift
                        .custom_set(position)
                        .ok_or(ProgressionError::MissingCustomSet {
                            lift_id: lift.lift_id,
                            position,
                        })? {
                        CustomSet::Standard(standard) => LoggingSet::with_rep_range(
                            position,
                            LoggingSetKind::Standard,
                            standard.rep_range,
                            standard.rpe_target,
                            rest_time,
                        ),
                        CustomSet::Drop(drop) => LoggingSet::with_rep_range(
                            position,
                            LoggingSetKind::Drop {
                                drop_percentage: drop.drop_percentage,
                            },
                            drop.rep_range,
                            drop.rpe_target,
                            rest_time,
                        ),
                        CustomSet::MyoRep(myo_rep) => match recommendation.myo_rep_set_position {
                            Some(burst) => LoggingSet::myo_rep_burst(myo_rep, burst, rest_time),
                            None => LoggingSet::with_rep_range(
                                position,
                                myo_rep_kind(myo_rep),
                                myo_rep.rep_range,
                                myo_rep.rpe_target,
                                rest_time,
                            ),
                        },
                    }
                }
            };

            let previous = previous_for_display.iter().find(|r| {
                r.set_position == position
                    && r.myo_rep_set_position() == recommendation.myo_rep_set_position
            });

            Ok(LoggingSet {
                weight_recommendation: recommendation.weight_recommendation,
                previous_set_result_label: previous_result_label(previous),
                ..logging_set
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        DropSet, LiftID, ProgressionScheme, StandardSet,
        progression::tests::{custom_lift, straight_lift},
        set_result::tests::{myo_rep_result, set_result},
    };

    use super::*;

    fn myo_rep_set() -> MyoRepSet {
        MyoRepSet {
            position: 2,
            rep_range: RepRange::new(12, 15).unwrap(),
            rpe_target: RPE::EIGHT,
            rep_floor: Some(Reps(5)),
            set_goal: 3,
            max_sets: Some(4),
            set_matching: false,
        }
    }

    #[rstest]
    #[case(Some(Reps(5)), ">5")]
    #[case(None, "—")]
    fn test_rep_range_placeholder(#[case] rep_floor: Option<Reps>, #[case] expected: &str) {
        assert_eq!(rep_range_placeholder(rep_floor), expected);
    }

    #[test]
    fn test_logging_sets_straight_lift() {
        let lift = straight_lift(ProgressionScheme::DoubleProgression, 2, 8, 10, RPE::EIGHT);
        let logging_sets = logging_sets(
            &lift,
            120,
            &[
                ProgressionRecommendation::new(0, None, Some(Weight(105.0))),
                ProgressionRecommendation::new(1, None, Some(Weight(105.0))),
            ],
            &[set_result(0, 100.0, 10, RPE::EIGHT)],
        )
        .unwrap();
        assert_eq!(
            logging_sets,
            vec![
                LoggingSet {
                    position: 0,
                    myo_rep_set_position: None,
                    kind: LoggingSetKind::Standard,
                    rep_range_bottom: Some(Reps(8)),
                    rep_range_top: Some(Reps(10)),
                    rep_range_placeholder: "8-10".to_string(),
                    rpe_target: RPE::EIGHT,
                    rest_time: 120,
                    weight_recommendation: Some(Weight(105.0)),
                    previous_set_result_label: "100x10 @8".to_string(),
                },
                LoggingSet {
                    position: 1,
                    myo_rep_set_position: None,
                    kind: LoggingSetKind::Standard,
                    rep_range_bottom: Some(Reps(8)),
                    rep_range_top: Some(Reps(10)),
                    rep_range_placeholder: "8-10".to_string(),
                    rpe_target: RPE::EIGHT,
                    rest_time: 120,
                    weight_recommendation: Some(Weight(105.0)),
                    previous_set_result_label: "—".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_logging_sets_custom_lift() {
        let lift = custom_lift(
            ProgressionScheme::DoubleProgression,
            vec![
                CustomSet::Standard(StandardSet {
                    position: 0,
                    rep_range: RepRange::new(5, 5).unwrap(),
                    rpe_target: RPE::NINE,
                }),
                CustomSet::Drop(DropSet {
                    position: 1,
                    rep_range: RepRange::new(8, 10).unwrap(),
                    rpe_target: RPE::TEN,
                    drop_percentage: 0.2,
                }),
                CustomSet::MyoRep(myo_rep_set()),
            ],
        );
        let logging_sets = logging_sets(
            &lift,
            90,
            &[
                ProgressionRecommendation::new(0, None, Some(Weight(105.0))),
                ProgressionRecommendation::new(1, None, Some(Weight(84.0))),
                ProgressionRecommendation::new(2, None, Some(Weight(55.0))),
                ProgressionRecommendation::new(2, Some(0), Some(Weight(55.0))),
            ],
            &[
                myo_rep_result(2, None, 50.0, 14, RPE::EIGHT),
                myo_rep_result(2, Some(0), 50.0, 6, RPE::TEN),
            ],
        )
        .unwrap();

        assert_eq!(
            logging_sets
                .iter()
                .map(|s| (
                    s.kind,
                    s.rep_range_placeholder.as_str(),
                    s.rpe_target,
                    s.previous_set_result_label.as_str()
                ))
                .collect::<Vec<_>>(),
            vec![
                (LoggingSetKind::Standard, "5", RPE::NINE, "—"),
                (
                    LoggingSetKind::Drop {
                        drop_percentage: 0.2
                    },
                    "8-10",
                    RPE::TEN,
                    "—"
                ),
                (myo_rep_kind(&myo_rep_set()), "12-15", RPE::EIGHT, "50x14 @8"),
                (myo_rep_kind(&myo_rep_set()), ">5", RPE::TEN, "50x6 @10"),
            ]
        );
        assert_eq!(logging_sets[3].myo_rep_set_position, Some(0));
        assert_eq!(logging_sets[3].rep_range_top, None);
    }

    #[test]
    fn test_logging_sets_missing_custom_set() {
        let lift = custom_lift(ProgressionScheme::DoubleProgression, vec![]);
        assert_eq!(
            logging_sets(
                &lift,
                90,
                &[ProgressionRecommendation::new(0, None, None)],
                &[]
            ),
            Err(ProgressionError::MissingCustomSet {
                lift_id: LiftID::from(1),
                position: 0
            })
        );
    }

    #[test]
    fn test_logging_set_myo_rep_burst() {
        let burst = LoggingSet::myo_rep_burst(&myo_rep_set(), 1, 30);
        assert_eq!(burst.position, 2);
        assert_eq!(burst.myo_rep_set_position, Some(1));
        assert_eq!(burst.rep_range_placeholder, ">5");
        assert_eq!(burst.rpe_target, RPE::TEN);
        assert_eq!(burst.rest_time, 30);
    }
}
