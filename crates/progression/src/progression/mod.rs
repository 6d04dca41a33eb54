//! Weight recommendations for the next performance of a lift.
//!
//! Each progression scheme is implemented by a calculator. Calculators only
//! hold read-only configuration and can be used from any thread.

mod double;
mod dynamic_double;
pub mod linear;
mod wave_loading;

use std::collections::BTreeMap;

use crate::{
    ProgressionError, ProgressionScheme, ProgressionSettings, RPE, Reps, SetResult, Weight,
    WorkoutLift, suggest_weight_for,
};

pub use double::DoubleProgressionCalculator;
pub use dynamic_double::DynamicDoubleProgressionCalculator;
pub use linear::LinearProgressionCalculator;
pub use wave_loading::WaveLoadingProgressionCalculator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionRecommendation {
    pub set_position: u32,
    /// Identifies a myo-rep burst, `None` for every other set.
    pub myo_rep_set_position: Option<u32>,
    /// `None` if there is no history to base a recommendation on.
    pub weight_recommendation: Option<Weight>,
}

impl ProgressionRecommendation {
    #[must_use]
    pub fn new(
        set_position: u32,
        myo_rep_set_position: Option<u32>,
        weight_recommendation: Option<Weight>,
    ) -> Self {
        Self {
            set_position,
            myo_rep_set_position,
            weight_recommendation,
        }
    }
}

pub trait ProgressionCalculator: Send + Sync {
    /// Recommend weights based on the previous results of `lift`.
    ///
    /// `previous` must only contain results of `lift`.
    fn calculate(
        &self,
        lift: &WorkoutLift,
        previous: &[SetResult],
        is_deload_week: bool,
    ) -> Result<Vec<ProgressionRecommendation>, ProgressionError>;
}

#[must_use]
pub fn calculator(
    scheme: ProgressionScheme,
    settings: ProgressionSettings,
    program_deload_week: u32,
) -> Box<dyn ProgressionCalculator> {
    match scheme {
        ProgressionScheme::LinearProgression => {
            Box::new(LinearProgressionCalculator::new(settings))
        }
        ProgressionScheme::DoubleProgression => {
            Box::new(DoubleProgressionCalculator::new(settings))
        }
        ProgressionScheme::DynamicDoubleProgression => {
            Box::new(DynamicDoubleProgressionCalculator::new(settings))
        }
        ProgressionScheme::WaveLoadingProgression => Box::new(
            WaveLoadingProgressionCalculator::new(settings, program_deload_week),
        ),
    }
}

/// Previous weight plus the whole part of the increment.
pub(crate) fn increment_weight(increment: f32, previous: &SetResult) -> Weight {
    Weight::computed(f32::from(previous.weight) + increment.trunc())
}

/// Weight after the criterion was missed.
///
/// The weight is kept unless the reps fell below the bottom of the rep range.
/// In that case it is lowered to what is expected to allow `rep_range_bottom`
/// reps at `rpe_target`, rounded down to a multiple of the increment.
pub(crate) fn failure_weight(
    rep_range_bottom: Reps,
    rpe_target: RPE,
    increment: f32,
    previous: &SetResult,
) -> Weight {
    if previous.reps >= rep_range_bottom {
        return previous.weight;
    }

    let suggested = suggest_weight_for(
        f32::from(previous.weight),
        u32::from(previous.reps),
        f32::from(previous.rpe),
        u32::from(rep_range_bottom),
        f32::from(rpe_target),
        increment,
    );

    if suggested < previous.weight {
        suggested
    } else {
        previous.weight
    }
}

/// The heaviest set, preferring fewer reps and then the earlier position.
pub(crate) fn top_set<'a>(
    results: impl IntoIterator<Item = &'a SetResult>,
) -> Option<&'a SetResult> {
    results.into_iter().fold(None, |top: Option<&SetResult>, result| match top {
        Some(t)
            if t.weight > result.weight
                || (t.weight == result.weight
                    && (t.reps, t.set_position) <= (result.reps, result.set_position)) =>
        {
            Some(t)
        }
        _ => Some(result),
    })
}

/// The same weight for every set position.
pub(crate) fn uniform(set_count: u32, weight: Option<Weight>) -> Vec<ProgressionRecommendation> {
    (0..set_count)
        .map(|position| ProgressionRecommendation::new(position, None, weight))
        .collect()
}

/// Fail if a result references a position without custom set.
pub(crate) fn check_custom_positions(
    lift: &WorkoutLift,
    grouped: &BTreeMap<u32, Vec<&SetResult>>,
) -> Result<(), ProgressionError> {
    match grouped.keys().find(|p| lift.custom_set(**p).is_none()) {
        Some(position) => Err(ProgressionError::MissingCustomSet {
            lift_id: lift.lift_id,
            position: *position,
        }),
        None => Ok(()),
    }
}
