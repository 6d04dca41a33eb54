use log::debug;

use crate::{LoggingSet, MyoRepSet, RPE, Reps, SetResult, Weight};

/// A just completed set of a myo-rep set, either the activation set or a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedSet {
    /// `None` for the activation set.
    pub myo_rep_set_position: Option<u32>,
    pub weight: Weight,
    pub reps: Reps,
    pub rpe: RPE,
}

impl From<&SetResult> for CompletedSet {
    fn from(value: &SetResult) -> Self {
        Self {
            myo_rep_set_position: value.myo_rep_set_position(),
            weight: value.weight,
            reps: value.reps,
            rpe: value.rpe,
        }
    }
}

/// Decide whether another burst should follow `completed`.
///
/// `previous` are the sets of the same myo-rep set completed before
/// `completed`. The activation set has to be performed at the RPE target
/// within the rep range. Afterwards, bursts continue as long as they reach
/// the RPE target. With set matching, bursts continue until their reps add
/// up to the top of the rep range, not counting the activation set.
/// Otherwise every burst has to exceed the rep floor and the maximum number
/// of sets must not be reached.
#[must_use]
pub fn should_continue_myo_reps(
    set: &MyoRepSet,
    completed: &CompletedSet,
    previous: &[CompletedSet],
) -> bool {
    if completed.myo_rep_set_position.is_none() {
        return completed.rpe == set.rpe_target && completed.reps >= set.rep_range.bottom;
    }

    let bursts = completed_bursts(completed, previous);
    let rpe_met = completed.rpe >= set.rpe_target;

    if set.set_matching {
        let total_reps = bursts.iter().map(|b| u32::from(b.reps)).sum::<u32>();
        rpe_met && total_reps < u32::from(set.rep_range.top)
    } else {
        let below_max_sets = set.max_sets.is_none_or(|max_sets| {
            usize::try_from(max_sets).is_ok_and(|m| bursts.len() + 1 < m)
        });
        rpe_met && below_max_sets && completed.reps > set.rep_floor.unwrap_or_default()
    }
}

/// The burst to perform after `completed`, if any.
///
/// The weight of the completed set is recommended for the next burst.
#[must_use]
pub fn next_myo_rep_burst(
    set: &MyoRepSet,
    completed: &CompletedSet,
    previous: &[CompletedSet],
    rest_time: u32,
) -> Option<LoggingSet> {
    if !should_continue_myo_reps(set, completed, previous) {
        debug!("myo-rep set {} completed", set.position);
        return None;
    }

    let index = u32::try_from(completed_bursts(completed, previous).len()).ok()?;

    Some(LoggingSet {
        weight_recommendation: Some(completed.weight),
        ..LoggingSet::myo_rep_burst(set, index, rest_time)
    })
}

fn completed_bursts<'a>(
    completed: &'a CompletedSet,
    previous: &'a [CompletedSet],
) -> Vec<&'a CompletedSet> {
    previous
        .iter()
        .chain(std::iter::once(completed))
        .filter(|s| s.myo_rep_set_position.is_some())
        .collect()
}
