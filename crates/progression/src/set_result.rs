use std::collections::BTreeMap;

use crate::{LiftID, RPE, Reps, Weight, WorkoutID};

pub const NO_PREVIOUS_RESULT: &str = "—";

/// A previously performed set.
#[derive(Debug, Clone, PartialEq)]
pub struct SetResult {
    pub lift_id: LiftID,
    pub workout_id: WorkoutID,
    pub set_position: u32,
    pub weight: Weight,
    pub reps: Reps,
    pub rpe: RPE,
    pub meso_cycle: u32,
    /// Zero-based week within the mesocycle.
    pub micro_cycle: u32,
    pub kind: SetResultKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetResultKind {
    Standard,
    /// `None` identifies the activation set, `Some(n)` the n-th burst after it.
    MyoRep {
        myo_rep_set_position: Option<u32>,
    },
    LinearProgression {
        missed_lp_goals: u32,
    },
}

impl SetResultKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SetResultKind::Standard => "standard",
            SetResultKind::MyoRep { .. } => "myo-rep",
            SetResultKind::LinearProgression { .. } => "linear progression",
        }
    }
}

impl SetResult {
    #[must_use]
    pub fn myo_rep_set_position(&self) -> Option<u32> {
        match self.kind {
            SetResultKind::MyoRep {
                myo_rep_set_position,
            } => myo_rep_set_position,
            SetResultKind::Standard | SetResultKind::LinearProgression { .. } => None,
        }
    }

    #[must_use]
    pub fn missed_lp_goals(&self) -> Option<u32> {
        match self.kind {
            SetResultKind::LinearProgression { missed_lp_goals } => Some(missed_lp_goals),
            SetResultKind::Standard | SetResultKind::MyoRep { .. } => None,
        }
    }

    /// Label of the form `<weight>x<reps> @<rpe>`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}x{} @{}", self.weight, self.reps, self.rpe)
    }
}

#[must_use]
pub fn previous_result_label(result: Option<&SetResult>) -> String {
    result.map_or_else(|| NO_PREVIOUS_RESULT.to_string(), SetResult::label)
}

/// Group results by set position.
///
/// Each group is ordered by myo-rep burst, starting with the activation set.
pub(crate) fn group_by_position(results: &[SetResult]) -> BTreeMap<u32, Vec<&SetResult>> {
    let mut grouped: BTreeMap<u32, Vec<&SetResult>> = BTreeMap::new();
    for result in results {
        grouped.entry(result.set_position).or_default().push(result);
    }
    for group in grouped.values_mut() {
        group.sort_by_key(|r| r.myo_rep_set_position());
    }
    grouped
}

/// The result of a set position, ignoring myo-rep bursts.
pub(crate) fn result_at(results: &[SetResult], position: u32) -> Option<&SetResult> {
    results
        .iter()
        .find(|r| r.set_position == position && r.myo_rep_set_position().is_none())
}
