use derive_more::{Deref, Display};
use strum::EnumIter;
use uuid::Uuid;

use crate::{RPE, RepRange, Reps};

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct LiftID(Uuid);

impl LiftID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl From<Uuid> for LiftID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for LiftID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutLiftID(Uuid);

impl From<Uuid> for WorkoutLiftID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutLiftID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ProgressionScheme {
    LinearProgression,
    DoubleProgression,
    DynamicDoubleProgression,
    WaveLoadingProgression,
}

impl ProgressionScheme {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProgressionScheme::LinearProgression => "linear progression",
            ProgressionScheme::DoubleProgression => "double progression",
            ProgressionScheme::DynamicDoubleProgression => "dynamic double progression",
            ProgressionScheme::WaveLoadingProgression => "wave loading progression",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: String,
    pub lifts: Vec<WorkoutLift>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLift {
    pub id: WorkoutLiftID,
    pub lift_id: LiftID,
    pub position: u32,
    pub progression_scheme: ProgressionScheme,
    /// Increment configured for this lift in this workout.
    pub increment_override: Option<f32>,
    /// Increment configured for the lift across all workouts.
    pub lift_increment_override: Option<f32>,
    /// One-based week of the deload, overriding the program's deload week.
    pub deload_week: Option<u32>,
    /// Rest time in seconds, overriding the default rest time.
    pub rest_time: Option<u32>,
    pub sets: SetStructure,
}

impl WorkoutLift {
    #[must_use]
    pub fn set_count(&self) -> u32 {
        match &self.sets {
            SetStructure::Straight { set_count, .. } => *set_count,
            SetStructure::Custom(sets) => u32::try_from(sets.len()).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self.sets, SetStructure::Custom(_))
    }

    #[must_use]
    pub fn custom_set(&self, position: u32) -> Option<&CustomSet> {
        match &self.sets {
            SetStructure::Straight { .. } => None,
            SetStructure::Custom(sets) => sets.iter().find(|s| s.position() == position),
        }
    }

    /// Easier straight-set targets used in place of a custom set structure during a deload week.
    ///
    /// The rep range is taken from the first standard set. Straight-set lifts are returned as is.
    #[must_use]
    pub fn deload_substitute(&self) -> WorkoutLift {
        match &self.sets {
            SetStructure::Straight { .. } => self.clone(),
            SetStructure::Custom(sets) => {
                let (rep_range, rpe_target) = deload_targets(sets);
                WorkoutLift {
                    sets: SetStructure::Straight {
                        set_count: self.set_count(),
                        rep_range,
                        rpe_target,
                    },
                    ..self.clone()
                }
            }
        }
    }
}

/// Rep range and RPE target of all sets of a custom lift during a deload week.
#[must_use]
pub fn deload_targets(sets: &[CustomSet]) -> (RepRange, RPE) {
    let rep_range = sets
        .iter()
        .find_map(|s| match s {
            CustomSet::Standard(standard) => Some(standard.rep_range),
            CustomSet::Drop(_) | CustomSet::MyoRep(_) => None,
        })
        .unwrap_or(DELOAD_REP_RANGE);
    (rep_range, DELOAD_RPE_TARGET)
}

pub const DELOAD_RPE_TARGET: RPE = RPE::SIX;
pub const DELOAD_REP_RANGE: RepRange = RepRange {
    bottom: Reps(8),
    top: Reps(10),
};

#[derive(Debug, Clone, PartialEq)]
pub enum SetStructure {
    Straight {
        set_count: u32,
        rep_range: RepRange,
        rpe_target: RPE,
    },
    Custom(Vec<CustomSet>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CustomSet {
    Standard(StandardSet),
    Drop(DropSet),
    MyoRep(MyoRepSet),
}

impl CustomSet {
    #[must_use]
    pub fn position(&self) -> u32 {
        match self {
            CustomSet::Standard(s) => s.position,
            CustomSet::Drop(s) => s.position,
            CustomSet::MyoRep(s) => s.position,
        }
    }

    #[must_use]
    pub fn rep_range(&self) -> RepRange {
        match self {
            CustomSet::Standard(s) => s.rep_range,
            CustomSet::Drop(s) => s.rep_range,
            CustomSet::MyoRep(s) => s.rep_range,
        }
    }

    #[must_use]
    pub fn rpe_target(&self) -> RPE {
        match self {
            CustomSet::Standard(s) => s.rpe_target,
            CustomSet::Drop(s) => s.rpe_target,
            CustomSet::MyoRep(s) => s.rpe_target,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardSet {
    pub position: u32,
    pub rep_range: RepRange,
    pub rpe_target: RPE,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropSet {
    pub position: u32,
    pub rep_range: RepRange,
    pub rpe_target: RPE,
    /// Fraction of the preceding set's weight to remove, e.g. `0.2`.
    pub drop_percentage: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MyoRepSet {
    pub position: u32,
    pub rep_range: RepRange,
    pub rpe_target: RPE,
    pub rep_floor: Option<Reps>,
    pub set_goal: u32,
    pub max_sets: Option<u32>,
    /// Bursts have to match the rep range top in total instead of reaching a number of sets.
    pub set_matching: bool,
}
