use serde::{Deserialize, Serialize};

use crate::WorkoutLift;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ProgressionSettings {
    /// Increment used when neither the workout lift nor the lift override it.
    pub default_increment: f32,
    /// Rest time in seconds used when the workout lift does not override it.
    pub default_rest_time: u32,
}

impl ProgressionSettings {
    /// Increment of a lift, resolved from the workout lift, the lift and the default in that order.
    #[must_use]
    pub fn increment(&self, lift: &WorkoutLift) -> f32 {
        lift.increment_override
            .or(lift.lift_increment_override)
            .unwrap_or(self.default_increment)
    }

    #[must_use]
    pub fn rest_time(&self, lift: &WorkoutLift) -> u32 {
        lift.rest_time.unwrap_or(self.default_rest_time)
    }
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            default_increment: 5.0,
            default_rest_time: 90,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{ProgressionScheme, RPE, RepRange, SetStructure};

    use super::*;

    fn lift(increment_override: Option<f32>, lift_increment_override: Option<f32>) -> WorkoutLift {
        WorkoutLift {
            id: 1.into(),
            lift_id: 1.into(),
            position: 0,
            progression_scheme: ProgressionScheme::DoubleProgression,
            increment_override,
            lift_increment_override,
            deload_week: None,
            rest_time: None,
            sets: SetStructure::Straight {
                set_count: 3,
                rep_range: RepRange::new(8, 10).unwrap(),
                rpe_target: RPE::EIGHT,
            },
        }
    }

    #[rstest]
    #[case::workout_lift_override(Some(2.5), Some(10.0), 2.5)]
    #[case::lift_override(None, Some(10.0), 10.0)]
    #[case::default(None, None, 5.0)]
    fn test_settings_increment(
        #[case] increment_override: Option<f32>,
        #[case] lift_increment_override: Option<f32>,
        #[case] expected: f32,
    ) {
        assert_eq!(
            ProgressionSettings::default()
                .increment(&lift(increment_override, lift_increment_override)),
            expected
        );
    }

    #[test]
    fn test_settings_rest_time() {
        let settings = ProgressionSettings::default();
        assert_eq!(settings.rest_time(&lift(None, None)), 90);
        assert_eq!(
            settings.rest_time(&WorkoutLift {
                rest_time: Some(180),
                ..lift(None, None)
            }),
            180
        );
    }

    #[test]
    fn test_settings_deserialize_missing_fields() {
        assert_eq!(
            serde_json::from_str::<ProgressionSettings>(r#"{"default_increment": 2.5}"#).unwrap(),
            ProgressionSettings {
                default_increment: 2.5,
                default_rest_time: 90,
            }
        );
        assert_eq!(
            serde_json::from_str::<ProgressionSettings>("{}").unwrap(),
            ProgressionSettings::default()
        );
    }
}
