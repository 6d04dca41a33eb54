//! Estimation of the one-repetition maximum from submaximal sets.
//!
//! Up to ten reps at RPE 10 a fixed percentage table is used. Beyond that, or
//! for fractional rep counts, the result is the average of the Brzycki,
//! Baechle, Lander, Epley and Lombardi formulas.

use crate::{SetResult, Weight};

/// Formulas diverge as the rep count approaches the Brzycki and Lander poles.
const MAX_FORMULA_REPS: f32 = 30.0;

fn percentage_of_one_rep_max(reps: u32) -> Option<f32> {
    match reps {
        1 => Some(1.0),
        2 => Some(0.94),
        3 => Some(0.91),
        4 => Some(0.88),
        5 => Some(0.86),
        6 => Some(0.83),
        7 => Some(0.81),
        8 => Some(0.79),
        9 => Some(0.76),
        10 => Some(0.733),
        _ => None,
    }
}

/// Reps the set would have allowed at RPE 10.
fn reps_at_failure(reps: u32, rpe: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let reps = reps as f32;
    reps + (10.0 - rpe.clamp(0.0, 10.0))
}

fn formula_reps(reps: f32) -> f32 {
    reps.clamp(1.0, MAX_FORMULA_REPS)
}

fn brzycki(weight: f32, reps: f32) -> f32 {
    weight * 36.0 / (37.0 - reps)
}

fn baechle(weight: f32, reps: f32) -> f32 {
    weight * (1.0 + 0.033 * reps)
}

fn lander(weight: f32, reps: f32) -> f32 {
    100.0 * weight / (101.3 - 2.671_23 * reps)
}

fn epley(weight: f32, reps: f32) -> f32 {
    weight * (1.0 + reps / 30.0)
}

fn lombardi(weight: f32, reps: f32) -> f32 {
    weight * reps.powf(0.1)
}

fn formula_one_rep_max(weight: f32, reps: f32) -> f32 {
    let reps = formula_reps(reps);
    (brzycki(weight, reps)
        + baechle(weight, reps)
        + lander(weight, reps)
        + epley(weight, reps)
        + lombardi(weight, reps))
        / 5.0
}

fn formula_weight(one_rep_max: f32, reps: f32) -> f32 {
    let reps = formula_reps(reps);
    (one_rep_max * (37.0 - reps) / 36.0
        + one_rep_max / (1.0 + 0.033 * reps)
        + one_rep_max * (101.3 - 2.671_23 * reps) / 100.0
        + one_rep_max / (1.0 + reps / 30.0)
        + one_rep_max / reps.powf(0.1))
        / 5.0
}

fn one_rep_max_at(weight: f32, reps: u32) -> f32 {
    match percentage_of_one_rep_max(reps) {
        Some(percentage) => weight / percentage,
        #[allow(clippy::cast_precision_loss)]
        None => formula_one_rep_max(weight, reps as f32),
    }
}

/// Estimated one-repetition maximum of a set.
///
/// Returns 0 if no weight was lifted or no reps were performed.
#[must_use]
pub fn estimate_one_rep_max(weight: f32, reps: u32, rpe: f32) -> u32 {
    if weight <= 0.0 || reps == 0 {
        return 0;
    }

    let reps = reps_at_failure(reps, rpe);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let estimate = if reps.fract().abs() < f32::EPSILON && reps <= 10.0 {
        one_rep_max_at(weight, reps as u32)
    } else {
        (one_rep_max_at(weight, reps.floor() as u32) + one_rep_max_at(weight, reps.ceil() as u32))
            / 2.0
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let estimate = estimate.round() as u32;
    estimate
}

/// Average of the reversed formulas for `target_reps` at `target_rpe`.
///
/// `None` if the performed set has no estimated one-repetition maximum.
fn estimated_weight(
    weight: f32,
    reps: u32,
    rpe: f32,
    target_reps: u32,
    target_rpe: f32,
) -> Option<f32> {
    let one_rep_max = estimate_one_rep_max(weight, reps, rpe);
    if one_rep_max == 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let one_rep_max = one_rep_max as f32;
    Some(formula_weight(one_rep_max, reps_at_failure(target_reps, target_rpe)))
}

/// Weight for `target_reps` at `target_rpe`, based on a performed set.
///
/// The result is rounded down to a multiple of `rounding_factor`. Returns zero if
/// the performed set has no estimated one-repetition maximum.
#[must_use]
pub fn suggest_weight_for(
    weight: f32,
    reps: u32,
    rpe: f32,
    target_reps: u32,
    target_rpe: f32,
    rounding_factor: f32,
) -> Weight {
    let Some(suggested) = estimated_weight(weight, reps, rpe, target_reps, target_rpe) else {
        return Weight::ZERO;
    };

    if rounding_factor > 0.0 {
        Weight::computed((suggested / rounding_factor).trunc() * rounding_factor)
    } else {
        Weight::computed(suggested)
    }
}

/// Number of whole `rounding_factor` steps in the weight that reproduces a set of `reps` at `rpe`.
///
/// A non-positive factor returns the truncated weight.
#[must_use]
pub fn suggest_weight(weight: f32, reps: u32, rpe: f32, rounding_factor: f32) -> u32 {
    let Some(suggested) = estimated_weight(weight, reps, rpe, reps, rpe) else {
        return 0;
    };
    let suggested = if rounding_factor > 0.0 {
        suggested / rounding_factor
    } else {
        suggested
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = suggested.trunc().max(0.0) as u32;
    steps
}

impl SetResult {
    #[must_use]
    pub fn one_rep_max(&self) -> u32 {
        estimate_one_rep_max(
            f32::from(self.weight),
            u32::from(self.reps),
            f32::from(self.rpe),
        )
    }
}

/// The result with the highest estimated one-repetition maximum.
///
/// The earliest result wins a tie.
#[must_use]
pub fn personal_record(results: &[SetResult]) -> Option<&SetResult> {
    results.iter().fold(None, |best: Option<&SetResult>, result| match best {
        Some(b) if b.one_rep_max() >= result.one_rep_max() => Some(b),
        _ => Some(result),
    })
}
