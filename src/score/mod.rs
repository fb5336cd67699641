//! Numeric building blocks shared by every scorer. All functions are total: NaN and
//! out-of-range inputs degrade to a bounded score instead of propagating.

pub mod overlap;

pub use overlap::overlap_score;

use crate::types::scoring::{Score, ScoreBand};

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 100.0;

const MEDIUM_BAND_FLOOR: Score = 40.0;
const HIGH_BAND_FLOOR: Score = 70.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedInput {
    pub value: f64,
    pub weight: f64,
}

impl WeightedInput {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

pub fn clamp_score(x: f64) -> Score {
    if x.is_nan() || x < MIN_SCORE {
        MIN_SCORE
    } else if x > MAX_SCORE {
        MAX_SCORE
    } else {
        x
    }
}

/// Rescales `raw` from `[min, max]` onto `[0, 100]`.
pub fn normalize_score(raw: f64, min: f64, max: f64) -> Score {
    if raw.is_nan() || min.is_nan() || max.is_nan() || max <= min {
        return MIN_SCORE;
    }
    clamp_score((raw - min) / (max - min) * MAX_SCORE)
}

/// Weights are relative; the result is renormalized by the sum of the weights that survive
/// filtering, so callers never need them to add up to 1.
pub fn weighted_average(inputs: &[WeightedInput]) -> Score {
    let valid = inputs
        .iter()
        .filter(|input| input.value.is_finite() && input.weight.is_finite() && input.weight > 0.0);

    let (weighted_sum, total_weight) = valid.fold((0.0, 0.0), |(sum, total), input| {
        (sum + input.value * input.weight, total + input.weight)
    });

    if total_weight <= 0.0 {
        return MIN_SCORE;
    }
    clamp_score(weighted_sum / total_weight)
}

/// Equal-weight mean over 0-100 terms.
pub fn mean_score(values: &[f64]) -> Score {
    let inputs: Vec<WeightedInput> = values
        .iter()
        .map(|value| WeightedInput::new(*value, 1.0))
        .collect();
    weighted_average(&inputs)
}

pub fn categorize_score(x: f64) -> ScoreBand {
    let score = clamp_score(x);
    if score < MEDIUM_BAND_FLOOR {
        ScoreBand::Low
    } else if score < HIGH_BAND_FLOOR {
        ScoreBand::Medium
    } else {
        ScoreBand::High
    }
}

pub fn to_score(value: Option<f64>, fallback: f64) -> Score {
    match value {
        Some(value) if !value.is_nan() => clamp_score(value),
        _ => clamp_score(fallback),
    }
}
