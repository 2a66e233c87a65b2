use crate::error::{EvalError, Result};
use crate::types::scoring::{Scores, Weights};

pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Weighted sum of `scores` under `weights`.
///
/// Weights must be finite and non-negative, both maps must name the same
/// metrics, and the weights must sum to 1 within [`WEIGHT_SUM_EPSILON`];
/// otherwise nothing is computed. The result is not
/// clamped or rounded.
pub fn combine(scores: &Scores, weights: &Weights) -> Result<f64> {
    if let Some((metric, weight)) = weights
        .iter()
        .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
    {
        return Err(EvalError::InvalidWeight {
            metric: metric.clone(),
            weight: *weight,
        });
    }
    let sum: f64 = weights.values().sum();
    if !((sum - 1.0).abs() <= WEIGHT_SUM_EPSILON) {
        return Err(EvalError::WeightSum { sum });
    }

    let missing = scores
        .keys()
        .filter(|key| !weights.contains_key(*key))
        .cloned()
        .collect::<Vec<_>>();
    let unexpected = weights
        .keys()
        .filter(|key| !scores.contains_key(*key))
        .cloned()
        .collect::<Vec<_>>();
    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(EvalError::KeyMismatch {
            missing,
            unexpected,
        });
    }

    Ok(scores
        .iter()
        .map(|(metric, score)| score * weights[metric])
        .sum())
}
