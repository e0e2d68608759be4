//! Weighted sampling shared by the proportionate strategies.
//!
//! Roulette wheel, universal, rank and Boltzmann selection differ only in
//! how they derive a weight per individual. Turning those weights into
//! indices happens here, once, so normalization and the accumulated walk
//! are identical for all of them.

use tracing::{trace, warn};

use crate::error::{Result, SelectionError};
use crate::rng::RandomNumberGenerator;

/// Normalizes `weights` by their sum.
///
/// # Errors
///
/// Returns `SelectionError::InvalidWeights` if any weight is negative or not
/// finite, or if the total is not a positive finite number.
pub fn relative_weights(weights: &[f64]) -> Result<Vec<f64>> {
    if let Some((idx, &w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        warn!(index = idx, weight = w, "rejecting proportionate selection weights");
        return Err(SelectionError::InvalidWeights(format!(
            "weight {} at index {} is negative or not finite",
            w, idx
        )));
    }

    let sum: f64 = weights.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        warn!(total = sum, "rejecting proportionate selection weights");
        return Err(SelectionError::InvalidWeights(format!(
            "total weight {} must be positive and finite",
            sum
        )));
    }

    Ok(weights.iter().map(|w| w / sum).collect())
}

/// Resolves a pointer in `(0, 1]` to the first index `j` with
/// `acc < pointer <= acc + relative[j]`.
///
/// Rounding can leave the accumulated total just under a pointer near 1;
/// such a pointer falls to the last index with a positive weight, so a
/// zero-weight entry is never returned.
fn resolve(relative: &[f64], pointer: f64) -> usize {
    let mut accumulated = 0.0;
    let mut last_positive = 0;
    for (j, &p) in relative.iter().enumerate() {
        if accumulated < pointer && pointer <= accumulated + p {
            return j;
        }
        if p > 0.0 {
            last_positive = j;
        }
        accumulated += p;
    }

    trace!(pointer, accumulated, "pointer past accumulated weight");
    last_positive
}

/// Draws `k` indices independently, each with probability proportional to
/// its weight (selection with replacement).
///
/// # Errors
///
/// See [`relative_weights`].
pub fn spin(weights: &[f64], k: usize, rng: &mut RandomNumberGenerator) -> Result<Vec<usize>> {
    let relative = relative_weights(weights)?;
    Ok((0..k).map(|_| resolve(&relative, rng.unit())).collect())
}

/// Draws `k` indices with stochastic universal sampling: one offset
/// `r` in `(0, 1]` and pointers `(r + i) / k` for `i` in `0..k`.
///
/// An entry with relative weight `p` is returned either `floor(k * p)` or
/// `ceil(k * p)` times. Indices come out in ascending order.
///
/// # Errors
///
/// See [`relative_weights`].
pub fn spin_universal(
    weights: &[f64],
    k: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<usize>> {
    let relative = relative_weights(weights)?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let r = rng.unit();
    let step = k as f64;
    Ok((0..k)
        .map(|i| resolve(&relative, (r + i as f64) / step))
        .collect())
}
