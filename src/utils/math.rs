use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{Observation, Weights};

/// Order-`order` norm of the values of an observation.
///
/// Values are divided by the largest magnitude before being raised to
/// `order`, so finite inputs never overflow to infinity or underflow to 0.
/// The norm is 0 only when every value is 0.
pub fn norm(x: &Observation, order: f64) -> f64 {
    // NaN wins so it propagates
    let scale = x.values().fold(0.0_f64, |m, v| {
        if v.is_nan() || v.abs() > m {
            v.abs()
        } else {
            m
        }
    });
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let scaled = x.values().map(|v| v.abs() / scale);
    let sum = if order == 1.0 {
        scaled.sum::<f64>()
    } else if order == 2.0 {
        scaled.map(|v| v * v).sum::<f64>().sqrt()
    } else {
        scaled.map(|v| v.powf(order)).sum::<f64>().powf(1.0 / order)
    };
    scale * sum
}

/// Sparse dot product. Features missing from `w` count as 0.
pub fn dot(w: &Weights, x: &Observation) -> f64 {
    x.iter()
        .map(|(k, xi)| w.get(k).copied().unwrap_or(0.0) * xi)
        .sum()
}

/// Logistic function, clamped to avoid overflow in `exp`.
pub fn sigmoid(z: f64) -> f64 {
    let z = z.clamp(-30.0, 30.0);
    1.0 / (1.0 + (-z).exp())
}

/// Normalised exponentials of `scores`, shifted by the max for stability.
pub fn softmax<K: Hash + Eq + Clone>(scores: &HashMap<K, f64>) -> HashMap<K, f64> {
    let max = scores
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let exps: HashMap<K, f64> = scores
        .iter()
        .map(|(k, s)| (k.clone(), (s - max).exp()))
        .collect();
    let total: f64 = exps.values().sum();
    exps.into_iter().map(|(k, e)| (k, e / total)).collect()
}
