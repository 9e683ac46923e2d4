//! Online evaluation metrics.

use std::fmt::Debug;

use crate::stats::{Mean, Univariate};
use crate::types::Target;

/// A metric updated one prediction at a time.
pub trait Metric: Clone + Debug {
    /// Whether a higher value means a better model.
    const BIGGER_IS_BETTER: bool;

    fn update(&mut self, y_true: &Target, y_pred: &Target) -> &mut Self;

    fn get(&self) -> f64;

    fn name(&self) -> &'static str;

    /// Whether `a` is a strictly better score than `b`.
    fn is_better(a: f64, b: f64) -> bool {
        if Self::BIGGER_IS_BETTER {
            a > b
        } else {
            a < b
        }
    }
}

/// Fraction of exactly matching predictions. Pairs with a missing side are
/// skipped.
#[derive(Debug, Clone, Default)]
pub struct Accuracy {
    score: Mean,
}

impl Accuracy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Metric for Accuracy {
    const BIGGER_IS_BETTER: bool = true;

    fn update(&mut self, y_true: &Target, y_pred: &Target) -> &mut Self {
        if *y_true == Target::None || *y_pred == Target::None {
            return self;
        }
        self.score.update(if y_true == y_pred { 1.0 } else { 0.0 });
        self
    }

    fn get(&self) -> f64 {
        self.score.get()
    }

    fn name(&self) -> &'static str {
        "Accuracy"
    }
}

/// Mean squared error. Pairs without a numeric value are skipped.
#[derive(Debug, Clone, Default)]
#[allow(clippy::upper_case_acronyms)]
pub struct MSE {
    error: Mean,
}

impl MSE {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Metric for MSE {
    const BIGGER_IS_BETTER: bool = false;

    fn update(&mut self, y_true: &Target, y_pred: &Target) -> &mut Self {
        if let (Some(t), Some(p)) = (y_true.as_f64(), y_pred.as_f64()) {
            self.error.update((t - p).powi(2));
        }
        self
    }

    fn get(&self) -> f64 {
        self.error.get()
    }

    fn name(&self) -> &'static str {
        "MSE"
    }
}
