//! Weight update rules for models trained by gradient descent.

mod vanilla_sgd;

pub use vanilla_sgd::VanillaSGD;

use crate::types::Weights;

/// Turns a gradient into a weight update.
pub trait Optimizer {
    fn learning_rate(&self) -> f64;

    /// Apply `gradient` to `weights` in place and return the same map.
    ///
    /// The caller's map is modified. Clone it beforehand to keep the values
    /// from before the step.
    fn step<'w>(&mut self, weights: &'w mut Weights, gradient: &Weights) -> &'w mut Weights;
}
