use super::Optimizer;
use crate::error::{Error, Result};
use crate::types::Weights;

/// Plain stochastic gradient descent: `w[i] -= lr * g[i]`.
///
/// Only the keys present in the gradient are touched. A key that is in the
/// gradient but not yet in the weights starts from 0.
#[derive(Debug, Clone, PartialEq)]
pub struct VanillaSGD {
    lr: f64,
}

impl VanillaSGD {
    pub fn new(lr: f64) -> Result<Self> {
        if !lr.is_finite() || lr < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "learning rate must be a non-negative finite number, got {lr}"
            )));
        }
        Ok(Self { lr })
    }
}

impl Default for VanillaSGD {
    fn default() -> Self {
        Self { lr: 0.1 }
    }
}

impl Optimizer for VanillaSGD {
    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn step<'w>(&mut self, weights: &'w mut Weights, gradient: &Weights) -> &'w mut Weights {
        for (i, gi) in gradient {
            *weights.entry(i.clone()).or_insert(0.0) -= self.lr * gi;
        }
        weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{observation, FeatureKey};
    use approx::assert_relative_eq;

    #[test]
    fn test_single_step() {
        let mut sgd = VanillaSGD::new(0.1).unwrap();
        let mut w = observation([(0usize, 1.0)]);
        let g = observation([(0usize, 2.0)]);
        sgd.step(&mut w, &g);
        assert_relative_eq!(w[&FeatureKey::Index(0)], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_keys_absent_from_gradient_untouched() {
        let mut sgd = VanillaSGD::default();
        let mut w = observation([("a", 1.0), ("b", -3.0)]);
        let g = observation([("a", 1.0), ("c", -1.0)]);
        let updated = sgd.step(&mut w, &g);
        assert_relative_eq!(updated[&FeatureKey::from("a")], 0.9);
        assert_eq!(updated[&FeatureKey::from("b")], -3.0);
        assert_relative_eq!(updated[&FeatureKey::from("c")], 0.1);
    }

    #[test]
    fn test_step_mutates_in_place() {
        let mut sgd = VanillaSGD::new(0.5).unwrap();
        let mut w = observation([("a", 1.0)]);
        let before = w.clone();
        let ptr = &w as *const Weights;
        let returned = sgd.step(&mut w, &observation([("a", 1.0)]));
        assert!(std::ptr::eq(returned as *const Weights, ptr));
        assert_eq!(w[&FeatureKey::from("a")], 0.5);
        assert_eq!(before[&FeatureKey::from("a")], 1.0);
    }

    #[test]
    fn test_rejects_bad_learning_rates() {
        assert!(VanillaSGD::new(-0.1).is_err());
        assert!(VanillaSGD::new(f64::NAN).is_err());
        assert_eq!(VanillaSGD::new(0.0).unwrap().learning_rate(), 0.0);
    }
}
