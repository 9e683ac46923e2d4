//! Linear models trained online with an `Optimizer`.

use tracing::warn;

use crate::models::base_model::{
    Capabilities, Capability, Classifier, Estimator, Regressor,
};
use crate::optim::{Optimizer, VanillaSGD};
use crate::types::{Label, Observation, Probabilities, Target, Weights};
use crate::utils::math::{dot, sigmoid};

fn default_optimizer() -> VanillaSGD {
    VanillaSGD::new(0.01).unwrap_or_default()
}

/// Gradient of the loss with respect to the weights, given the gradient with
/// respect to the raw prediction.
fn loss_gradient(x: &Observation, g_pred: f64) -> Weights {
    x.iter().map(|(i, xi)| (i.clone(), g_pred * xi)).collect()
}

/// Linear regression trained on the squared loss.
#[derive(Debug, Clone)]
pub struct LinearRegression<O = VanillaSGD> {
    optimizer: O,
    weights: Weights,
    intercept: f64,
    intercept_lr: f64,
}

impl LinearRegression<VanillaSGD> {
    pub fn new() -> Self {
        Self::with_optimizer(default_optimizer(), 0.01)
    }
}

impl Default for LinearRegression<VanillaSGD> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> LinearRegression<O> {
    pub fn with_optimizer(optimizer: O, intercept_lr: f64) -> Self {
        Self {
            optimizer,
            weights: Weights::new(),
            intercept: 0.0,
            intercept_lr,
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    fn raw_dot(&self, x: &Observation) -> f64 {
        self.intercept + dot(&self.weights, x)
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> Estimator for LinearRegression<O> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty().with(Capability::Regressor)
    }

    fn fit_one(&mut self, x: &Observation, y: &Target) -> &mut Self {
        let Some(y) = y.as_f64() else {
            warn!(y = ?y, "LinearRegression skipping non-numeric target");
            return self;
        };

        // Squared loss: d/dp (p - y)^2
        let g_pred = 2.0 * (self.raw_dot(x) - y);

        self.intercept -= self.intercept_lr * g_pred;
        let gradient = loss_gradient(x, g_pred);
        self.optimizer.step(&mut self.weights, &gradient);
        self
    }

    fn as_regressor(&self) -> Option<&dyn Regressor> {
        Some(self)
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> Regressor for LinearRegression<O> {
    fn predict_one(&self, x: &Observation) -> f64 {
        self.raw_dot(x)
    }
}

/// Binary logistic regression trained on the log loss.
#[derive(Debug, Clone)]
pub struct LogisticRegression<O = VanillaSGD> {
    optimizer: O,
    weights: Weights,
    intercept: f64,
    intercept_lr: f64,
}

impl LogisticRegression<VanillaSGD> {
    pub fn new() -> Self {
        Self::with_optimizer(default_optimizer(), 0.01)
    }
}

impl Default for LogisticRegression<VanillaSGD> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> LogisticRegression<O> {
    pub fn with_optimizer(optimizer: O, intercept_lr: f64) -> Self {
        Self {
            optimizer,
            weights: Weights::new(),
            intercept: 0.0,
            intercept_lr,
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    fn proba_true(&self, x: &Observation) -> f64 {
        sigmoid(self.intercept + dot(&self.weights, x))
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> Estimator for LogisticRegression<O> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty().with(Capability::BinaryClassifier)
    }

    fn fit_one(&mut self, x: &Observation, y: &Target) -> &mut Self {
        let Some(y) = y.as_bool() else {
            warn!(y = ?y, "LogisticRegression skipping non-boolean target");
            return self;
        };

        // Log loss: d/dz = sigmoid(z) - y
        let g_pred = self.proba_true(x) - if y { 1.0 } else { 0.0 };

        self.intercept -= self.intercept_lr * g_pred;
        let gradient = loss_gradient(x, g_pred);
        self.optimizer.step(&mut self.weights, &gradient);
        self
    }

    fn as_classifier(&self) -> Option<&dyn Classifier> {
        Some(self)
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> Classifier for LogisticRegression<O> {
    fn predict_proba_one(&self, x: &Observation) -> Probabilities {
        let p = self.proba_true(x);
        [(Label::Bool(true), p), (Label::Bool(false), 1.0 - p)].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{observation, FeatureKey};
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_regression_single_step() {
        let mut model = LinearRegression::new();
        let x = observation([("a", 1.0), ("b", 2.0)]);
        model.fit_one(&x, &Target::Real(1.0));
        // p = 0, g = 2 * (0 - 1) = -2
        assert_relative_eq!(model.intercept(), 0.02);
        assert_relative_eq!(model.weights()[&FeatureKey::from("a")], 0.02);
        assert_relative_eq!(model.weights()[&FeatureKey::from("b")], 0.04);
        assert_relative_eq!(model.predict_one(&x), 0.02 + 0.02 + 0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_regression_learns_a_line() {
        let mut model = LinearRegression::with_optimizer(VanillaSGD::new(0.05).unwrap(), 0.05);
        for i in 0..2000 {
            let v = (i % 20) as f64 / 10.0 - 1.0;
            model.fit_one(&observation([("x", v)]), &Target::Real(3.0 * v + 1.0));
        }
        assert_relative_eq!(model.weights()[&FeatureKey::from("x")], 3.0, epsilon = 1e-3);
        assert_relative_eq!(model.intercept(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_linear_regression_skips_labels() {
        let mut model = LinearRegression::new();
        model.fit_one(&observation([("a", 1.0)]), &Label::from("a").into());
        assert!(model.weights().is_empty());
    }

    #[test]
    fn test_logistic_regression_skips_real_targets() {
        let mut model = LogisticRegression::new();
        model.fit_one(&observation([("a", 1.0)]), &Target::Real(0.9));
        assert!(model.weights().is_empty());
        assert_eq!(model.intercept(), 0.0);
    }

    #[test]
    fn test_logistic_regression_probabilities() {
        let model = LogisticRegression::new();
        let probas = model.predict_proba_one(&observation([("a", 1.0)]));
        assert_eq!(probas.len(), 2);
        assert_eq!(probas[&Label::Bool(true)], 0.5);
        assert_eq!(probas[&Label::Bool(false)], 0.5);
    }

    #[test]
    fn test_logistic_regression_separates() {
        let mut model = LogisticRegression::with_optimizer(VanillaSGD::new(0.1).unwrap(), 0.1);
        for i in 0..1000 {
            let v = (i % 10) as f64 - 4.5;
            model.fit_one(&observation([("x", v)]), &(v > 0.0).into());
        }
        let high = model.predict_proba_one(&observation([("x", 3.0)]));
        let low = model.predict_proba_one(&observation([("x", -3.0)]));
        assert!(high[&Label::Bool(true)] > 0.9);
        assert!(low[&Label::Bool(false)] > 0.9);
        assert_eq!(
            Classifier::predict_one(&model, &observation([("x", 2.0)])),
            Some(Label::Bool(true))
        );
    }
}
