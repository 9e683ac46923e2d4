use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::base_model::{Capabilities, Capability, Classifier, Estimator};
use crate::optim::{Optimizer, VanillaSGD};
use crate::types::{Label, Observation, Probabilities, Target, Weights};
use crate::utils::math::{dot, softmax};

/// Multi-class logistic regression.
///
/// One weight vector and intercept is kept per label; labels are added the
/// first time they appear as a target. Works for binary targets too.
#[derive(Debug, Clone)]
pub struct SoftmaxRegression<O = VanillaSGD> {
    optimizer: O,
    weights: HashMap<Label, Weights>,
    intercepts: HashMap<Label, f64>,
    intercept_lr: f64,
}

impl SoftmaxRegression<VanillaSGD> {
    pub fn new() -> Self {
        Self::with_optimizer(VanillaSGD::new(0.01).unwrap_or_default(), 0.01)
    }
}

impl Default for SoftmaxRegression<VanillaSGD> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> SoftmaxRegression<O> {
    pub fn with_optimizer(optimizer: O, intercept_lr: f64) -> Self {
        Self {
            optimizer,
            weights: HashMap::new(),
            intercepts: HashMap::new(),
            intercept_lr,
        }
    }

    /// Labels seen so far.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.weights.keys()
    }

    fn scores(&self, x: &Observation) -> HashMap<Label, f64> {
        self.weights
            .iter()
            .map(|(label, w)| {
                let b = self.intercepts.get(label).copied().unwrap_or(0.0);
                (label.clone(), b + dot(w, x))
            })
            .collect()
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> Estimator for SoftmaxRegression<O> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::of(&[Capability::BinaryClassifier, Capability::MultiClassClassifier])
    }

    fn fit_one(&mut self, x: &Observation, y: &Target) -> &mut Self {
        let Some(y) = y.as_label() else {
            warn!(y = ?y, "SoftmaxRegression skipping target without a label");
            return self;
        };

        if !self.weights.contains_key(y) {
            debug!(label = %y, "new label");
            self.weights.insert(y.clone(), Weights::new());
            self.intercepts.insert(y.clone(), 0.0);
        }

        let probas = softmax(&self.scores(x));
        for (label, p) in probas {
            // Cross-entropy: d/dz_k = p_k - 1[k == y]
            let g_pred = p - if &label == y { 1.0 } else { 0.0 };
            let gradient: Weights = x.iter().map(|(i, xi)| (i.clone(), g_pred * xi)).collect();
            if let Some(w) = self.weights.get_mut(&label) {
                self.optimizer.step(w, &gradient);
            }
            if let Some(b) = self.intercepts.get_mut(&label) {
                *b -= self.intercept_lr * g_pred;
            }
        }
        self
    }

    fn as_classifier(&self) -> Option<&dyn Classifier> {
        Some(self)
    }
}

impl<O: Optimizer + Clone + std::fmt::Debug> Classifier for SoftmaxRegression<O> {
    fn predict_proba_one(&self, x: &Observation) -> Probabilities {
        if self.weights.is_empty() {
            return Probabilities::new();
        }
        softmax(&self.scores(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation;
    use approx::assert_relative_eq;

    #[test]
    fn test_untrained_knows_no_labels() {
        let model = SoftmaxRegression::new();
        assert!(model.predict_proba_one(&observation([("a", 1.0)])).is_empty());
        assert_eq!(model.predict_one(&observation([("a", 1.0)])), None);
    }

    #[test]
    fn test_single_label_is_certain() {
        let mut model = SoftmaxRegression::new();
        let x = observation([("a", 1.0)]);
        model.fit_one(&x, &Label::from("z").into());
        let probas = model.predict_proba_one(&x);
        assert_eq!(probas.len(), 1);
        assert_relative_eq!(probas[&Label::from("z")], 1.0);
    }

    #[test]
    fn test_three_clusters() {
        let centers = [("a", (3.0, 0.0)), ("b", (0.0, 3.0)), ("c", (-3.0, -3.0))];
        let mut model = SoftmaxRegression::with_optimizer(VanillaSGD::new(0.05).unwrap(), 0.05);
        for i in 0..600 {
            let (label, (cx, cy)) = centers[i % 3];
            let jitter = ((i * 7) % 11) as f64 / 11.0 - 0.5;
            let x = observation([("x", cx + jitter), ("y", cy - jitter)]);
            model.fit_one(&x, &Label::from(label).into());
        }
        for (label, (cx, cy)) in centers {
            let x = observation([("x", cx), ("y", cy)]);
            let probas = model.predict_proba_one(&x);
            assert_eq!(probas.len(), 3);
            assert_relative_eq!(probas.values().sum::<f64>(), 1.0, epsilon = 1e-9);
            assert_eq!(model.predict_one(&x), Some(Label::from(label)));
        }
        assert_eq!(model.labels().count(), 3);
    }
}
