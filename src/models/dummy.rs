//! Trivial baselines that a real model is expected to beat.

use std::collections::HashMap;

use crate::models::base_model::{Capabilities, Capability, Classifier, Estimator, Regressor};
use crate::stats::{Mean, Univariate};
use crate::types::{Label, Observation, Probabilities, Target};

fn classifier_capabilities() -> Capabilities {
    Capabilities::of(&[Capability::BinaryClassifier, Capability::MultiClassClassifier])
}

/// Always predicts the last label it was shown.
#[derive(Debug, Clone, Default)]
pub struct NoChangeClassifier {
    last: Option<Label>,
}

impl NoChangeClassifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Estimator for NoChangeClassifier {
    fn capabilities(&self) -> Capabilities {
        classifier_capabilities()
    }

    fn fit_one(&mut self, _x: &Observation, y: &Target) -> &mut Self {
        if let Some(label) = y.as_label() {
            self.last = Some(label.clone());
        }
        self
    }

    fn as_classifier(&self) -> Option<&dyn Classifier> {
        Some(self)
    }
}

impl Classifier for NoChangeClassifier {
    fn predict_proba_one(&self, _x: &Observation) -> Probabilities {
        self.last
            .iter()
            .map(|label| (label.clone(), 1.0))
            .collect()
    }
}

/// Predicts labels according to how often each has been seen.
#[derive(Debug, Clone, Default)]
pub struct PriorClassifier {
    counts: HashMap<Label, u64>,
    n: u64,
}

impl PriorClassifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Estimator for PriorClassifier {
    fn capabilities(&self) -> Capabilities {
        classifier_capabilities()
    }

    fn fit_one(&mut self, _x: &Observation, y: &Target) -> &mut Self {
        if let Some(label) = y.as_label() {
            *self.counts.entry(label.clone()).or_insert(0) += 1;
            self.n += 1;
        }
        self
    }

    fn as_classifier(&self) -> Option<&dyn Classifier> {
        Some(self)
    }
}

impl Classifier for PriorClassifier {
    fn predict_proba_one(&self, _x: &Observation) -> Probabilities {
        self.counts
            .iter()
            .map(|(label, count)| (label.clone(), *count as f64 / self.n as f64))
            .collect()
    }
}

/// Predicts a running statistic of the targets, e.g. their mean.
#[derive(Debug, Clone)]
pub struct StatisticRegressor<S = Mean> {
    statistic: S,
}

impl<S> StatisticRegressor<S>
where
    S: Univariate + Clone + std::fmt::Debug,
{
    pub fn new(statistic: S) -> Self {
        Self { statistic }
    }
}

impl Default for StatisticRegressor<Mean> {
    fn default() -> Self {
        Self::new(Mean::new())
    }
}

impl<S> Estimator for StatisticRegressor<S>
where
    S: Univariate + Clone + std::fmt::Debug,
{
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty().with(Capability::Regressor)
    }

    fn fit_one(&mut self, _x: &Observation, y: &Target) -> &mut Self {
        if let Some(v) = y.as_f64() {
            self.statistic.update(v);
        }
        self
    }

    fn as_regressor(&self) -> Option<&dyn Regressor> {
        Some(self)
    }
}

impl<S: Univariate> Regressor for StatisticRegressor<S> {
    fn predict_one(&self, _x: &Observation) -> f64 {
        self.statistic.get()
    }
}
