use std::fmt::{self, Debug};

use crate::types::{Label, Observation, Probabilities, Target};

/// What a model is able to do. Used to decide which behaviour to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Regressor,
    BinaryClassifier,
    MultiClassClassifier,
    SupervisedTransformer,
    UnsupervisedTransformer,
    Clusterer,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Regressor,
        Capability::BinaryClassifier,
        Capability::MultiClassClassifier,
        Capability::SupervisedTransformer,
        Capability::UnsupervisedTransformer,
        Capability::Clusterer,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of capabilities declared by a model.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const fn empty() -> Self {
        Capabilities(0)
    }

    pub fn of(capabilities: &[Capability]) -> Self {
        capabilities
            .iter()
            .fold(Self::empty(), |set, &c| set.with(c))
    }

    pub fn with(self, capability: Capability) -> Self {
        Capabilities(self.0 | capability.bit())
    }

    pub fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub fn is_classifier(self) -> bool {
        self.contains(Capability::BinaryClassifier) || self.contains(Capability::MultiClassClassifier)
    }

    pub fn is_transformer(self) -> bool {
        self.contains(Capability::SupervisedTransformer)
            || self.contains(Capability::UnsupervisedTransformer)
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The contract every online model satisfies.
///
/// `fit_one` learns from a single observation and hands the model back so that
/// calls can be chained. The capability views expose the extra behaviour a
/// model declares through `capabilities`.
pub trait Estimator: Clone + Debug {
    fn capabilities(&self) -> Capabilities;

    /// Incorporate one observation and its target.
    fn fit_one(&mut self, x: &Observation, y: &Target) -> &mut Self;

    fn as_regressor(&self) -> Option<&dyn Regressor> {
        None
    }

    fn as_classifier(&self) -> Option<&dyn Classifier> {
        None
    }

    fn as_transformer(&self) -> Option<&dyn Transformer> {
        None
    }

    fn as_clusterer(&self) -> Option<&dyn Clusterer> {
        None
    }
}

pub trait Regressor {
    fn predict_one(&self, x: &Observation) -> f64;
}

pub trait Classifier {
    /// Probability of each label known to the model.
    fn predict_proba_one(&self, x: &Observation) -> Probabilities;

    /// Most probable label, or `None` if the model knows no labels yet.
    fn predict_one(&self, x: &Observation) -> Option<Label> {
        self.predict_proba_one(x)
            .into_iter()
            .max_by(|(la, pa), (lb, pb)| pa.total_cmp(pb).then_with(|| lb.cmp(la)))
            .map(|(label, _)| label)
    }
}

pub trait Transformer {
    /// Transform an observation. Never modifies the transformer.
    fn transform_one(&self, x: &Observation) -> Observation;
}

pub trait Clusterer {
    /// Index of the cluster `x` belongs to.
    fn predict_one(&self, x: &Observation) -> usize;
}
