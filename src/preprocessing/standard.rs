use crate::config::ScalerConfig;
use crate::models::base_model::{Capabilities, Capability, Estimator, Transformer};
use crate::stats::{FeatureMap, Univariate, Variance};
use crate::types::{Observation, Target};

/// Scales features to zero mean and unit variance.
///
/// A running mean and variance are kept for every feature and each value is
/// mapped to `(x - mean) / sqrt(variance + eps)`.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    variances: FeatureMap<Variance>,
    eps: f64,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::with_config(&ScalerConfig::default())
    }

    pub fn with_config(config: &ScalerConfig) -> Self {
        Self {
            variances: FeatureMap::new(Variance::default),
            eps: config.eps,
        }
    }

    pub fn variances(&self) -> &FeatureMap<Variance> {
        &self.variances
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for StandardScaler {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty().with(Capability::UnsupervisedTransformer)
    }

    fn fit_one(&mut self, x: &Observation, _y: &Target) -> &mut Self {
        for (i, xi) in x {
            self.variances.update(i, *xi);
        }
        self
    }

    fn as_transformer(&self) -> Option<&dyn Transformer> {
        Some(self)
    }
}

impl Transformer for StandardScaler {
    fn transform_one(&self, x: &Observation) -> Observation {
        x.iter()
            .map(|(i, xi)| {
                let (mean, var) = match self.variances.aggregate(i) {
                    Some(v) => (v.mean().get(), v.get()),
                    None => (0.0, 0.0),
                };
                (i.clone(), (xi - mean) / (var + self.eps).sqrt())
            })
            .collect()
    }
}
