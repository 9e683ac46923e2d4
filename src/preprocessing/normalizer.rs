use tracing::debug;

use crate::error::{Error, Result};
use crate::models::base_model::{Capabilities, Capability, Estimator, Transformer};
use crate::types::{Observation, Target};
use crate::utils::math::norm;

/// Scales each observation to unit norm.
///
/// Stateless: `fit_one` does nothing. An observation whose norm is zero is
/// returned as the zero vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalizer {
    order: f64,
}

impl Normalizer {
    pub fn new(order: f64) -> Result<Self> {
        if !order.is_finite() || order <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "norm order must be a positive finite number, got {order}"
            )));
        }
        Ok(Self { order })
    }

    pub fn order(&self) -> f64 {
        self.order
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { order: 2.0 }
    }
}

impl Estimator for Normalizer {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty().with(Capability::UnsupervisedTransformer)
    }

    fn fit_one(&mut self, _x: &Observation, _y: &Target) -> &mut Self {
        self
    }

    fn as_transformer(&self) -> Option<&dyn Transformer> {
        Some(self)
    }
}

impl Transformer for Normalizer {
    fn transform_one(&self, x: &Observation) -> Observation {
        let norm = norm(x, self.order);
        if norm == 0.0 {
            debug!(features = x.len(), "zero norm observation, returning zeros");
            return x.keys().map(|i| (i.clone(), 0.0)).collect();
        }
        x.iter().map(|(i, xi)| (i.clone(), xi / norm)).collect()
    }
}
