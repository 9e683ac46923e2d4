use crate::config::ScalerConfig;
use crate::models::base_model::{Capabilities, Capability, Estimator, Transformer};
use crate::stats::{FeatureMap, Max, Min};
use crate::types::{Observation, Target};

/// Scales features to the [0, 1] range using a running min and max.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    min: FeatureMap<Min>,
    max: FeatureMap<Max>,
    eps: f64,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self::with_config(&ScalerConfig::default())
    }

    pub fn with_config(config: &ScalerConfig) -> Self {
        Self {
            min: FeatureMap::new(Min::new),
            max: FeatureMap::new(Max::new),
            eps: config.eps,
        }
    }

    pub fn min(&self) -> &FeatureMap<Min> {
        &self.min
    }

    pub fn max(&self) -> &FeatureMap<Max> {
        &self.max
    }
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for MinMaxScaler {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty().with(Capability::UnsupervisedTransformer)
    }

    fn fit_one(&mut self, x: &Observation, _y: &Target) -> &mut Self {
        for (i, xi) in x {
            self.min.update(i, *xi);
            self.max.update(i, *xi);
        }
        self
    }

    fn as_transformer(&self) -> Option<&dyn Transformer> {
        Some(self)
    }
}

impl Transformer for MinMaxScaler {
    fn transform_one(&self, x: &Observation) -> Observation {
        x.iter()
            .map(|(i, xi)| {
                let min = self.min.get_or_zero(i);
                let max = self.max.get_or_zero(i);
                (i.clone(), (xi - min) / (max - min + self.eps))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{observation, FeatureKey};
    use approx::assert_relative_eq;

    fn x(v: f64) -> Observation {
        observation([("x", v)])
    }

    #[test]
    fn test_midpoint() {
        let mut scaler = MinMaxScaler::new();
        scaler.fit_one(&x(0.0), &Target::None);
        scaler.fit_one(&x(10.0), &Target::None);
        let out = scaler.transform_one(&x(5.0));
        assert_relative_eq!(out[&FeatureKey::from("x")], 5.0 / (10.0 + 1e-9));
        assert_relative_eq!(out[&FeatureKey::from("x")], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_single_value_does_not_divide_by_zero() {
        let mut scaler = MinMaxScaler::new();
        let out = scaler.fit_one(&x(3.0), &Target::None).transform_one(&x(3.0));
        assert_eq!(out[&FeatureKey::from("x")], 0.0);
    }

    #[test]
    fn test_extremes_map_to_bounds() {
        let mut scaler = MinMaxScaler::new();
        for v in [4.0, -2.0, 8.0, 1.0] {
            scaler.fit_one(&x(v), &Target::None);
        }
        assert_eq!(scaler.transform_one(&x(-2.0))[&FeatureKey::from("x")], 0.0);
        assert_relative_eq!(scaler.transform_one(&x(8.0))[&FeatureKey::from("x")], 1.0, epsilon = 1e-9);
        assert_eq!(scaler.min().get(&FeatureKey::from("x")).unwrap(), -2.0);
        assert_eq!(scaler.max().get(&FeatureKey::from("x")).unwrap(), 8.0);
    }

    #[test]
    fn test_unseen_feature() {
        let scaler = MinMaxScaler::new();
        let out = scaler.transform_one(&observation([("y", 0.0)]));
        assert_eq!(out[&FeatureKey::from("y")], 0.0);
    }
}
