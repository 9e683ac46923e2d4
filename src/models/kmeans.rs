use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};
use crate::models::base_model::{Capabilities, Capability, Clusterer, Estimator};
use crate::types::{Observation, Target, Weights};

/// Incremental k-means.
///
/// Each observation pulls its closest centre, by squared Euclidean distance,
/// towards itself by a fraction `halflife` of the gap. Centre coordinates are
/// drawn from a standard normal the first time a feature is seen.
#[derive(Debug, Clone)]
pub struct KMeans {
    halflife: f64,
    init: Normal<f64>,
    centers: Vec<Weights>,
    rng: StdRng,
}

impl KMeans {
    pub fn new(n_clusters: usize, halflife: f64, seed: Option<u64>) -> Result<Self> {
        if n_clusters == 0 {
            return Err(Error::InvalidParameter("n_clusters must be at least 1".into()));
        }
        if !(halflife > 0.0 && halflife <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "halflife must be in (0, 1], got {halflife}"
            )));
        }
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let init = Normal::new(0.0, 1.0)
            .map_err(|e| Error::InvalidParameter(e.to_string()))?;
        Ok(Self {
            halflife,
            init,
            centers: vec![Weights::new(); n_clusters],
            rng,
        })
    }

    pub fn n_clusters(&self) -> usize {
        self.centers.len()
    }

    pub fn centers(&self) -> &[Weights] {
        &self.centers
    }

    fn distance(center: &Weights, x: &Observation) -> f64 {
        x.iter()
            .map(|(i, xi)| {
                let c = center.get(i).copied().unwrap_or(0.0);
                (xi - c).powi(2)
            })
            .sum()
    }

    fn closest(&self, x: &Observation) -> usize {
        self.centers
            .iter()
            .enumerate()
            .map(|(k, c)| (k, Self::distance(c, x)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(k, _)| k)
            .unwrap_or(0)
    }
}

impl Estimator for KMeans {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty().with(Capability::Clusterer)
    }

    fn fit_one(&mut self, x: &Observation, _y: &Target) -> &mut Self {
        // Give every centre a coordinate for features seen for the first time
        for center in self.centers.iter_mut() {
            for i in x.keys() {
                if !center.contains_key(i) {
                    center.insert(i.clone(), self.init.sample(&mut self.rng));
                }
            }
        }

        let k = self.closest(x);
        let halflife = self.halflife;
        let center = &mut self.centers[k];
        for (i, xi) in x {
            if let Some(c) = center.get_mut(i) {
                *c += halflife * (xi - *c);
            }
        }
        self
    }

    fn as_clusterer(&self) -> Option<&dyn Clusterer> {
        Some(self)
    }
}

impl Clusterer for KMeans {
    fn predict_one(&self, x: &Observation) -> usize {
        self.closest(x)
    }
}
