use crate::models::base_model::{
    Capabilities, Classifier, Clusterer, Estimator, Regressor, Transformer,
};
use crate::types::{Label, Observation, Probabilities, Target};

/// A transformer followed by a final estimator.
///
/// `fit_one` fits the transformer, transforms the observation with the updated
/// state and fits the final estimator on the result. The pipeline has the
/// capabilities of its final estimator.
#[derive(Debug, Clone)]
pub struct Pipeline<T, E> {
    transformer: T,
    estimator: E,
}

impl<T, E> Pipeline<T, E>
where
    T: Estimator + Transformer,
    E: Estimator,
{
    pub fn new(transformer: T, estimator: E) -> Self {
        Self {
            transformer,
            estimator,
        }
    }

    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }
}

impl<T, E> Estimator for Pipeline<T, E>
where
    T: Estimator + Transformer,
    E: Estimator,
{
    fn capabilities(&self) -> Capabilities {
        self.estimator.capabilities()
    }

    fn fit_one(&mut self, x: &Observation, y: &Target) -> &mut Self {
        let xt = self.transformer.fit_one(x, y).transform_one(x);
        self.estimator.fit_one(&xt, y);
        self
    }

    fn as_regressor(&self) -> Option<&dyn Regressor> {
        self.estimator.as_regressor().map(|_| self as &dyn Regressor)
    }

    fn as_classifier(&self) -> Option<&dyn Classifier> {
        self.estimator.as_classifier().map(|_| self as &dyn Classifier)
    }

    fn as_transformer(&self) -> Option<&dyn Transformer> {
        self.estimator.as_transformer().map(|_| self as &dyn Transformer)
    }

    fn as_clusterer(&self) -> Option<&dyn Clusterer> {
        self.estimator.as_clusterer().map(|_| self as &dyn Clusterer)
    }
}

impl<T, E> Regressor for Pipeline<T, E>
where
    T: Estimator + Transformer,
    E: Estimator,
{
    fn predict_one(&self, x: &Observation) -> f64 {
        let xt = self.transformer.transform_one(x);
        self.estimator
            .as_regressor()
            .map_or(0.0, |r| r.predict_one(&xt))
    }
}

impl<T, E> Classifier for Pipeline<T, E>
where
    T: Estimator + Transformer,
    E: Estimator,
{
    fn predict_proba_one(&self, x: &Observation) -> Probabilities {
        let xt = self.transformer.transform_one(x);
        self.estimator
            .as_classifier()
            .map(|c| c.predict_proba_one(&xt))
            .unwrap_or_default()
    }

    fn predict_one(&self, x: &Observation) -> Option<Label> {
        let xt = self.transformer.transform_one(x);
        self.estimator
            .as_classifier()
            .and_then(|c| c.predict_one(&xt))
    }
}

impl<T, E> Transformer for Pipeline<T, E>
where
    T: Estimator + Transformer,
    E: Estimator,
{
    fn transform_one(&self, x: &Observation) -> Observation {
        let xt = self.transformer.transform_one(x);
        match self.estimator.as_transformer() {
            Some(t) => t.transform_one(&xt),
            None => xt,
        }
    }
}

impl<T, E> Clusterer for Pipeline<T, E>
where
    T: Estimator + Transformer,
    E: Estimator,
{
    fn predict_one(&self, x: &Observation) -> usize {
        let xt = self.transformer.transform_one(x);
        self.estimator
            .as_clusterer()
            .map_or(0, |c| c.predict_one(&xt))
    }
}
