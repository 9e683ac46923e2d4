use tracing::{debug, trace};

use crate::metrics::Metric;
use crate::models::base_model::Estimator;
use crate::types::{Label, Observation, Target};

/// Prediction of `model` for `x`, shaped as a target.
///
/// Classifiers yield their most probable label, regressors a real value and
/// clusterers their cluster index. Returns `None` when the model cannot
/// predict yet, e.g. a classifier that has not seen any label.
pub fn predict_target<E: Estimator>(model: &E, x: &Observation) -> Option<Target> {
    if let Some(classifier) = model.as_classifier() {
        return classifier.predict_one(x).map(Target::Class);
    }
    if let Some(regressor) = model.as_regressor() {
        return Some(Target::Real(regressor.predict_one(x)));
    }
    if let Some(clusterer) = model.as_clusterer() {
        return Some(Target::Class(Label::Index(clusterer.predict_one(x))));
    }
    None
}

/// Progressive validation: every observation is first predicted and scored,
/// then learnt from. Observations the model cannot predict yet are learnt
/// from without being scored.
pub fn online_score<E, M, I>(stream: I, model: &mut E, mut metric: M) -> M
where
    E: Estimator,
    M: Metric,
    I: IntoIterator<Item = (Observation, Target)>,
{
    let mut n_scored = 0usize;
    let mut n_seen = 0usize;
    for (x, y) in stream {
        if let Some(y_pred) = predict_target(model, &x) {
            metric.update(&y, &y_pred);
            n_scored += 1;
        } else {
            trace!(n_seen, "no prediction yet");
        }
        model.fit_one(&x, &y);
        n_seen += 1;
    }
    debug!(
        metric = metric.name(),
        score = metric.get(),
        n_seen,
        n_scored,
        "online score"
    );
    metric
}
