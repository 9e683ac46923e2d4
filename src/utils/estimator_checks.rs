//! Generic checks that any `Estimator` is expected to pass.
//!
//! The checks to run are derived from the capabilities a model declares. Each
//! check works on its own copy of the model, and all randomness comes from the
//! generator handed to the checker.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::CheckConfig;
use crate::metrics::{Accuracy, Metric, MSE};
use crate::models::base_model::{Capabilities, Capability, Classifier, Estimator};
use crate::models::dummy::{NoChangeClassifier, PriorClassifier, StatisticRegressor};
use crate::stats::Mean;
use crate::stream;
use crate::types::{FeatureKey, Label, Observation, Target};
use crate::utils::evaluation::online_score;

/// A single behavioural check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    FitOne,
    PredictProbaOne,
    PredictProbaOneBinary,
    BetterThanDummyBinary,
    BetterThanDummyMulti,
    BetterThanDummyRegression,
}

impl Check {
    pub fn name(self) -> &'static str {
        match self {
            Check::FitOne => "check_fit_one",
            Check::PredictProbaOne => "check_predict_proba_one",
            Check::PredictProbaOneBinary => "check_predict_proba_one_binary",
            Check::BetterThanDummyBinary => "check_better_than_dummy_binary",
            Check::BetterThanDummyMulti => "check_better_than_dummy_multi",
            Check::BetterThanDummyRegression => "check_better_than_dummy_regression",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The contract clause a model violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckFailure {
    #[error("{check}: fit_one modified the observation it was given")]
    MutatedObservation { check: Check },

    #[error("{check}: fit_one modified the target it was given")]
    MutatedTarget { check: Check },

    #[error("{check}: fit_one did not return the model itself")]
    NotSelf { check: Check },

    #[error("{check}: model declares {capability:?} but does not expose it")]
    MissingCapability { check: Check, capability: Capability },

    #[error("{check}: probability {proba} for label {label} is outside [0, 1]")]
    ProbabilityOutOfRange { check: Check, label: Label, proba: f64 },

    #[error("{check}: probabilities sum to {sum} instead of 1")]
    ProbabilitiesDoNotSumToOne { check: Check, sum: f64 },

    #[error("{check}: expected probabilities for exactly true and false, got {labels:?}")]
    NotBinary { check: Check, labels: Vec<Label> },

    #[error(
        "{check}: {metric} of the model ({model_score}) is not better than {baseline} ({baseline_score})"
    )]
    NotBetterThanBaseline {
        check: Check,
        baseline: &'static str,
        metric: &'static str,
        model_score: f64,
        baseline_score: f64,
    },
}

/// Checks that apply to a model with the given capabilities.
pub fn yield_checks(capabilities: Capabilities) -> Vec<Check> {
    let mut checks = vec![Check::FitOne];

    if capabilities.is_classifier() {
        checks.push(Check::PredictProbaOne);
    }

    // Multi-class classifiers are also binary classifiers
    if capabilities.is_classifier() {
        checks.push(Check::BetterThanDummyBinary);

        if !capabilities.contains(Capability::MultiClassClassifier) {
            checks.push(Check::PredictProbaOneBinary);
        }
    }

    if capabilities.contains(Capability::MultiClassClassifier) {
        checks.push(Check::BetterThanDummyMulti);
    }

    if capabilities.contains(Capability::Regressor) {
        checks.push(Check::BetterThanDummyRegression);
    }

    checks
}

/// Random observations with features uniform in [0, 1), keyed by index.
pub fn make_random_features<R: Rng + ?Sized>(
    n_observations: usize,
    n_features: usize,
    rng: &mut R,
) -> Vec<Observation> {
    (0..n_observations)
        .map(|_| {
            (0..n_features)
                .map(|i| (FeatureKey::Index(i), rng.gen::<f64>()))
                .collect()
        })
        .collect()
}

/// Random targets of the kind a model with `capabilities` learns from.
pub fn make_random_targets<R: Rng + ?Sized>(
    capabilities: Capabilities,
    n_observations: usize,
    rng: &mut R,
) -> Vec<Target> {
    const CLASSES: [&str; 4] = ["a", "b", "c", "d"];

    (0..n_observations)
        .map(|_| {
            if capabilities.contains(Capability::Regressor)
                || capabilities.contains(Capability::SupervisedTransformer)
            {
                Target::Real(rng.gen())
            } else if capabilities.contains(Capability::MultiClassClassifier) {
                Target::Class(Label::from(CLASSES[rng.gen_range(0..CLASSES.len())]))
            } else if capabilities.contains(Capability::BinaryClassifier) {
                Target::Class(Label::Bool(rng.gen()))
            } else if capabilities.contains(Capability::Clusterer) {
                Target::Class(Label::Index(rng.gen_range(0..4)))
            } else {
                Target::None
            }
        })
        .collect()
}

pub fn make_random_x_y<R: Rng + ?Sized>(
    capabilities: Capabilities,
    n_observations: usize,
    n_features: usize,
    rng: &mut R,
) -> Vec<(Observation, Target)> {
    let xs = make_random_features(n_observations, n_features, rng);
    let ys = make_random_targets(capabilities, n_observations, rng);
    xs.into_iter().zip(ys).collect()
}

fn ensure_unchanged(
    check: Check,
    x: &Observation,
    x_before: &Observation,
    y: &Target,
    y_before: &Target,
) -> Result<(), CheckFailure> {
    if x != x_before {
        return Err(CheckFailure::MutatedObservation { check });
    }
    if y != y_before {
        return Err(CheckFailure::MutatedTarget { check });
    }
    Ok(())
}

/// Fit `model` on `(x, y)` and verify the call hands back the model itself
/// without touching its inputs.
fn fit_purely<E: Estimator>(
    check: Check,
    model: &mut E,
    x: &Observation,
    y: &Target,
) -> Result<(), CheckFailure> {
    let (x_before, y_before) = (x.clone(), y.clone());
    let expected: *const E = &*model;
    let returned: *const E = &*model.fit_one(x, y);
    if !std::ptr::eq(returned, expected) {
        return Err(CheckFailure::NotSelf { check });
    }
    ensure_unchanged(check, x, &x_before, y, &y_before)
}

fn classifier_of<E: Estimator>(check: Check, model: &E) -> Result<&dyn Classifier, CheckFailure> {
    model.as_classifier().ok_or(CheckFailure::MissingCapability {
        check,
        capability: if model.capabilities().contains(Capability::MultiClassClassifier) {
            Capability::MultiClassClassifier
        } else {
            Capability::BinaryClassifier
        },
    })
}

fn check_probabilities(
    check: Check,
    classifier: &dyn Classifier,
    x: &Observation,
    rel_tol: f64,
) -> Result<(), CheckFailure> {
    let y_pred = classifier.predict_proba_one(x);

    for (label, &proba) in &y_pred {
        if !(0.0..=1.0).contains(&proba) {
            return Err(CheckFailure::ProbabilityOutOfRange {
                check,
                label: label.clone(),
                proba,
            });
        }
    }

    let sum: f64 = y_pred.values().sum();
    if (sum - 1.0).abs() > rel_tol * sum.abs().max(1.0) {
        return Err(CheckFailure::ProbabilitiesDoNotSumToOne { check, sum });
    }
    Ok(())
}

fn check_a_better_than_b<A, B, M>(
    check: Check,
    model_a: &A,
    model_b: &B,
    baseline: &'static str,
    stream: &[(Observation, Target)],
    metric: &M,
) -> Result<(), CheckFailure>
where
    A: Estimator,
    B: Estimator,
    M: Metric,
{
    let metric_a = online_score(stream.iter().cloned(), &mut model_a.clone(), metric.clone());
    let metric_b = online_score(stream.iter().cloned(), &mut model_b.clone(), metric.clone());

    let (model_score, baseline_score) = (metric_a.get(), metric_b.get());
    debug!(%check, baseline, model_score, baseline_score, "compared against baseline");

    if !M::is_better(model_score, baseline_score) {
        return Err(CheckFailure::NotBetterThanBaseline {
            check,
            baseline,
            metric: metric.name(),
            model_score,
            baseline_score,
        });
    }
    Ok(())
}

/// Outcome of every check run against a model.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub outcomes: Vec<(Check, Result<(), CheckFailure>)>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn checks(&self) -> impl Iterator<Item = Check> + '_ {
        self.outcomes.iter().map(|(check, _)| *check)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        self.outcomes
            .iter()
            .filter_map(|(_, outcome)| outcome.as_ref().err())
    }

    /// The first failure, if any.
    pub fn into_result(self) -> Result<(), CheckFailure> {
        self.outcomes
            .into_iter()
            .find_map(|(_, outcome)| outcome.err())
            .map_or(Ok(()), Err)
    }
}

/// Runs the checks that apply to a model.
///
/// The better-than-dummy checks learn from synthetic labelled streams
/// (`stream::make_binary`, `make_multiclass` and `make_regression`) drawn
/// from the caller's generator, so a given seed always replays the same
/// stream. Their length and width come from `CheckConfig`.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Run every applicable check, each on a fresh copy of `model`.
    pub fn run<E, R>(&self, model: &E, rng: &mut R) -> CheckReport
    where
        E: Estimator,
        R: Rng + ?Sized,
    {
        let capabilities = model.capabilities();
        let checks = yield_checks(capabilities);
        info!(?capabilities, n_checks = checks.len(), "checking estimator");

        let outcomes = checks
            .into_iter()
            .map(|check| {
                let outcome = self.run_check(check, model, rng);
                match &outcome {
                    Ok(()) => debug!(%check, "passed"),
                    Err(failure) => warn!(%check, %failure, "failed"),
                }
                (check, outcome)
            })
            .collect();
        CheckReport { outcomes }
    }

    /// Run a single check on a copy of `model`.
    pub fn run_check<E, R>(&self, check: Check, model: &E, rng: &mut R) -> Result<(), CheckFailure>
    where
        E: Estimator,
        R: Rng + ?Sized,
    {
        let mut model = model.clone();
        match check {
            Check::FitOne => self.check_fit_one(&mut model, rng),
            Check::PredictProbaOne => self.check_predict_proba_one(&mut model, rng),
            Check::PredictProbaOneBinary => self.check_predict_proba_one_binary(&mut model, rng),
            Check::BetterThanDummyBinary => {
                let stream = stream::make_binary(self.config.stream_length, self.config.n_features, rng);
                self.check_better_than_dummy_classification(check, &model, &stream)
            }
            Check::BetterThanDummyMulti => {
                let stream = stream::make_multiclass(
                    self.config.stream_length,
                    self.config.n_features,
                    4,
                    rng,
                );
                self.check_better_than_dummy_classification(check, &model, &stream)
            }
            Check::BetterThanDummyRegression => {
                let stream =
                    stream::make_regression(self.config.stream_length, self.config.n_features, rng);
                check_a_better_than_b(
                    check,
                    &model,
                    &StatisticRegressor::new(Mean::new()),
                    "StatisticRegressor(Mean)",
                    &stream,
                    &MSE::new(),
                )
            }
        }
    }

    fn random_x_y<E: Estimator, R: Rng + ?Sized>(
        &self,
        model: &E,
        rng: &mut R,
    ) -> Vec<(Observation, Target)> {
        make_random_x_y(
            model.capabilities(),
            self.config.n_observations,
            self.config.n_features,
            rng,
        )
    }

    fn check_fit_one<E: Estimator, R: Rng + ?Sized>(
        &self,
        model: &mut E,
        rng: &mut R,
    ) -> Result<(), CheckFailure> {
        for (x, y) in self.random_x_y(model, rng) {
            fit_purely(Check::FitOne, model, &x, &y)?;
        }
        Ok(())
    }

    fn check_predict_proba_one<E: Estimator, R: Rng + ?Sized>(
        &self,
        model: &mut E,
        rng: &mut R,
    ) -> Result<(), CheckFailure> {
        let check = Check::PredictProbaOne;
        for (x, y) in self.random_x_y(model, rng) {
            fit_purely(check, model, &x, &y)?;
            let (x_before, y_before) = (x.clone(), y.clone());
            check_probabilities(check, classifier_of(check, model)?, &x, self.config.rel_tol)?;
            ensure_unchanged(check, &x, &x_before, &y, &y_before)?;
        }
        Ok(())
    }

    fn check_predict_proba_one_binary<E: Estimator, R: Rng + ?Sized>(
        &self,
        model: &mut E,
        rng: &mut R,
    ) -> Result<(), CheckFailure> {
        let check = Check::PredictProbaOneBinary;
        for (x, y) in self.random_x_y(model, rng) {
            let y_pred = classifier_of(check, model)?.predict_proba_one(&x);
            let is_binary = y_pred.len() == 2
                && y_pred.contains_key(&Label::Bool(true))
                && y_pred.contains_key(&Label::Bool(false));
            if !is_binary {
                let mut labels: Vec<Label> = y_pred.into_keys().collect();
                labels.sort();
                return Err(CheckFailure::NotBinary { check, labels });
            }
            model.fit_one(&x, &y);
        }
        Ok(())
    }

    fn check_better_than_dummy_classification<E: Estimator>(
        &self,
        check: Check,
        model: &E,
        stream: &[(Observation, Target)],
    ) -> Result<(), CheckFailure> {
        let metric = Accuracy::new();
        check_a_better_than_b(
            check,
            model,
            &NoChangeClassifier::new(),
            "NoChangeClassifier",
            stream,
            &metric,
        )?;
        check_a_better_than_b(
            check,
            model,
            &PriorClassifier::new(),
            "PriorClassifier",
            stream,
            &metric,
        )
    }
}

/// Run every applicable check with default settings and a generator seeded
/// with `seed`, returning the first failure.
pub fn check_estimator<E: Estimator>(model: &E, seed: u64) -> Result<(), CheckFailure> {
    let mut rng = StdRng::seed_from_u64(seed);
    Checker::default().run(model, &mut rng).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::base_model::Regressor;
    use crate::types::{observation, Probabilities};

    fn caps(list: &[Capability]) -> Capabilities {
        Capabilities::of(list)
    }

    #[test]
    fn test_checks_per_capability() {
        assert_eq!(
            yield_checks(caps(&[Capability::UnsupervisedTransformer])),
            vec![Check::FitOne]
        );
        assert_eq!(
            yield_checks(caps(&[Capability::BinaryClassifier])),
            vec![
                Check::FitOne,
                Check::PredictProbaOne,
                Check::BetterThanDummyBinary,
                Check::PredictProbaOneBinary,
            ]
        );
        assert_eq!(
            yield_checks(caps(&[Capability::BinaryClassifier, Capability::MultiClassClassifier])),
            vec![
                Check::FitOne,
                Check::PredictProbaOne,
                Check::BetterThanDummyBinary,
                Check::BetterThanDummyMulti,
            ]
        );
        assert_eq!(
            yield_checks(caps(&[Capability::Regressor])),
            vec![Check::FitOne, Check::BetterThanDummyRegression]
        );
        assert_eq!(yield_checks(caps(&[Capability::Clusterer])), vec![Check::FitOne]);
    }

    #[test]
    fn test_random_targets_match_capabilities() {
        let mut rng = StdRng::seed_from_u64(0);
        let reg = make_random_targets(caps(&[Capability::Regressor]), 10, &mut rng);
        assert!(reg.iter().all(|y| matches!(y, Target::Real(v) if (0.0..1.0).contains(v))));

        let multi = make_random_targets(
            caps(&[Capability::BinaryClassifier, Capability::MultiClassClassifier]),
            50,
            &mut rng,
        );
        assert!(multi
            .iter()
            .all(|y| matches!(y, Target::Class(Label::Name(n)) if ["a", "b", "c", "d"].contains(&n.as_str()))));

        let binary = make_random_targets(caps(&[Capability::BinaryClassifier]), 10, &mut rng);
        assert!(binary.iter().all(|y| matches!(y, Target::Class(Label::Bool(_)))));

        let clusters = make_random_targets(caps(&[Capability::Clusterer]), 10, &mut rng);
        assert!(clusters.iter().all(|y| matches!(y, Target::Class(Label::Index(i)) if *i < 4)));

        let unsupervised =
            make_random_targets(caps(&[Capability::UnsupervisedTransformer]), 10, &mut rng);
        assert!(unsupervised.iter().all(|y| *y == Target::None));

        let supervised = make_random_targets(caps(&[Capability::SupervisedTransformer]), 10, &mut rng);
        assert!(supervised.iter().all(|y| matches!(y, Target::Real(_))));
    }

    #[test]
    fn test_random_features() {
        let xs = make_random_features(5, 3, &mut StdRng::seed_from_u64(0));
        assert_eq!(xs.len(), 5);
        assert!(xs.iter().all(|x| x.len() == 3));
        assert!(xs.iter().flat_map(|x| x.values()).all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_mutation_is_detected() {
        let x = observation([("a", 1.0)]);
        let mut mutated = x.clone();
        mutated.insert(FeatureKey::from("a"), 2.0);
        assert_eq!(
            ensure_unchanged(Check::FitOne, &mutated, &x, &Target::None, &Target::None),
            Err(CheckFailure::MutatedObservation { check: Check::FitOne })
        );

        let y = Target::Real(1.0);
        assert_eq!(
            ensure_unchanged(Check::FitOne, &x, &x, &Target::Real(0.0), &y),
            Err(CheckFailure::MutatedTarget { check: Check::FitOne })
        );
        assert!(ensure_unchanged(Check::FitOne, &x, &x, &y, &y).is_ok());
    }

    /// Returns a freshly leaked copy of itself instead of itself.
    #[derive(Debug, Clone)]
    struct Impostor;

    impl Estimator for Impostor {
        fn capabilities(&self) -> Capabilities {
            Capabilities::empty().with(Capability::UnsupervisedTransformer)
        }

        fn fit_one(&mut self, _x: &Observation, _y: &Target) -> &mut Self {
            Box::leak(Box::new(Impostor))
        }
    }

    #[test]
    fn test_not_returning_self_fails() {
        let err = check_estimator(&Impostor, 0).unwrap_err();
        assert_eq!(err, CheckFailure::NotSelf { check: Check::FitOne });
    }

    /// Binary classifier with fixed, configurable probabilities.
    #[derive(Debug, Clone)]
    struct FixedProbas(Vec<(Label, f64)>);

    impl Estimator for FixedProbas {
        fn capabilities(&self) -> Capabilities {
            Capabilities::empty().with(Capability::BinaryClassifier)
        }

        fn fit_one(&mut self, _x: &Observation, _y: &Target) -> &mut Self {
            self
        }

        fn as_classifier(&self) -> Option<&dyn Classifier> {
            Some(self)
        }
    }

    impl Classifier for FixedProbas {
        fn predict_proba_one(&self, _x: &Observation) -> Probabilities {
            self.0.iter().cloned().collect()
        }
    }

    fn run(check: Check, model: &FixedProbas) -> Result<(), CheckFailure> {
        Checker::default().run_check(check, model, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_incoherent_probabilities_fail() {
        let model = FixedProbas(vec![(Label::Bool(true), 0.6), (Label::Bool(false), 0.6)]);
        let err = run(Check::PredictProbaOne, &model).unwrap_err();
        assert!(matches!(
            err,
            CheckFailure::ProbabilitiesDoNotSumToOne { sum, .. } if (sum - 1.2).abs() < 1e-12
        ));
    }

    #[test]
    fn test_probability_out_of_range_fails() {
        let model = FixedProbas(vec![(Label::Bool(true), 1.5), (Label::Bool(false), -0.5)]);
        let err = run(Check::PredictProbaOne, &model).unwrap_err();
        assert!(matches!(err, CheckFailure::ProbabilityOutOfRange { .. }));
    }

    #[test]
    fn test_coherent_probabilities_pass() {
        let model = FixedProbas(vec![(Label::Bool(true), 0.3), (Label::Bool(false), 0.7)]);
        assert!(run(Check::PredictProbaOne, &model).is_ok());
        assert!(run(Check::PredictProbaOneBinary, &model).is_ok());
    }

    #[test]
    fn test_three_labels_are_not_binary() {
        let model = FixedProbas(vec![
            (Label::Bool(true), 0.2),
            (Label::Bool(false), 0.3),
            (Label::from("maybe"), 0.5),
        ]);
        assert!(run(Check::PredictProbaOne, &model).is_ok());
        let err = run(Check::PredictProbaOneBinary, &model).unwrap_err();
        assert_eq!(
            err,
            CheckFailure::NotBinary {
                check: Check::PredictProbaOneBinary,
                labels: vec![Label::Bool(false), Label::Bool(true), Label::from("maybe")],
            }
        );
    }

    #[test]
    fn test_wrong_binary_keys() {
        let model = FixedProbas(vec![(Label::from("yes"), 0.5), (Label::from("no"), 0.5)]);
        assert!(matches!(
            run(Check::PredictProbaOneBinary, &model),
            Err(CheckFailure::NotBinary { .. })
        ));
    }

    #[test]
    fn test_constant_classifier_loses_to_baselines() {
        let model = FixedProbas(vec![(Label::from("never"), 1.0)]);
        let err = run(Check::BetterThanDummyBinary, &model).unwrap_err();
        assert!(matches!(
            err,
            CheckFailure::NotBetterThanBaseline { baseline: "NoChangeClassifier", model_score, .. }
                if model_score == 0.0
        ));
    }

    /// Declares itself a classifier without exposing the interface.
    #[derive(Debug, Clone)]
    struct Pretender;

    impl Estimator for Pretender {
        fn capabilities(&self) -> Capabilities {
            Capabilities::empty().with(Capability::BinaryClassifier)
        }

        fn fit_one(&mut self, _x: &Observation, _y: &Target) -> &mut Self {
            self
        }
    }

    #[test]
    fn test_missing_interface_fails() {
        let report = Checker::default().run(&Pretender, &mut StdRng::seed_from_u64(2));
        assert!(!report.passed());
        assert_eq!(report.checks().count(), 4);
        assert_eq!(
            report.clone().into_result(),
            Err(CheckFailure::MissingCapability {
                check: Check::PredictProbaOne,
                capability: Capability::BinaryClassifier,
            })
        );
        // fit_one still passes: independent checks keep running
        assert!(report.outcomes[0].1.is_ok());
        assert_eq!(report.failures().count(), 3);
    }

    /// Regressor that always predicts a large constant.
    #[derive(Debug, Clone)]
    struct Stubborn;

    impl Estimator for Stubborn {
        fn capabilities(&self) -> Capabilities {
            Capabilities::empty().with(Capability::Regressor)
        }

        fn fit_one(&mut self, _x: &Observation, _y: &Target) -> &mut Self {
            self
        }

        fn as_regressor(&self) -> Option<&dyn Regressor> {
            Some(self)
        }
    }

    impl Regressor for Stubborn {
        fn predict_one(&self, _x: &Observation) -> f64 {
            100.0
        }
    }

    #[test]
    fn test_bad_regressor_loses_to_mean() {
        let err = check_estimator(&Stubborn, 3).unwrap_err();
        assert!(matches!(
            err,
            CheckFailure::NotBetterThanBaseline { check: Check::BetterThanDummyRegression, metric: "MSE", .. }
        ));
    }

    #[test]
    fn test_baseline_comparison_replays_with_seed() {
        let model = FixedProbas(vec![(Label::from("never"), 1.0)]);
        let first = run(Check::BetterThanDummyBinary, &model);
        let second = run(Check::BetterThanDummyBinary, &model);
        assert!(first.is_err());
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_messages_name_the_clause() {
        let failure = CheckFailure::ProbabilitiesDoNotSumToOne {
            check: Check::PredictProbaOne,
            sum: 1.2,
        };
        assert_eq!(
            failure.to_string(),
            "check_predict_proba_one: probabilities sum to 1.2 instead of 1"
        );
    }
}
