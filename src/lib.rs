//! Online machine learning: models that learn from one observation at a time.
//!
//! Observations are sparse maps from feature keys to values. Every model
//! implements [`Estimator`] and exposes what else it can do through its
//! declared [`Capabilities`]. [`check_estimator`] verifies that a model honours
//! the contract its capabilities promise.

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod optim;
pub mod preprocessing;
pub mod stats;
pub mod stream;
pub mod types;
pub mod utils;

#[cfg(feature = "python")]
mod python;

pub use error::{Error, Result};
pub use models::base_model::{
    Capabilities, Capability, Classifier, Clusterer, Estimator, Regressor, Transformer,
};
pub use types::{observation, FeatureKey, Label, Observation, Probabilities, Target, Weights};
pub use utils::estimator_checks::{check_estimator, CheckFailure, CheckReport, Checker};
