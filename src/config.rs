use serde::{Deserialize, Serialize};

/// Settings for the conformance checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Number of random observations fed to the purity and probability checks.
    #[serde(default = "default_n_observations")]
    pub n_observations: usize,

    /// Number of features in each random observation.
    #[serde(default = "default_n_features")]
    pub n_features: usize,

    /// Length of the labeled stream used by the better-than-dummy checks.
    #[serde(default = "default_stream_length")]
    pub stream_length: usize,

    /// Relative tolerance when checking that probabilities sum to one.
    #[serde(default = "default_rel_tol")]
    pub rel_tol: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            n_observations: default_n_observations(),
            n_features: default_n_features(),
            stream_length: default_stream_length(),
            rel_tol: default_rel_tol(),
        }
    }
}

/// Settings shared by the streaming scalers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerConfig {
    /// Added to denominators to avoid divisions by zero.
    #[serde(default = "default_eps")]
    pub eps: f64,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self { eps: default_eps() }
    }
}

fn default_n_observations() -> usize {
    20
}
fn default_n_features() -> usize {
    4
}
fn default_stream_length() -> usize {
    500
}
fn default_rel_tol() -> f64 {
    1e-9
}
fn default_eps() -> f64 {
    1e-9
}
