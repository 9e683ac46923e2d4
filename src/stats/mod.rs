//! Running statistics that are updated one value at a time.
//!
//! Every aggregate here runs in O(1) space and O(1) time per update and never
//! keeps the history of values it has seen. An aggregate that has not been
//! updated yet reports `0.0`.

mod extremum;
mod feature_map;
mod mean;
mod variance;

pub use extremum::{Max, Min};
pub use feature_map::FeatureMap;
pub use mean::Mean;
pub use variance::Variance;

/// A statistic over a single stream of numbers.
pub trait Univariate {
    /// Incorporate one value.
    fn update(&mut self, x: f64) -> &mut Self;

    /// Current value of the statistic.
    fn get(&self) -> f64;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}
