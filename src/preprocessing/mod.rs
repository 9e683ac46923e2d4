//! Streaming feature scalers.
//!
//! Statistics are tracked per feature and updated in `fit_one`;
//! `transform_one` only reads them. A feature that has never been fitted is
//! scaled with zero statistics (mean, variance, min and max all 0).

mod min_max;
mod normalizer;
mod standard;

pub use min_max::MinMaxScaler;
pub use normalizer::Normalizer;
pub use standard::StandardScaler;
