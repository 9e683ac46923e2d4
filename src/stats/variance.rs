use super::{Mean, Univariate};

/// Running variance using Welford's algorithm.
///
/// `ddof` is the delta degrees of freedom: the divisor is `n - ddof`. The
/// default of 1 yields the sample variance. While `n <= ddof` the variance is
/// reported as 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Variance {
    ddof: u64,
    mean: Mean,
    m2: f64,
}

impl Variance {
    pub fn new(ddof: u64) -> Self {
        Self {
            ddof,
            mean: Mean::new(),
            m2: 0.0,
        }
    }

    /// The running mean maintained alongside the variance.
    pub fn mean(&self) -> &Mean {
        &self.mean
    }

    pub fn count(&self) -> u64 {
        self.mean.count()
    }

    pub fn ddof(&self) -> u64 {
        self.ddof
    }
}

impl Default for Variance {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Univariate for Variance {
    fn update(&mut self, x: f64) -> &mut Self {
        let old_mean = self.mean.get();
        let new_mean = self.mean.update(x).get();
        self.m2 += (x - old_mean) * (x - new_mean);
        self
    }

    fn get(&self) -> f64 {
        let n = self.mean.count();
        if n <= self.ddof {
            return 0.0;
        }
        // Rounding can push m2 a hair below zero on constant streams.
        // Only negatives are clamped; NaN passes through.
        let variance = self.m2 / (n - self.ddof) as f64;
        if variance < 0.0 {
            0.0
        } else {
            variance
        }
    }

    fn name(&self) -> &'static str {
        "variance"
    }
}
