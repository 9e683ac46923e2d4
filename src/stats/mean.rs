use super::Univariate;

/// Running mean.
///
/// The mean is moved towards each new value by `(x - mean) / n` instead of
/// dividing a running sum, so it stays accurate over long streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mean {
    n: u64,
    mean: f64,
}

impl Mean {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values seen so far.
    pub fn count(&self) -> u64 {
        self.n
    }
}

impl Univariate for Mean {
    fn update(&mut self, x: f64) -> &mut Self {
        self.n += 1;
        self.mean += (x - self.mean) / self.n as f64;
        self
    }

    fn get(&self) -> f64 {
        self.mean
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}
