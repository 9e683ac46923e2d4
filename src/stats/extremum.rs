use super::Univariate;

/// Running minimum. NaN values are ignored once the minimum is seeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Min {
    value: Option<f64>,
}

impl Min {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Univariate for Min {
    fn update(&mut self, x: f64) -> &mut Self {
        self.value = Some(match self.value {
            Some(current) => current.min(x),
            None => x,
        });
        self
    }

    fn get(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "min"
    }
}

/// Running maximum. NaN values are ignored once the maximum is seeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Max {
    value: Option<f64>,
}

impl Max {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Univariate for Max {
    fn update(&mut self, x: f64) -> &mut Self {
        self.value = Some(match self.value {
            Some(current) => current.max(x),
            None => x,
        });
        self
    }

    fn get(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "max"
    }
}
