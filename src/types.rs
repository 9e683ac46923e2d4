use std::collections::HashMap;
use std::fmt;

/// Identifier of a feature inside an observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    Index(usize),
    Name(String),
}

impl From<usize> for FeatureKey {
    fn from(i: usize) -> Self {
        FeatureKey::Index(i)
    }
}

impl From<&str> for FeatureKey {
    fn from(name: &str) -> Self {
        FeatureKey::Name(name.to_string())
    }
}

impl From<String> for FeatureKey {
    fn from(name: String) -> Self {
        FeatureKey::Name(name)
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKey::Index(i) => write!(f, "{i}"),
            FeatureKey::Name(name) => write!(f, "{name}"),
        }
    }
}

/// One streaming data point.
pub type Observation = HashMap<FeatureKey, f64>;

/// Model parameters keyed by feature.
pub type Weights = HashMap<FeatureKey, f64>;

/// Class or cluster label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Bool(bool),
    Name(String),
    Index(usize),
}

impl From<bool> for Label {
    fn from(b: bool) -> Self {
        Label::Bool(b)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Bool(b) => write!(f, "{b}"),
            Label::Name(name) => write!(f, "{name}"),
            Label::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Class label to probability.
pub type Probabilities = HashMap<Label, f64>;

/// The `y` that accompanies an observation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Target {
    #[default]
    None,
    Real(f64),
    Class(Label),
}

impl Target {
    /// Numeric view of the target. Booleans map to 0/1.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Target::Real(v) => Some(*v),
            Target::Class(Label::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Target::Class(label) => Some(label),
            _ => None,
        }
    }

    /// Boolean view of the target. Only boolean labels qualify.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Target::Class(Label::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for Target {
    fn from(v: f64) -> Self {
        Target::Real(v)
    }
}

impl From<bool> for Target {
    fn from(b: bool) -> Self {
        Target::Class(Label::Bool(b))
    }
}

impl From<Label> for Target {
    fn from(label: Label) -> Self {
        Target::Class(label)
    }
}

/// Build an observation from `(key, value)` pairs.
pub fn observation<K, I>(pairs: I) -> Observation
where
    K: Into<FeatureKey>,
    I: IntoIterator<Item = (K, f64)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
