use std::collections::hash_map::{self, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use super::Univariate;
use crate::error::{Error, Result};
use crate::types::FeatureKey;

/// One running statistic per feature.
///
/// Aggregates are created lazily with `factory` the first time a key is
/// updated. Looking up a key that was never updated is an error; callers that
/// prefer zero statistics for unseen features use `get_or_zero`.
#[derive(Clone)]
pub struct FeatureMap<A, K = FeatureKey> {
    aggregates: HashMap<K, A>,
    factory: fn() -> A,
}

impl<A, K> FeatureMap<A, K>
where
    A: Univariate,
    K: Hash + Eq + Clone + Debug,
{
    pub fn new(factory: fn() -> A) -> Self {
        Self {
            aggregates: HashMap::new(),
            factory,
        }
    }

    /// Forward `value` to the aggregate of `key`, creating it if needed.
    pub fn update(&mut self, key: &K, value: f64) -> &mut Self {
        let factory = self.factory;
        match self.aggregates.get_mut(key) {
            Some(aggregate) => {
                aggregate.update(value);
            }
            None => {
                let mut aggregate = factory();
                aggregate.update(value);
                self.aggregates.insert(key.clone(), aggregate);
            }
        }
        self
    }

    /// Current statistic for `key`.
    pub fn get(&self, key: &K) -> Result<f64> {
        self.aggregates
            .get(key)
            .map(Univariate::get)
            .ok_or_else(|| Error::UnknownFeature(format!("{key:?}")))
    }

    /// Current statistic for `key`, or 0 if the key was never seen.
    pub fn get_or_zero(&self, key: &K) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn aggregate(&self, key: &K) -> Option<&A> {
        self.aggregates.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.aggregates.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, A> {
        self.aggregates.keys()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, A> {
        self.aggregates.iter()
    }
}

impl<A: Debug, K: Debug> Debug for FeatureMap<A, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.aggregates.iter()).finish()
    }
}
