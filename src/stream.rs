//! Sources of `(Observation, Target)` pairs.
//!
//! Streams are plain iterators. The synthetic generators draw everything from
//! the random source they are given, so a seeded generator always yields the
//! same stream.

use ndarray::{ArrayView1, ArrayView2};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::types::{FeatureKey, Label, Observation, Target};

/// Iterate over the rows of a 2D array, keyed by column index.
///
/// Rows without a matching target are paired with `Target::None`.
pub fn iter_array<'a, T>(
    records: ArrayView2<'a, f64>,
    targets: Option<ArrayView1<'a, T>>,
) -> impl Iterator<Item = (Observation, Target)> + 'a
where
    T: Clone + Into<Target> + 'a,
{
    (0..records.nrows()).map(move |r| {
        let x: Observation = records
            .row(r)
            .iter()
            .enumerate()
            .map(|(i, v)| (FeatureKey::Index(i), *v))
            .collect();
        let y = targets
            .as_ref()
            .and_then(|t| t.get(r).cloned())
            .map_or(Target::None, Into::into);
        (x, y)
    })
}

/// Collect a stream and return it in a random order.
pub fn shuffled<I, R>(stream: I, rng: &mut R) -> Vec<(Observation, Target)>
where
    I: IntoIterator<Item = (Observation, Target)>,
    R: Rng + ?Sized,
{
    let mut pairs: Vec<_> = stream.into_iter().collect();
    pairs.shuffle(rng);
    pairs
}

fn gaussian_observation<R: Rng + ?Sized>(n_features: usize, rng: &mut R) -> Observation {
    (0..n_features)
        .map(|i| (FeatureKey::Index(i), rng.sample::<f64, _>(StandardNormal)))
        .collect()
}

/// Fixed, well-spread coefficients: 1.5, -2, 2.5, -3, ...
fn coefficient(i: usize) -> f64 {
    let magnitude = 1.5 + 0.5 * i as f64;
    if i % 2 == 0 {
        magnitude
    } else {
        -magnitude
    }
}

fn linear_score(x: &Observation) -> f64 {
    x.iter()
        .map(|(k, v)| match k {
            FeatureKey::Index(i) => coefficient(*i) * v,
            FeatureKey::Name(_) => 0.0,
        })
        .sum()
}

/// Gaussian features with a boolean target given by the sign of a fixed
/// linear function plus noise.
pub fn make_binary<R: Rng + ?Sized>(
    n_samples: usize,
    n_features: usize,
    rng: &mut R,
) -> Vec<(Observation, Target)> {
    (0..n_samples)
        .map(|_| {
            let x = gaussian_observation(n_features, rng);
            let noise: f64 = rng.sample(StandardNormal);
            let y = linear_score(&x) + 0.5 * noise > 0.0;
            (x, Target::from(y))
        })
        .collect()
}

/// Gaussian blobs, one per class, labelled `"a"`, `"b"`, ...
///
/// Class `k` is centred at `3` along axis `k % n_features`, with a sign that
/// flips every `n_features` classes.
pub fn make_multiclass<R: Rng + ?Sized>(
    n_samples: usize,
    n_features: usize,
    n_classes: usize,
    rng: &mut R,
) -> Vec<(Observation, Target)> {
    let n_features = n_features.max(1);
    let n_classes = n_classes.clamp(1, 26);
    (0..n_samples)
        .map(|_| {
            let k = rng.gen_range(0..n_classes);
            let mut x = gaussian_observation(n_features, rng);
            let sign = if (k / n_features) % 2 == 0 { 1.0 } else { -1.0 };
            if let Some(v) = x.get_mut(&FeatureKey::Index(k % n_features)) {
                *v += 3.0 * sign;
            }
            let label = ((b'a' + k as u8) as char).to_string();
            (x, Target::Class(Label::Name(label)))
        })
        .collect()
}

/// Gaussian features with a real target given by a fixed linear function,
/// an intercept of 1 and a little noise.
pub fn make_regression<R: Rng + ?Sized>(
    n_samples: usize,
    n_features: usize,
    rng: &mut R,
) -> Vec<(Observation, Target)> {
    (0..n_samples)
        .map(|_| {
            let x = gaussian_observation(n_features, rng);
            let noise: f64 = rng.sample(StandardNormal);
            let y = linear_score(&x) + 1.0 + 0.1 * noise;
            (x, Target::Real(y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_iter_array() {
        let records = array![[4.0, 1.0], [1.0, 3.0], [5.0, 7.0]];
        let targets = array![true, false, true];
        let pairs: Vec<_> = iter_array(records.view(), Some(targets.view())).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1].0[&FeatureKey::Index(1)], 3.0);
        assert_eq!(pairs[1].1, Target::from(false));
    }

    #[test]
    fn test_iter_array_without_targets() {
        let records = array![[1.0], [2.0]];
        let pairs: Vec<_> = iter_array::<f64>(records.view(), None).collect();
        assert!(pairs.iter().all(|(_, y)| *y == Target::None));
    }

    #[test]
    fn test_shuffled_keeps_pairs() {
        let mut rng = StdRng::seed_from_u64(42);
        let stream = make_regression(50, 3, &mut rng);
        let mut shuffled_stream = shuffled(stream.clone(), &mut rng);
        assert_eq!(shuffled_stream.len(), 50);
        let first = stream[0].clone();
        assert!(shuffled_stream.iter().any(|pair| *pair == first));
        shuffled_stream.retain(|pair| *pair != first);
        assert_eq!(shuffled_stream.len(), 49);
    }

    #[test]
    fn test_generators_are_reproducible() {
        let a = make_binary(20, 4, &mut StdRng::seed_from_u64(1));
        let b = make_binary(20, 4, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_multiclass_labels() {
        let stream = make_multiclass(200, 4, 4, &mut StdRng::seed_from_u64(3));
        let mut labels: Vec<_> = stream
            .iter()
            .filter_map(|(_, y)| y.as_label().cloned())
            .collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels, ["a", "b", "c", "d"].map(Label::from).to_vec());
    }

    #[test]
    fn test_binary_is_roughly_balanced() {
        let stream = make_binary(1000, 4, &mut StdRng::seed_from_u64(5));
        let positives = stream.iter().filter(|(_, y)| y.as_bool() == Some(true)).count();
        assert!((350..650).contains(&positives));
    }
}
