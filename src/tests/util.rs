use crate::core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(($e as f64 - $v as f64).abs() <= $t as f64, "{} !~= {} within {}", $e, $v, $t)
    }
}

/// Values in [min, max), skewed towards `min` by cubing a uniform sample.
pub fn random_data(size: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| min + rng.gen::<f64>().powi(3) * (max - min))
        .collect()
}

/// Buckets computed the slow way: a hash map keyed by the quantized value, sorted afterwards.
pub fn plain_buckets(data: &[f64]) -> Vec<Bucket> {
    let mut counter = HashMap::<LpFloat, u64>::new();
    for &value in data {
        *counter.entry(LpFloat::from(value)).or_insert(0) += 1;
    }
    let mut buckets = counter
        .into_iter()
        .map(|(value, count)| Bucket::new(value, count))
        .collect::<Vec<_>>();
    buckets.sort_by(|a, b| a.value.to_f64().partial_cmp(&b.value.to_f64()).unwrap());
    buckets
}

/// Summary computed from `plain_buckets`, with the sum taken in insertion order.
pub fn plain_summary(data: &[f64], percentiles: &Percentiles) -> Summary {
    let mut summary = Summary::empty(percentiles);
    if data.is_empty() {
        return summary;
    }
    let buckets = plain_buckets(data);
    let sum = data.iter().sum::<f64>();
    summary.total = data.len() as u64;
    summary.sum = LpFloat::from(sum);
    summary.avg = LpFloat::from(sum / data.len() as f64);
    summary.min = buckets[0].value;
    summary.max = buckets[buckets.len() - 1].value;

    let mut idx = 0;
    let mut cumulative = 0_u64;
    for bucket in buckets.iter() {
        cumulative += bucket.count;
        while idx < percentiles.len() && cumulative as f64 * 100.0 >= summary.total as f64 * percentiles[idx] {
            summary.percentiles[idx].threshold = bucket.value;
            idx += 1;
        }
    }
    summary
}
