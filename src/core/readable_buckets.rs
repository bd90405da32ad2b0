use crate::core::*;
use num_traits::One;

/// Read side shared by both engines.
///
/// Traversal order is ascending decoded value: layers by ascending unit and, inside a layer, fractions in the
/// direction that grows the value (upwards for positive layers, downwards for negative ones).
pub trait ReadableBuckets {
    fn total(&self) -> u64;
    fn sum(&self) -> f64;
    fn count(&self, value: f64) -> u64;
    fn range<F: FnMut(Bucket)>(&self, visit: F);
    fn reverse_range<F: FnMut(Bucket)>(&self, visit: F);
    fn summary(&self, percentiles: &Percentiles) -> Summary;

    fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn buckets(&self) -> Vec<Bucket> {
        let mut buckets = Vec::new();
        self.range(|bucket| buckets.push(bucket));
        buckets
    }

    /// Validates `percentiles` before touching any data, so an invalid request never yields a partial summary.
    fn summary_with(&self, percentiles: &[f64]) -> Result<Summary, PercentilesError> {
        let percentiles = Percentiles::new(percentiles.to_vec())?;
        Ok(self.summary(&percentiles))
    }
}

pub trait RecordableBuckets: ReadableBuckets {
    type Count: Counter;

    fn insert_n(&mut self, value: f64, count: Self::Count);
    /// Takes `count` samples of `value` away. A missing bucket or one holding fewer than `count` samples is left
    /// untouched.
    fn remove_n(&mut self, value: f64, count: Self::Count);
    fn reset(&mut self);

    fn insert(&mut self, value: f64) {
        self.insert_n(value, Self::Count::one())
    }

    fn remove(&mut self, value: f64) {
        self.remove_n(value, Self::Count::one())
    }
}
