use crate::core::layer::{self, Layer};
use crate::core::summary::summarize;
use crate::core::*;
use crate::iteration::BucketIterator;
use crate::st::counts_layer::CountsLayer;
use tracing::{debug, trace, warn};

/// Single-threaded low precision buckets.
///
/// Samples are quantized with [`LpFloat`] and counted per sign+exponent layer, so memory grows with the number of
/// distinct exponents seen rather than with the number of samples. Layers are looked up with a linear scan, which
/// is cheap for the few dozen layers real data tends to produce.
///
/// `T` is the per-bucket counter width; `u32` halves the layer size. An insert that would overflow a bucket is
/// dropped with a warning instead of wrapping.
pub struct UnsyncBuckets<T: Counter = u64> {
    layers: Vec<CountsLayer<T>>,
    total: u64,
}

// read methods
impl<T: Counter> UnsyncBuckets<T> {
    pub fn get_total(&self) -> u64 {
        self.total
    }

    pub fn get_sum(&self) -> f64 {
        self.layers.iter().map(|layer| layer.sum).sum()
    }

    pub fn get_count(&self, value: f64) -> u64 {
        let lp = LpFloat::from(value);
        layer::position_of(self.layers.as_slice(), lp.sign_exp())
            .map(|idx| self.layers[idx].count_at(lp.fraction()))
            .unwrap_or(0)
    }

    /// Non-empty buckets in ascending value order. Use `.rev()` for descending order.
    pub fn iter(&self) -> BucketIterator<'_, CountsLayer<T>> {
        BucketIterator::new(self.layers.as_slice())
    }

    pub fn get_summary(&self, percentiles: &Percentiles) -> Summary {
        summarize(self.iter(), self.total, self.get_sum(), percentiles)
    }

    /// Number of allocated sign+exponent layers. Reset keeps them, so this never shrinks.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

// write methods
impl<T: Counter> UnsyncBuckets<T> {
    pub fn new() -> UnsyncBuckets<T> {
        UnsyncBuckets {
            layers: Vec::new(),
            total: 0,
        }
    }

    #[inline(always)]
    pub fn record(&mut self, value: f64) {
        self.record_n(value, T::one())
    }

    #[inline]
    pub fn record_n(&mut self, value: f64, count: T) {
        let lp = LpFloat::from(value);
        let idx = match layer::position_of(self.layers.as_slice(), lp.sign_exp()) {
            Some(idx) => idx,
            None => self.create_layer(lp.sign_exp()),
        };
        if self.layers[idx].add(lp.fraction(), value, count) {
            self.total += count.as_u64();
        } else {
            warn!(
                value,
                count = count.as_u64(),
                headroom = self.layers[idx].headroom_at(lp.fraction()),
                "Bucket counter would overflow, dropping samples."
            );
        }
    }

    pub fn erase(&mut self, value: f64) {
        self.erase_n(value, T::one())
    }

    pub fn erase_n(&mut self, value: f64, count: T) {
        let lp = LpFloat::from(value);
        if let Some(idx) = layer::position_of(self.layers.as_slice(), lp.sign_exp()) {
            if self.layers[idx].subtract(lp.fraction(), value, count) {
                self.total -= count.as_u64();
            }
        }
    }

    /// Zeroes every counter. Layers stay allocated, so values seen before the reset are recorded without another
    /// cold path.
    pub fn clear(&mut self) {
        for layer in self.layers.iter_mut() {
            layer.clear();
        }
        self.total = 0;
        debug!(layers = self.layers.len(), "Reset low precision buckets.");
    }

    #[inline(never)]
    fn create_layer(&mut self, sign_exp: u16) -> usize {
        self.layers.push(CountsLayer::new(sign_exp));
        layer::sort_layers(self.layers.as_mut_slice());
        trace!(sign_exp, layers = self.layers.len(), "Created bucket layer.");
        match layer::position_of(self.layers.as_slice(), sign_exp) {
            Some(idx) => idx,
            None => unreachable!("layer {:#05x} vanished while sorting", sign_exp),
        }
    }
}

impl<T: Counter> Default for UnsyncBuckets<T> {
    fn default() -> UnsyncBuckets<T> {
        UnsyncBuckets::new()
    }
}

impl<T: Counter> Extend<f64> for UnsyncBuckets<T> {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.record(value);
        }
    }
}

impl<T: Counter> ReadableBuckets for UnsyncBuckets<T> {
    fn total(&self) -> u64 {
        self.get_total()
    }
    fn sum(&self) -> f64 {
        self.get_sum()
    }
    fn count(&self, value: f64) -> u64 {
        self.get_count(value)
    }
    fn range<F: FnMut(Bucket)>(&self, visit: F) {
        self.iter().for_each(visit)
    }
    fn reverse_range<F: FnMut(Bucket)>(&self, visit: F) {
        self.iter().rev().for_each(visit)
    }
    fn summary(&self, percentiles: &Percentiles) -> Summary {
        self.get_summary(percentiles)
    }
}

impl<T: Counter> RecordableBuckets for UnsyncBuckets<T> {
    type Count = T;

    fn insert_n(&mut self, value: f64, count: T) {
        self.record_n(value, count)
    }
    fn remove_n(&mut self, value: f64, count: T) {
        self.erase_n(value, count)
    }
    fn reset(&mut self) {
        self.clear()
    }
}
