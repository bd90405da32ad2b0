use crate::concurrent::atomic_layer::AtomicLayer;
use crate::core::layer::{self, Layer};
use crate::core::summary::summarize;
use crate::core::*;
use crate::iteration::BucketIterator;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// Low precision buckets that any number of threads can record into through a shared reference.
///
/// The layer list sits behind a reader-writer lock. Recording into a layer that already exists only takes the
/// shared side and bumps atomics, so concurrent writers do not serialize on each other. Only the first sample of a
/// new sign+exponent takes the exclusive side to grow and re-sort the list.
///
/// Reporting (`range`, `reverse_range`, `buckets`, `summary`) and `reset` hold the exclusive side for their whole
/// run. They see no half-applied insert and block writers until they return. The visitor passed to `range` runs
/// under that lock and must not call back into the same instance.
pub struct SyncBuckets {
    layers: RwLock<Vec<AtomicLayer>>,
    total: AtomicU64,
}

impl SyncBuckets {
    pub fn new() -> SyncBuckets {
        SyncBuckets {
            layers: RwLock::new(Vec::new()),
            total: AtomicU64::new(0),
        }
    }

    #[inline(always)]
    pub fn record(&self, value: f64) {
        self.record_n(value, 1)
    }

    #[inline]
    pub fn record_n(&self, value: f64, count: u64) {
        let lp = LpFloat::from(value);
        {
            let layers = self.layers.read();
            if let Some(idx) = layer::position_of(layers.as_slice(), lp.sign_exp()) {
                // total first: lock-free readers must never see it below the bucket counts
                self.total.fetch_add(count, Ordering::Relaxed);
                layers[idx].add(lp.fraction(), value, count);
                return;
            }
        }
        self.record_cold(lp, value, count)
    }

    #[inline(never)]
    fn record_cold(&self, lp: LpFloat, value: f64, count: u64) {
        let mut layers = self.layers.write();
        // another writer may have created the layer while we waited for the lock
        let idx = match layer::position_of(layers.as_slice(), lp.sign_exp()) {
            Some(idx) => idx,
            None => {
                layers.push(AtomicLayer::new(lp.sign_exp()));
                layer::sort_layers(layers.as_mut_slice());
                trace!(sign_exp = lp.sign_exp(), layers = layers.len(), "Created bucket layer.");
                match layer::position_of(layers.as_slice(), lp.sign_exp()) {
                    Some(idx) => idx,
                    None => unreachable!("layer {:#05x} vanished while sorting", lp.sign_exp()),
                }
            }
        };
        self.total.fetch_add(count, Ordering::Relaxed);
        layers[idx].add(lp.fraction(), value, count);
    }

    pub fn erase(&self, value: f64) {
        self.erase_n(value, 1)
    }

    pub fn erase_n(&self, value: f64, count: u64) {
        let lp = LpFloat::from(value);
        let layers = self.layers.read();
        if let Some(idx) = layer::position_of(layers.as_slice(), lp.sign_exp()) {
            if layers[idx].subtract(lp.fraction(), value, count) {
                self.total.fetch_sub(count, Ordering::Relaxed);
            }
        }
    }

    pub fn get_total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn get_sum(&self) -> f64 {
        self.layers.read().iter().map(|layer| layer.sum()).sum()
    }

    pub fn get_count(&self, value: f64) -> u64 {
        let lp = LpFloat::from(value);
        let layers = self.layers.read();
        layer::position_of(layers.as_slice(), lp.sign_exp())
            .map(|idx| layers[idx].count_at(lp.fraction()))
            .unwrap_or(0)
    }

    pub fn visit<F: FnMut(Bucket)>(&self, visit: F) {
        let layers = self.layers.write();
        BucketIterator::new(layers.as_slice()).for_each(visit)
    }

    pub fn visit_rev<F: FnMut(Bucket)>(&self, visit: F) {
        let layers = self.layers.write();
        BucketIterator::new(layers.as_slice()).rev().for_each(visit)
    }

    pub fn get_summary(&self, percentiles: &Percentiles) -> Summary {
        let layers = self.layers.write();
        let sum = layers.iter().map(|layer| layer.sum()).sum();
        let total = self.total.load(Ordering::Relaxed);
        summarize(BucketIterator::new(layers.as_slice()), total, sum, percentiles)
    }

    /// Zeroes every counter under the exclusive lock. Layers stay allocated.
    pub fn clear(&self) {
        let mut layers = self.layers.write();
        for layer in layers.iter_mut() {
            layer.clear();
        }
        self.total.store(0, Ordering::Relaxed);
        debug!(layers = layers.len(), "Reset low precision buckets.");
    }

    /// Number of allocated sign+exponent layers. Reset keeps them, so this never shrinks.
    pub fn layer_count(&self) -> usize {
        self.layers.read().len()
    }
}

impl Default for SyncBuckets {
    fn default() -> SyncBuckets {
        SyncBuckets::new()
    }
}

impl fmt::Debug for SyncBuckets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SyncBuckets")
            .field("total", &self.get_total())
            .field("layers", &self.layer_count())
            .finish()
    }
}

impl ReadableBuckets for SyncBuckets {
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
        self.visit(visit)
    }
    fn reverse_range<F: FnMut(Bucket)>(&self, visit: F) {
        self.visit_rev(visit)
    }
    fn summary(&self, percentiles: &Percentiles) -> Summary {
        self.get_summary(percentiles)
    }
}

impl RecordableBuckets for SyncBuckets {
    type Count = u64;

    fn insert_n(&mut self, value: f64, count: u64) {
        self.record_n(value, count)
    }
    fn remove_n(&mut self, value: f64, count: u64) {
        self.erase_n(value, count)
    }
    fn reset(&mut self) {
        self.clear()
    }
}
