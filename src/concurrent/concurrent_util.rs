use std::sync::atomic::{AtomicU64, Ordering};

/// Adds `delta` to the `f64` whose bit pattern lives in `target`, retrying until no other writer interferes.
#[inline(always)]
pub fn add_f64(target: &AtomicU64, delta: f64) {
    let mut sampled = target.load(Ordering::Relaxed);
    loop {
        let updated = (f64::from_bits(sampled) + delta).to_bits();
        match target.compare_exchange_weak(sampled, updated, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(actual) => sampled = actual,
        }
    }
}

#[inline(always)]
pub fn load_f64(source: &AtomicU64) -> f64 {
    f64::from_bits(source.load(Ordering::Relaxed))
}

/// Subtracts `count` from `target` unless that would take it below zero. Returns whether it subtracted.
#[inline(always)]
pub fn sub_if_at_least(target: &AtomicU64, count: u64) -> bool {
    let mut sampled = target.load(Ordering::Relaxed);
    while sampled >= count {
        match target.compare_exchange_weak(sampled, sampled - count, Ordering::Acquire, Ordering::Relaxed) {
            Ok(_) => return true,
            Err(actual) => sampled = actual,
        }
    }
    false
}
