use crate::concurrent::concurrent_util;
use crate::core::constants::FRACTIONS_PER_LAYER;
use crate::core::layer::Layer;
use std::sync::atomic::{AtomicU64, Ordering};

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_COUNT: AtomicU64 = AtomicU64::new(0);

pub struct AtomicLayer {
    sign_exp: u16,
    counts: [AtomicU64; FRACTIONS_PER_LAYER],
    // f64 bits
    sum: AtomicU64,
}

impl AtomicLayer {
    pub(crate) fn new(sign_exp: u16) -> AtomicLayer {
        AtomicLayer {
            sign_exp,
            counts: [EMPTY_COUNT; FRACTIONS_PER_LAYER],
            sum: AtomicU64::new(0.0_f64.to_bits()),
        }
    }

    #[inline(always)]
    pub(crate) fn add(&self, fraction: u8, value: f64, count: u64) {
        // pairs with the acquire in `sub_if_at_least`, so a remover sees the total this insert already bumped
        self.counts[fraction as usize].fetch_add(count, Ordering::Release);
        concurrent_util::add_f64(&self.sum, value * count as f64);
    }

    pub(crate) fn subtract(&self, fraction: u8, value: f64, count: u64) -> bool {
        if !concurrent_util::sub_if_at_least(&self.counts[fraction as usize], count) {
            return false;
        }
        concurrent_util::add_f64(&self.sum, -(value * count as f64));
        true
    }

    pub(crate) fn sum(&self) -> f64 {
        concurrent_util::load_f64(&self.sum)
    }

    pub(crate) fn clear(&mut self) {
        for count in self.counts.iter_mut() {
            *count.get_mut() = 0;
        }
        *self.sum.get_mut() = 0.0_f64.to_bits();
    }
}

impl Layer for AtomicLayer {
    #[inline(always)]
    fn sign_exp(&self) -> u16 {
        self.sign_exp
    }
    #[inline(always)]
    fn count_at(&self, fraction: u8) -> u64 {
        self.counts[fraction as usize].load(Ordering::Relaxed)
    }
}
