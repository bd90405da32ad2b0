use crate::core::constants::FRACTIONS_PER_LAYER;
use crate::core::layer::Layer;
use crate::core::Counter;

pub struct CountsLayer<T> {
    pub(crate) sign_exp: u16,
    pub(crate) counts: [T; FRACTIONS_PER_LAYER],
    pub(crate) sum: f64,
}

impl<T: Counter> CountsLayer<T> {
    pub(crate) fn new(sign_exp: u16) -> CountsLayer<T> {
        CountsLayer {
            sign_exp,
            counts: [T::zero(); FRACTIONS_PER_LAYER],
            sum: 0.0,
        }
    }

    /// Returns false, leaving the layer untouched, when the bucket cannot take `count` more samples.
    pub(crate) fn add(&mut self, fraction: u8, value: f64, count: T) -> bool {
        if !self.counts[fraction as usize].try_add(count) {
            return false;
        }
        self.sum += value * count.as_f64();
        true
    }

    pub(crate) fn headroom_at(&self, fraction: u8) -> u64 {
        self.counts[fraction as usize].headroom()
    }

    /// Returns false, leaving the layer untouched, when the bucket holds fewer than `count` samples.
    pub(crate) fn subtract(&mut self, fraction: u8, value: f64, count: T) -> bool {
        let slot = &mut self.counts[fraction as usize];
        if *slot < count {
            return false;
        }
        *slot -= count;
        self.sum -= value * count.as_f64();
        true
    }

    pub(crate) fn clear(&mut self) {
        self.counts = [T::zero(); FRACTIONS_PER_LAYER];
        self.sum = 0.0;
    }
}

impl<T: Counter> Layer for CountsLayer<T> {
    #[inline(always)]
    fn sign_exp(&self) -> u16 {
        self.sign_exp
    }
    #[inline(always)]
    fn count_at(&self, fraction: u8) -> u64 {
        self.counts[fraction as usize].as_u64()
    }
}
