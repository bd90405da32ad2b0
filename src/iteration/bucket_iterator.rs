use crate::core::constants::FRACTIONS_PER_LAYER;
use crate::core::layer::Layer;
use crate::core::{Bucket, LpFloat};
use std::iter::FusedIterator;

/// Walks the non-empty buckets of a sorted layer list in ascending value order; `next_back` walks them descending.
///
/// Positions run over `layers.len() * 256` slots. Inside a negative layer a larger fraction means a smaller value,
/// so the slot-to-fraction mapping is flipped there.
pub struct BucketIterator<'a, L: 'a> {
    layers: &'a [L],
    front: usize,
    back: usize,
}

impl<'a, L: 'a + Layer> BucketIterator<'a, L> {
    pub fn new(layers: &'a [L]) -> BucketIterator<'a, L> {
        BucketIterator {
            layers,
            front: 0,
            back: layers.len() * FRACTIONS_PER_LAYER,
        }
    }

    #[inline(always)]
    fn bucket_at(&self, position: usize) -> Option<Bucket> {
        let layer = &self.layers[position / FRACTIONS_PER_LAYER];
        let step = (position % FRACTIONS_PER_LAYER) as u8;
        let fraction = if layer.is_negative() { u8::MAX - step } else { step };
        match layer.count_at(fraction) {
            0 => None,
            count => Some(Bucket::new(LpFloat::compose(layer.sign_exp(), fraction), count)),
        }
    }
}

impl<'a, L: 'a + Layer> Iterator for BucketIterator<'a, L> {
    type Item = Bucket;
    fn next(&mut self) -> Option<Bucket> {
        while self.front < self.back {
            let position = self.front;
            self.front += 1;
            if let Some(bucket) = self.bucket_at(position) {
                return Some(bucket);
            }
        }
        None
    }
}

impl<'a, L: 'a + Layer> DoubleEndedIterator for BucketIterator<'a, L> {
    fn next_back(&mut self) -> Option<Bucket> {
        while self.front < self.back {
            self.back -= 1;
            if let Some(bucket) = self.bucket_at(self.back) {
                return Some(bucket);
            }
        }
        None
    }
}

impl<'a, L: 'a + Layer> FusedIterator for BucketIterator<'a, L> {}
