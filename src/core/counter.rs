use num_traits as num;

/// Per-bucket counter of the unsynchronized engine.
///
/// A bucket never wraps: an insert that would push it past the counter's maximum is refused as a whole, so the
/// bucket counts keep adding up to the engine total. This only matters in practice for `u32`.
pub trait Counter
    : num::Unsigned + num::CheckedAdd + num::Bounded + num::NumAssignOps + PartialOrd<Self> + Copy
    {
    /// Counter as a f64.
    fn as_f64(&self) -> f64;
    /// Counter as a u64.
    fn as_u64(&self) -> u64;

    /// Adds `count` unless the result would overflow. Returns whether it added.
    #[inline(always)]
    fn try_add(&mut self, count: Self) -> bool {
        match self.checked_add(&count) {
            Some(sum) => {
                *self = sum;
                true
            }
            None => false,
        }
    }

    /// Samples this bucket can still take.
    #[inline(always)]
    fn headroom(&self) -> u64 {
        (Self::max_value() - *self).as_u64()
    }
}

impl Counter for u32 {
    #[inline(always)]
    fn as_f64(&self) -> f64 {
        f64::from(*self)
    }
    #[inline(always)]
    fn as_u64(&self) -> u64 {
        u64::from(*self)
    }
}

impl Counter for u64 {
    #[inline(always)]
    fn as_f64(&self) -> f64 {
        *self as f64
    }
    #[inline(always)]
    fn as_u64(&self) -> u64 {
        *self
    }
}
