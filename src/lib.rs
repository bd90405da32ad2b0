//! Low precision float buckets.
//!
//! Running count, sum, average, min, max and percentiles over a stream of `f64` samples without keeping the samples.
//! Every sample is truncated to an [`LpFloat`] (sign, exponent and the top eight mantissa bits) before it is counted,
//! which bounds the relative error of every reported value by 2^-8 and the memory by the number of distinct
//! sign+exponent combinations.
//!
//! [`UnsyncBuckets`] is the single-threaded engine. [`SyncBuckets`] offers the same operations through `&self` and
//! can be shared between threads. Both implement [`ReadableBuckets`] and [`RecordableBuckets`].
//!
//! ```
//! use lpfloat::{Percentiles, ReadableBuckets, UnsyncBuckets};
//!
//! let mut buckets = UnsyncBuckets::<u64>::new();
//! buckets.extend(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0]);
//!
//! let summary = buckets.summary(&Percentiles::new(vec![50.0]).unwrap());
//! assert_eq!(summary.total, 7);
//! assert_eq!(summary.percentiles[0].threshold.to_f64(), 3.0);
//! ```
mod core;
pub mod concurrent;
pub mod iteration;
pub mod st;

pub use crate::concurrent::SyncBuckets;
pub use crate::core::constants::{DEFAULT_PERCENTILES, QUANTIZATION_STEP};
pub use crate::core::*;
pub use crate::st::UnsyncBuckets;

#[cfg(test)]
mod tests;
