use crate::core::{Bucket, LpFloat, Percentiles};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentilePair {
    pub percentile: f64,
    /// Smallest bucket value at or below which `percentile` percent of the samples fall.
    pub threshold: LpFloat,
}

/// Point-in-time aggregate over every sample an engine has seen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub total: u64,
    pub sum: LpFloat,
    pub avg: LpFloat,
    pub min: LpFloat,
    pub max: LpFloat,
    pub percentiles: Vec<PercentilePair>,
}

impl Summary {
    /// Summary of no samples: zero sum, NaN everywhere else.
    pub fn empty(percentiles: &Percentiles) -> Summary {
        Summary {
            total: 0,
            sum: LpFloat::ZERO,
            avg: LpFloat::NAN,
            min: LpFloat::NAN,
            max: LpFloat::NAN,
            percentiles: percentiles
                .iter()
                .map(|&percentile| PercentilePair {
                    percentile,
                    threshold: LpFloat::NAN,
                })
                .collect(),
        }
    }

    pub fn percentile(&self, percentile: f64) -> Option<LpFloat> {
        self.percentiles
            .iter()
            .find(|pair| pair.percentile == percentile)
            .map(|pair| pair.threshold)
    }
}

/// Builds a summary in one ascending pass over `buckets`.
///
/// `buckets` must yield every non-empty bucket in ascending value order and their counts must add up to `total`.
/// Thresholds follow the nearest-rank definition: a percentile `p` resolves to the first bucket at which the
/// cumulative count `c` satisfies `c * 100 >= total * p`.
pub(crate) fn summarize<I>(buckets: I, total: u64, sum: f64, percentiles: &Percentiles) -> Summary
where
    I: IntoIterator<Item = Bucket>,
{
    let mut summary = Summary::empty(percentiles);
    if total == 0 {
        return summary;
    }

    let mut cumulative = 0_u64;
    let mut next_percentile = 0;
    for bucket in buckets {
        if cumulative == 0 {
            summary.min = bucket.value;
        }
        cumulative += bucket.count;
        if cumulative == total {
            summary.max = bucket.value;
        }
        while next_percentile < percentiles.len()
            && cumulative as f64 * 100.0 >= total as f64 * percentiles[next_percentile]
        {
            summary.percentiles[next_percentile].threshold = bucket.value;
            next_percentile += 1;
        }
    }
    debug_assert_eq!(cumulative, total, "bucket counts disagree with the running total");

    summary.total = cumulative;
    summary.sum = LpFloat::from(sum);
    summary.avg = LpFloat::from(sum / cumulative as f64);
    summary
}

impl fmt::Display for PercentilePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}: ", self.percentile)?;
        fmt::Display::fmt(&self.threshold, f)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "Summary{{Total: {}, Sum: {:.p$}, Avg: {:.p$}, Max: {:.p$}, Min: {:.p$}, Percentiles: [",
                self.total,
                self.sum,
                self.avg,
                self.max,
                self.min,
                p = p
            )?,
            None => write!(
                f,
                "Summary{{Total: {}, Sum: {}, Avg: {}, Max: {}, Min: {}, Percentiles: [",
                self.total, self.sum, self.avg, self.max, self.min
            )?,
        }
        for (i, pair) in self.percentiles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.p$}", pair, p = p)?,
                None => write!(f, "{}", pair)?,
            }
        }
        f.write_str("]}")
    }
}
