use crate::core::constants::DEFAULT_PERCENTILES;
use crate::core::errors::*;
use std::convert::TryFrom;
use std::ops::Deref;
use tracing::debug;

/// Ascending list of percentiles, every one strictly inside (0, 100).
///
/// Validation happens once, on construction, so a `Percentiles` handed to a summary is always usable. An empty list
/// is valid and produces a summary without percentile thresholds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Percentiles(Vec<f64>);

impl Percentiles {
    /// Sorts `percentiles` ascending and validates them. Out of range values, NaN included, are rejected rather than
    /// clamped or dropped.
    pub fn new(mut percentiles: Vec<f64>) -> Result<Percentiles, PercentilesError> {
        check_percentiles(&mut percentiles)?;
        Ok(Percentiles(percentiles))
    }

    pub fn none() -> Percentiles {
        Percentiles(Vec::new())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Default for Percentiles {
    fn default() -> Percentiles {
        Percentiles(DEFAULT_PERCENTILES.to_vec())
    }
}

impl Deref for Percentiles {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Percentiles {
    type Error = PercentilesError;
    fn try_from(percentiles: Vec<f64>) -> Result<Percentiles, PercentilesError> {
        Percentiles::new(percentiles)
    }
}

impl<'a> TryFrom<&'a [f64]> for Percentiles {
    type Error = PercentilesError;
    fn try_from(percentiles: &'a [f64]) -> Result<Percentiles, PercentilesError> {
        Percentiles::new(percentiles.to_vec())
    }
}

impl From<Percentiles> for Vec<f64> {
    fn from(percentiles: Percentiles) -> Vec<f64> {
        percentiles.0
    }
}

/// Sorts `cfg` in place and checks that every entry is strictly inside (0, 100).
pub fn check_percentiles(cfg: &mut [f64]) -> Result<(), PercentilesError> {
    cfg.sort_by(|a, b| a.total_cmp(b));
    for &percentile in cfg.iter() {
        if !(percentile > 0.0 && percentile < 100.0) {
            debug!(percentile, "Rejected percentile configuration.");
            return OutOfRangeSnafu { percentile }.fail();
        }
    }
    Ok(())
}
