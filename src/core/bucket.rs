use crate::core::LpFloat;

/// A non-empty bucket as seen from outside an engine: a quantized value and how many samples landed on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    pub value: LpFloat,
    pub count: u64,
}

impl Bucket {
    pub fn new(value: LpFloat, count: u64) -> Bucket {
        Bucket { value, count }
    }
}
