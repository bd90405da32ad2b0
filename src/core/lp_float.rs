use crate::core::constants::*;
use std::cmp::Ordering;
use std::fmt;

/// Low precision float.
///
/// Keeps the sign and exponent of an `f64` untouched and truncates the mantissa to its top eight bits, so every
/// value is within one part in 256 of the double it was built from. It is a plain `Copy` value with structural
/// equality, which makes it usable as a map or counter key.
///
/// `0`, `-0`, both infinities and the canonical NaN (`f64::NAN`) survive a round trip bit for bit. Other NaN
/// payloads keep their top eight payload bits only.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LpFloat {
    sign_exp: u16,
    fraction: u8,
}

impl LpFloat {
    pub const ZERO: LpFloat = LpFloat::compose(0x000, 0x00);
    pub const ONE: LpFloat = LpFloat::compose(0x3ff, 0x00);
    pub const NAN: LpFloat = LpFloat::compose(0x7ff, 0x80);
    pub const INFINITY: LpFloat = LpFloat::compose(0x7ff, 0x00);
    pub const NEG_INFINITY: LpFloat = LpFloat::compose(0xfff, 0x00);

    #[inline(always)]
    pub fn from_f64(value: f64) -> LpFloat {
        let bits = value.to_bits();
        LpFloat {
            sign_exp: ((bits & F64_SIGN_EXP_MASK) >> SIGN_EXP_SHIFT) as u16,
            fraction: ((bits & F64_FRACTION_MASK) >> FRACTION_SHIFT) as u8,
        }
    }

    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        let bits = ((self.sign_exp as u64) << SIGN_EXP_SHIFT) | ((self.fraction as u64) << FRACTION_SHIFT);
        f64::from_bits(bits)
    }

    /// Builds a value from its raw fields. Only the low 12 bits of `sign_exp` are kept.
    #[inline(always)]
    pub const fn compose(sign_exp: u16, fraction: u8) -> LpFloat {
        LpFloat {
            sign_exp: sign_exp & SIGN_EXP_FIELD_MASK,
            fraction,
        }
    }

    /// Positive infinity for `sign >= 0`, negative infinity otherwise.
    pub fn inf(sign: i32) -> LpFloat {
        if sign >= 0 {
            LpFloat::INFINITY
        } else {
            LpFloat::NEG_INFINITY
        }
    }

    #[inline(always)]
    pub const fn sign_exp(self) -> u16 {
        self.sign_exp
    }

    #[inline(always)]
    pub const fn fraction(self) -> u8 {
        self.fraction
    }

    #[inline(always)]
    pub const fn is_sign_negative(self) -> bool {
        self.sign_exp & SIGN_EXP_SIGN_BIT != 0
    }

    pub fn is_nan(self) -> bool {
        self.to_f64().is_nan()
    }

    /// Whether `self` and `other` are within one quantization step of each other.
    pub fn almost_eq(self, other: LpFloat) -> bool {
        almost_eq(self.to_f64(), other.to_f64())
    }

    /// Whether `self` is within one quantization step of the full precision `value`.
    pub fn almost_eq_f64(self, value: f64) -> bool {
        almost_eq(self.to_f64(), value)
    }
}

fn almost_eq(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let magnitude = a.abs().max(b.abs());
    (a - b).abs() <= magnitude * QUANTIZATION_STEP
}

impl From<f64> for LpFloat {
    #[inline(always)]
    fn from(value: f64) -> LpFloat {
        LpFloat::from_f64(value)
    }
}

impl From<LpFloat> for f64 {
    #[inline(always)]
    fn from(value: LpFloat) -> f64 {
        value.to_f64()
    }
}

impl Default for LpFloat {
    fn default() -> LpFloat {
        LpFloat::ZERO
    }
}

// ascending by decoded value; -NaN sorts below -inf and NaN above +inf
impl Ord for LpFloat {
    fn cmp(&self, other: &LpFloat) -> Ordering {
        self.to_f64().total_cmp(&other.to_f64())
    }
}

impl PartialOrd for LpFloat {
    fn partial_cmp(&self, other: &LpFloat) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! forward_fmt {
    ($($t:ident),*) => {
        $(
            impl fmt::$t for LpFloat {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    fmt::$t::fmt(&self.to_f64(), f)
                }
            }
        )*
    };
}

forward_fmt!(Display, Debug, LowerExp, UpperExp);

#[cfg(feature = "serde")]
impl serde::Serialize for LpFloat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LpFloat {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<LpFloat, D::Error> {
        let value = <f64 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(LpFloat::from_f64(value))
    }
}
