pub const F64_SIGN_EXP_MASK: u64 = 0xfff0_0000_0000_0000;
pub const F64_FRACTION_MASK: u64 = 0x000f_f000_0000_0000;

pub const SIGN_EXP_SHIFT: u32 = 52;
pub const FRACTION_SHIFT: u32 = 44;

pub const SIGN_EXP_FIELD_MASK: u16 = 0x0fff;
pub const SIGN_EXP_SIGN_BIT: u16 = 0x0800;

/// Sub-buckets per layer, one for every value of the truncated mantissa byte.
pub const FRACTIONS_PER_LAYER: usize = 256;

/// Largest relative error introduced by the codec, 2^-8.
pub const QUANTIZATION_STEP: f64 = 1.0 / 256.0;

pub const DEFAULT_PERCENTILES: [f64; 6] = [50.0, 80.0, 90.0, 95.0, 99.0, 99.9];
