use crate::core::LpFloat;

/// Counters shared by one sign+exponent combination, one per fraction byte.
pub trait Layer {
    fn sign_exp(&self) -> u16;
    fn count_at(&self, fraction: u8) -> u64;

    /// Decoded value of the layer's smallest magnitude, used only to order layers.
    #[inline]
    fn unit(&self) -> f64 {
        LpFloat::compose(self.sign_exp(), 0).to_f64()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        LpFloat::compose(self.sign_exp(), 0).is_sign_negative()
    }
}

/// Orders layers ascending by unit. `-0` sorts before `+0`, the only units that compare equal as floats.
pub fn sort_layers<L: Layer>(layers: &mut [L]) {
    layers.sort_by(|a, b| a.unit().total_cmp(&b.unit()));
}

pub fn position_of<L: Layer>(layers: &[L], sign_exp: u16) -> Option<usize> {
    layers.iter().position(|layer| layer.sign_exp() == sign_exp)
}
