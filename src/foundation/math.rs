#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// `dst + ((src - dst) * alpha) >> 8` on unsigned channel values of any width up to 8 bits.
///
/// The shift is arithmetic, so negative differences round toward negative infinity. Alpha 0
/// returns `dst` unchanged; alpha 255 does not always return `src`.
pub(crate) fn blend_channel(dst: u32, src: u32, alpha: u8) -> u32 {
    let d = dst as i32;
    let s = src as i32;
    (d + (((s - d) * i32::from(alpha)) >> 8)) as u32
}

/// Expand a channel stored with `loss` low bits dropped back to the full 0..=255 range.
pub(crate) fn expand_channel(v: u32, loss: u8) -> u8 {
    if loss == 0 {
        return v as u8;
    }
    if loss >= 8 {
        return 0;
    }
    let max = (1u32 << (8 - loss)) - 1;
    ((v * 255 + max / 2) / max) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
