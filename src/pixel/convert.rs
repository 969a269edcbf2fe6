//! Conversions between [`ColorRecord`] and a format's [`EncodedPixel`].

use crate::foundation::core::{AlphaWeight, ColorRecord, EncodedPixel};
use crate::foundation::math::expand_channel;
use crate::pixel::format::{ChannelLayout, PixelFormat};

fn pack(ch: ChannelLayout, v: u8) -> u32 {
    if !ch.is_present() {
        return 0;
    }
    ((u32::from(v) >> ch.loss) << ch.shift) & ch.mask
}

fn unpack(ch: ChannelLayout, pixel: u32) -> u8 {
    expand_channel((pixel & ch.mask) >> ch.shift, ch.loss)
}

/// Pack `color` into `format`.
///
/// Channels the format does not store (alpha on most formats) are dropped. Indexed formats
/// resolve to the nearest palette entry, ignoring alpha.
pub fn encode(format: &PixelFormat, color: ColorRecord) -> EncodedPixel {
    if let Some(palette) = format.palette() {
        return EncodedPixel(u32::from(palette.nearest_index(color)));
    }
    EncodedPixel(
        pack(format.red(), color.r)
            | pack(format.green(), color.g)
            | pack(format.blue(), color.b)
            | pack(format.alpha(), color.a),
    )
}

/// Unpack `pixel` from `format`, expanding reduced-precision channels to 0..=255.
///
/// Formats without alpha decode as fully opaque.
pub fn decode(format: &PixelFormat, pixel: EncodedPixel) -> ColorRecord {
    if let Some(palette) = format.palette() {
        return palette.get(pixel.0 as u8).with_alpha(255);
    }
    let a = if format.has_alpha() {
        unpack(format.alpha(), pixel.0)
    } else {
        255
    };
    ColorRecord::rgba(
        unpack(format.red(), pixel.0),
        unpack(format.green(), pixel.0),
        unpack(format.blue(), pixel.0),
        a,
    )
}

/// A color encoded once for one target format, plus the alpha used to composite it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paint {
    pub pixel: EncodedPixel,
    pub alpha: AlphaWeight,
}

impl Paint {
    pub fn new(pixel: EncodedPixel, alpha: AlphaWeight) -> Self {
        Self { pixel, alpha }
    }

    pub fn from_color(format: &PixelFormat, color: ColorRecord) -> Self {
        Self {
            pixel: encode(format, color),
            alpha: color.a,
        }
    }

    pub fn is_opaque(self) -> bool {
        self.alpha == 255
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/convert.rs"]
mod tests;
