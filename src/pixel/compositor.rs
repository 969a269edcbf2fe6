//! Single-pixel read, store and alpha compositing for every byte width.

use crate::foundation::core::{AlphaWeight, ColorRecord, EncodedPixel};
use crate::foundation::error::SoftpixResult;
use crate::foundation::math::blend_channel;
use crate::pixel::convert::{decode, encode};
use crate::pixel::format::{BytesPerPixel, PixelFormat};
use crate::pixel::io::byte_index3;
use crate::surface::buffer::PixelBuffer;

/// How [`put_pixel`] treats one write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PutOptions {
    /// Composite with the destination using the alpha weight instead of storing.
    pub blend: bool,
    /// Drop pixels outside the buffer's clip rectangle.
    pub clip: bool,
    /// Take the buffer's lock around the write.
    pub auto_lock: bool,
}

impl Default for PutOptions {
    fn default() -> Self {
        Self {
            blend: true,
            clip: true,
            auto_lock: false,
        }
    }
}

impl PutOptions {
    /// Plain clipped store: the alpha weight is ignored.
    pub const STORE: Self = Self {
        blend: false,
        clip: true,
        auto_lock: false,
    };

    pub fn with_auto_lock(self) -> Self {
        Self {
            auto_lock: true,
            ..self
        }
    }
}

/// Write one pixel.
///
/// With `clip` set, pixels outside the clip rectangle are dropped silently. Without it the
/// coordinate is still checked against the buffer dimensions, and an out-of-range write is
/// logged and dropped. Alpha 255 (or `blend` off) stores `pixel` unchanged; alpha 0 leaves the
/// destination as it is. The only error is a failed lock when `auto_lock` is set.
pub fn put_pixel(
    buf: &mut PixelBuffer<'_>,
    x: i32,
    y: i32,
    pixel: EncodedPixel,
    alpha: AlphaWeight,
    opts: PutOptions,
) -> SoftpixResult<()> {
    if opts.clip && !buf.clip().contains(x, y) {
        tracing::trace!(x, y, "pixel clipped out");
        return Ok(());
    }
    if opts.auto_lock {
        buf.locked(|buf| composite(buf, x, y, pixel, alpha, opts.blend))
    } else {
        composite(buf, x, y, pixel, alpha, opts.blend);
        Ok(())
    }
}

/// Read the encoded pixel at `(x, y)`, ignoring the clip rectangle.
pub fn get_pixel(buf: &PixelBuffer<'_>, x: i32, y: i32) -> Option<EncodedPixel> {
    buf.offset(x, y).and_then(|off| buf.load(off))
}

pub fn get_color(buf: &PixelBuffer<'_>, x: i32, y: i32) -> Option<ColorRecord> {
    get_pixel(buf, x, y).map(|p| decode(buf.format(), p))
}

/// Encode `color` for the buffer and put it with the color's own alpha.
pub fn put_color(
    buf: &mut PixelBuffer<'_>,
    x: i32,
    y: i32,
    color: ColorRecord,
    opts: PutOptions,
) -> SoftpixResult<()> {
    let pixel = encode(buf.format(), color);
    put_pixel(buf, x, y, pixel, color.a, opts)
}

/// Clipped, blended, unlocked write used inside already-locked primitives.
pub(crate) fn blend_clipped(
    buf: &mut PixelBuffer<'_>,
    x: i32,
    y: i32,
    pixel: EncodedPixel,
    alpha: AlphaWeight,
) {
    if buf.clip().contains(x, y) {
        composite(buf, x, y, pixel, alpha, true);
    }
}

/// Unclipped, unlocked write. Callers have already done both checks.
pub(crate) fn composite(
    buf: &mut PixelBuffer<'_>,
    x: i32,
    y: i32,
    pixel: EncodedPixel,
    alpha: AlphaWeight,
    blend: bool,
) {
    let Some(off) = buf.offset(x, y) else {
        tracing::error!(x, y, "pixel outside the buffer, write dropped");
        return;
    };

    if !blend || alpha == 255 {
        buf.store(off, pixel);
        return;
    }
    if alpha == 0 {
        return;
    }

    let format = buf.format();
    match format.bytes_per_pixel() {
        BytesPerPixel::One | BytesPerPixel::Two | BytesPerPixel::Four => {
            let Some(dst) = buf.load(off) else {
                return;
            };
            let out = if format.is_indexed() {
                blend_indexed(format, dst, pixel, alpha)
            } else {
                Some(blend_packed(format, dst, pixel, alpha))
            };
            if let Some(out) = out {
                buf.store(off, out);
            }
        }
        BytesPerPixel::Three => blend_bytes3(buf, off, pixel, alpha),
    }
}

fn blend_indexed(
    format: &PixelFormat,
    dst: EncodedPixel,
    src: EncodedPixel,
    alpha: AlphaWeight,
) -> Option<EncodedPixel> {
    let Some(palette) = format.palette() else {
        tracing::error!("indexed format without palette, blend dropped");
        return None;
    };
    let d = palette.get(dst.0 as u8);
    let s = palette.get(src.0 as u8);
    let mixed = ColorRecord::rgb(
        blend_channel(u32::from(d.r), u32::from(s.r), alpha) as u8,
        blend_channel(u32::from(d.g), u32::from(s.g), alpha) as u8,
        blend_channel(u32::from(d.b), u32::from(s.b), alpha) as u8,
    );
    Some(EncodedPixel(u32::from(palette.nearest_index(mixed))))
}

/// Channel-wise blend of two packed pixels. Bits outside every channel mask come out zero.
fn blend_packed(
    format: &PixelFormat,
    dst: EncodedPixel,
    src: EncodedPixel,
    alpha: AlphaWeight,
) -> EncodedPixel {
    let mut out = 0u32;
    for ch in format.channels() {
        if !ch.is_present() {
            continue;
        }
        let d = (dst.0 & ch.mask) >> ch.shift;
        let s = (src.0 & ch.mask) >> ch.shift;
        out |= (blend_channel(d, s, alpha) << ch.shift) & ch.mask;
    }
    EncodedPixel(out)
}

fn blend_bytes3(buf: &mut PixelBuffer<'_>, off: usize, src: EncodedPixel, alpha: AlphaWeight) {
    let format = buf.format();
    let order = format.byte_order();
    let channels = format.channels();
    let Some(px) = buf.bytes_mut(off..off + 3) else {
        return;
    };
    for ch in channels {
        if !ch.is_present() {
            continue;
        }
        let i = byte_index3(ch.shift, order);
        let s = (src.0 >> ch.shift) & 0xff;
        px[i] = blend_channel(u32::from(px[i]), s, alpha) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/compositor.rs"]
mod tests;
