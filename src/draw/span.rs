use crate::foundation::core::EncodedPixel;
use crate::foundation::error::SoftpixResult;
use crate::pixel::io::pixel_io;
use crate::surface::buffer::PixelBuffer;

fn encoded_bytes(buf: &PixelBuffer<'_>, pixel: EncodedPixel) -> ([u8; 4], usize) {
    let format = buf.format();
    let bpp = format.bytes_per_pixel();
    let mut px = [0u8; 4];
    (pixel_io(bpp).store)(&mut px[..bpp.get()], format.byte_order(), pixel.0);
    (px, bpp.get())
}

/// Store `pixel` from `x1` to `x2` inclusive on row `y`, in either order.
///
/// The run is trimmed to the clip rectangle; a run entirely outside it is a successful no-op.
/// The surface is locked once for the whole run. Values are stored, never blended.
pub fn hspan(
    buf: &mut PixelBuffer<'_>,
    x1: i32,
    x2: i32,
    y: i32,
    pixel: EncodedPixel,
) -> SoftpixResult<()> {
    let Some((a, b)) = buf.clip().clip_hspan(x1, x2, y) else {
        return Ok(());
    };
    buf.locked(|buf| store_hrun(buf, a, b, y, pixel))
}

/// Store `pixel` from `y1` to `y2` inclusive on column `x`, in either order.
pub fn vspan(
    buf: &mut PixelBuffer<'_>,
    x: i32,
    y1: i32,
    y2: i32,
    pixel: EncodedPixel,
) -> SoftpixResult<()> {
    let Some((a, b)) = buf.clip().clip_vspan(x, y1, y2) else {
        return Ok(());
    };
    buf.locked(|buf| store_vrun(buf, x, a, b, pixel))
}

/// Unclipped, unlocked horizontal store with `a <= b`.
pub(crate) fn store_hrun(buf: &mut PixelBuffer<'_>, a: i32, b: i32, y: i32, pixel: EncodedPixel) {
    let (px, bpp) = encoded_bytes(buf, pixel);
    let (Some(start), Some(last)) = (buf.offset(a, y), buf.offset(b, y)) else {
        tracing::error!(a, b, y, "span outside the buffer, write dropped");
        return;
    };
    if let Some(row) = buf.bytes_mut(start..last + bpp) {
        for dst in row.chunks_exact_mut(bpp) {
            dst.copy_from_slice(&px[..bpp]);
        }
    }
}

/// Unclipped, unlocked vertical store with `a <= b`.
pub(crate) fn store_vrun(buf: &mut PixelBuffer<'_>, x: i32, a: i32, b: i32, pixel: EncodedPixel) {
    let (px, bpp) = encoded_bytes(buf, pixel);
    let (Some(start), Some(_)) = (buf.offset(x, a), buf.offset(x, b)) else {
        tracing::error!(x, a, b, "span outside the buffer, write dropped");
        return;
    };
    let pitch = buf.pitch();
    for i in 0..=(b - a) as usize {
        let off = start + i * pitch;
        if let Some(dst) = buf.bytes_mut(off..off + bpp) {
            dst.copy_from_slice(&px[..bpp]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/span.rs"]
mod tests;
