use crate::draw::circle::{fill_disc, row_half_width};
use crate::draw::line::draw_line;
use crate::draw::policy::RenderingPolicy;
use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::pixel::compositor::composite;
use crate::pixel::convert::Paint;
use crate::surface::buffer::PixelBuffer;

/// `\` and `/` diagonals of the square of side `edge` centered on `(cx, cy)`.
///
/// Returns whether any part of the cross was inside the clip rectangle.
pub fn draw_cross(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    edge: u32,
    paint: Paint,
    policy: &RenderingPolicy,
) -> SoftpixResult<bool> {
    let half = (edge / 2) as i32;
    let (x1, x2) = (cx.saturating_sub(half), cx.saturating_add(half));
    let (y1, y2) = (cy.saturating_sub(half), cy.saturating_add(half));
    let back = draw_line(buf, x1, y1, x2, y2, paint, policy)?;
    let fwd = draw_line(buf, x1, y2, x2, y1, paint, policy)?;
    Ok(back || fwd)
}

/// Disc of radius `inner` in `disc` paint, surrounded by a ring out to `outer` in `ring` paint.
///
/// When blending a translucent disc, ring and disc pixels are each composited once onto the
/// target, as if the edged disc had been drawn on its own and then blitted.
#[tracing::instrument(level = "trace", skip(buf, ring, disc))]
#[allow(clippy::too_many_arguments)]
pub fn disc_with_edge(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    outer: i32,
    inner: i32,
    ring: Paint,
    disc: Paint,
    blended: bool,
) -> SoftpixResult<()> {
    if inner >= outer {
        return Err(SoftpixError::geometry(format!(
            "inner radius {inner} must be smaller than outer radius {outer}"
        )));
    }
    if inner < 0 {
        return Err(SoftpixError::geometry(format!(
            "inner radius must be >= 0, got {inner}"
        )));
    }

    if !blended || disc.is_opaque() {
        fill_disc(buf, cx, cy, outer, ring, blended)?;
        return fill_disc(buf, cx, cy, inner, disc, blended);
    }

    let clip = buf.clip();
    if !clip.overlaps_around(cx, cy, outer, outer) {
        return Ok(());
    }

    let (r_out, r_in) = (i64::from(outer), i64::from(inner));
    let (top, bottom) = clip.row_offsets(cy);
    buf.locked(|buf| {
        for dy in top.max(-r_out)..=bottom.min(r_out) {
            let k = dy.abs();
            let h_out = row_half_width(r_out, k);
            let h_in = if k <= r_in {
                row_half_width(r_in, k)
            } else {
                -1
            };
            let mut run = |from: i64, to: i64, paint: Paint| {
                if let Some((a, b, y)) = clip.offset_run(cx, cy, dy, from, to) {
                    for x in a..=b {
                        composite(buf, x, y, paint.pixel, paint.alpha, true);
                    }
                }
            };
            if h_in < 0 {
                run(-h_out, h_out, ring);
            } else {
                run(-h_out, -h_in - 1, ring);
                run(-h_in, h_in, disc);
                run(h_in + 1, h_out, ring);
            }
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/draw/shapes.rs"]
mod tests;
