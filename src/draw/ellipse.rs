use std::collections::BTreeMap;

use crate::draw::circle::{fill_spans, in_window, magnitudes, put_point};
use crate::draw::line::weighted_alpha;
use crate::draw::policy::RenderingPolicy;
use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::pixel::compositor::{blend_clipped, composite};
use crate::pixel::convert::Paint;
use crate::surface::buffer::PixelBuffer;
use crate::surface::clip::ClipRect;

/// Draw an axis-aligned ellipse with half axes `rx` and `ry` centered on `(cx, cy)`.
///
/// The switches mirror [`draw_circle`](crate::draw::circle::draw_circle): `filled` paints one
/// span per row, otherwise the outline is exact or antialiased according to `policy`. A
/// negative half axis is rejected before anything is drawn. A zero half axis degenerates to a
/// straight run, both zero to a single point.
#[tracing::instrument(level = "trace", skip(buf, paint, policy))]
#[allow(clippy::too_many_arguments)]
pub fn draw_ellipse(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    paint: Paint,
    filled: bool,
    blended: bool,
    policy: &RenderingPolicy,
) -> SoftpixResult<()> {
    if rx < 0 || ry < 0 {
        return Err(SoftpixError::geometry(format!(
            "ellipse half axes must be >= 0, got {rx} x {ry}"
        )));
    }
    // antialiased outlines always composite
    let blended = blended || (!filled && policy.antialiasing);
    if rx == 0 && ry == 0 {
        return put_point(buf, cx, cy, paint, blended);
    }
    if !buf.clip().overlaps_around(cx, cy, rx, ry) {
        tracing::trace!(cx, cy, rx, ry, "ellipse outside clip rectangle");
        return Ok(());
    }

    let clip = buf.clip();
    let (rx, ry) = (i64::from(rx), i64::from(ry));
    if filled {
        let spans = fill_runs(&clip, cx, cy, rx, ry);
        return fill_spans(buf, &spans, paint, blended);
    }
    if policy.antialiasing && rx > 0 && ry > 0 {
        let cover = coverage_in_window(rx, ry, clip.column_offsets(cx), clip.row_offsets(cy));
        return buf.locked(|buf| {
            for ((dx, dy), w) in cover {
                if let Some((x, y)) = clip.offset_point(cx, cy, dx, dy) {
                    blend_clipped(buf, x, y, paint.pixel, weighted_alpha(paint.alpha, w));
                }
            }
        });
    }

    let runs = outline_runs(&clip, cx, cy, rx, ry);
    buf.locked(|buf| {
        for (x1, x2, y) in runs {
            for x in x1..=x2 {
                composite(buf, x, y, paint.pixel, paint.alpha, blended);
            }
        }
    })
}

/// Largest `x` with `x^2 b^2 + t^2 a^2 <= a^2 b^2`, for `0 <= t <= b`.
fn chord(a: i64, b: i64, t: i64) -> i64 {
    if b == 0 {
        return a;
    }
    let (a2, b2) = (i128::from(a).pow(2), i128::from(b).pow(2));
    (a2 * (b2 - i128::from(t).pow(2)) / b2).isqrt() as i64
}

/// [`chord`] in 8.8 fixed point, truncated.
fn chord_fixed(a: i64, b: i64, t: i64) -> i64 {
    let (a2, b2) = (i128::from(a).pow(2), i128::from(b).pow(2));
    let room = a2 * (b2 - i128::from(t).pow(2));
    let (q, rem) = (room / b2, room % b2);
    ((q << 16) + (rem << 16) / b2).isqrt() as i64
}

/// Row spans of the filled ellipse that cross the clip rectangle.
fn fill_runs(clip: &ClipRect, cx: i32, cy: i32, rx: i64, ry: i64) -> Vec<(i32, i32, i32)> {
    let (top, bottom) = clip.row_offsets(cy);
    (top.max(-ry)..=bottom.min(ry))
        .filter_map(|dy| {
            let h = chord(rx, ry, dy.abs());
            clip.offset_run(cx, cy, dy, -h, h)
        })
        .collect()
}

/// Outline runs inside the clip rectangle, no pixel listed twice.
///
/// Row `k` covers the columns from just past the next row's chord out to its own, so
/// consecutive rows always touch.
fn outline_runs(clip: &ClipRect, cx: i32, cy: i32, rx: i64, ry: i64) -> Vec<(i32, i32, i32)> {
    let mut runs = Vec::new();
    for k in magnitudes(clip.row_offsets(cy), ry).into_iter().flatten() {
        let hi = chord(rx, ry, k);
        let lo = if k == ry {
            0
        } else {
            (chord(rx, ry, k + 1) + 1).min(hi)
        };
        let mirrored = if k == 0 { 1 } else { 2 };
        for dy in [k, -k].into_iter().take(mirrored) {
            runs.extend(clip.offset_run(cx, cy, dy, lo, hi));
            runs.extend(clip.offset_run(cx, cy, dy, -hi, -lo.max(1)));
        }
    }
    runs
}

/// Antialiased coverage inside the window, strongest weight kept on overlap.
///
/// Where the edge is steeper than 45 degrees each row gets a pixel pair; elsewhere each column
/// does.
fn coverage_in_window(
    rx: i64,
    ry: i64,
    cols: (i64, i64),
    rows: (i64, i64),
) -> BTreeMap<(i64, i64), u8> {
    let (a2, b2) = (i128::from(rx).pow(2), i128::from(ry).pow(2));
    let mut cover: BTreeMap<(i64, i64), u8> = BTreeMap::new();
    let mut mark = |x: i64, y: i64, w: u8| {
        if w == 0 {
            return;
        }
        for (px, py) in [(x, y), (-x, y), (x, -y), (-x, -y)] {
            if in_window(cols, px) && in_window(rows, py) {
                let slot = cover.entry((px, py)).or_insert(0);
                *slot = (*slot).max(w);
            }
        }
    };

    for k in magnitudes(rows, ry).into_iter().flatten() {
        let x_fp = chord_fixed(rx, ry, k);
        if a2 * i128::from(k) * 256 > b2 * i128::from(x_fp) {
            continue;
        }
        let frac = (x_fp & 0xff) as u8;
        mark(x_fp >> 8, k, 255 - frac);
        mark((x_fp >> 8) + 1, k, frac);
    }
    for j in magnitudes(cols, rx).into_iter().flatten() {
        let y_fp = chord_fixed(ry, rx, j);
        if b2 * i128::from(j) * 256 > a2 * i128::from(y_fp) {
            continue;
        }
        let frac = (y_fp & 0xff) as u8;
        mark(j, y_fp >> 8, 255 - frac);
        mark(j, (y_fp >> 8) + 1, frac);
    }
    cover
}

#[cfg(test)]
#[path = "../../tests/unit/draw/ellipse.rs"]
mod tests;
