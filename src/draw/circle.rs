use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use crate::draw::line::weighted_alpha;
use crate::draw::policy::RenderingPolicy;
use crate::draw::span::hspan;
use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::pixel::compositor::{PutOptions, blend_clipped, composite, put_pixel};
use crate::pixel::convert::Paint;
use crate::surface::buffer::PixelBuffer;
use crate::surface::clip::ClipRect;

/// Draw a circle of `radius` centered on `(cx, cy)`.
///
/// `filled` selects a disc built from horizontal spans; otherwise an outline is drawn, exact or
/// antialiased according to `policy`. `blended` composites with the paint's alpha instead of
/// storing; antialiased outlines always composite. A negative radius is rejected before anything
/// is drawn; a circle whose bounding box misses the clip rectangle is a successful no-op.
#[tracing::instrument(level = "trace", skip(buf, paint, policy))]
#[allow(clippy::too_many_arguments)]
pub fn draw_circle(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    paint: Paint,
    filled: bool,
    blended: bool,
    policy: &RenderingPolicy,
) -> SoftpixResult<()> {
    if filled {
        fill_disc(buf, cx, cy, radius, paint, blended)
    } else if policy.antialiasing {
        aa_circle(buf, cx, cy, radius, paint)
    } else {
        circle_outline(buf, cx, cy, radius, paint, blended)
    }
}

fn check_radius(radius: i32) -> SoftpixResult<()> {
    if radius < 0 {
        return Err(SoftpixError::geometry(format!(
            "circle radius must be >= 0, got {radius}"
        )));
    }
    Ok(())
}

fn visible(buf: &PixelBuffer<'_>, cx: i32, cy: i32, radius: i32) -> bool {
    let seen = buf.clip().overlaps_around(cx, cy, radius, radius);
    if !seen {
        tracing::trace!(cx, cy, radius, "circle outside clip rectangle");
    }
    seen
}

pub(crate) fn put_point(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    paint: Paint,
    blended: bool,
) -> SoftpixResult<()> {
    let opts = PutOptions {
        blend: blended,
        clip: true,
        auto_lock: true,
    };
    put_pixel(buf, cx, cy, paint.pixel, paint.alpha, opts)
}

/// Ordinate the midpoint walk holds at column `x` of the first octant.
///
/// The largest `y` with `(2y - 1)^2 < 4(r^2 - x^2)`; stepping the decision variable column by
/// column lands on the same value.
fn octant_y(r: i64, x: i64) -> i64 {
    let d = 4 * (i128::from(r).pow(2) - i128::from(x).pow(2));
    if d <= 0 {
        return 0;
    }
    (((d - 1).isqrt() + 1) / 2) as i64
}

/// First column at which the midpoint walk has come down to row `k` or below.
fn first_column_at_or_below(r: i64, k: i64) -> i64 {
    let t = 4 * i128::from(r).pow(2) - (2 * i128::from(k) + 1).pow(2);
    if t <= 0 {
        return 0;
    }
    let mut q = t.isqrt();
    if q * q < t {
        q += 1;
    }
    ((q + 1) / 2) as i64
}

/// Half chord width of row `k >= 0` of a midpoint disc of radius `r >= k`.
pub(crate) fn row_half_width(r: i64, k: i64) -> i64 {
    let mut h = -1;
    let yk = octant_y(r, k);
    if k < yk {
        h = yk;
    }
    let x = first_column_at_or_below(r, k);
    if x <= k && octant_y(r, x) == k {
        h = h.max(x);
    }
    h
}

/// Half chord width of row `dy` of a midpoint disc, or `None` past the top or bottom.
pub fn disc_half_width(radius: i32, dy: i32) -> Option<i32> {
    let (r, k) = (i64::from(radius.max(0)), i64::from(dy).abs());
    (k <= r).then(|| row_half_width(r, k) as i32)
}

/// Spans of the disc rows that cross the clip rectangle, as absolute `(x1, x2, y)`.
pub(crate) fn disc_spans(clip: &ClipRect, cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32, i32)> {
    let r = i64::from(radius.max(0));
    let (top, bottom) = clip.row_offsets(cy);
    (top.max(-r)..=bottom.min(r))
        .filter_map(|dy| {
            let h = row_half_width(r, dy.abs());
            clip.offset_run(cx, cy, dy, -h, h)
        })
        .collect()
}

/// Filled disc made of one horizontal span per row.
///
/// Only rows crossing the clip rectangle are computed. Unblended or opaque discs go through the
/// span writer; translucent blended discs are composited pixel by pixel under a single lock.
/// Radius 0 draws one point.
pub fn fill_disc(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    paint: Paint,
    blended: bool,
) -> SoftpixResult<()> {
    check_radius(radius)?;
    if radius == 0 {
        return put_point(buf, cx, cy, paint, blended);
    }
    if !visible(buf, cx, cy, radius) {
        return Ok(());
    }

    let spans = disc_spans(&buf.clip(), cx, cy, radius);
    fill_spans(buf, &spans, paint, blended)
}

/// Paint already clipped `(x1, x2, y)` spans: through the span writer when unblended or opaque,
/// otherwise composited pixel by pixel under a single lock.
pub(crate) fn fill_spans(
    buf: &mut PixelBuffer<'_>,
    spans: &[(i32, i32, i32)],
    paint: Paint,
    blended: bool,
) -> SoftpixResult<()> {
    if !blended || paint.is_opaque() {
        for &(x1, x2, y) in spans {
            hspan(buf, x1, x2, y, paint.pixel)?;
        }
        return Ok(());
    }

    buf.locked(|buf| {
        for &(x1, x2, y) in spans {
            for x in x1..=x2 {
                composite(buf, x, y, paint.pixel, paint.alpha, true);
            }
        }
    })
}

/// Magnitudes `|v|` for `v` in `lo..=hi`, capped at `cap`.
pub(crate) fn magnitudes((lo, hi): (i64, i64), cap: i64) -> Option<RangeInclusive<i64>> {
    if lo > hi {
        return None;
    }
    let (a, b) = if lo <= 0 && hi >= 0 {
        (0, (-lo).max(hi))
    } else if hi < 0 {
        (-hi, -lo)
    } else {
        (lo, hi)
    };
    (a <= cap).then(|| a..=b.min(cap))
}

/// First-octant columns whose mirrors can land in the window, while the octant lasts.
///
/// A column `x` feeds offsets `(±x, _)` and `(_, ±x)`, so only magnitudes reachable from the
/// window's column or row offsets are visited. `last` maps a column to its octant ordinate, or
/// `None` once the octant is exhausted.
fn window_columns(
    r: i64,
    cols: (i64, i64),
    rows: (i64, i64),
    last: impl Fn(i64) -> Option<i64>,
) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    for range in [magnitudes(cols, r), magnitudes(rows, r)].into_iter().flatten() {
        for x in range {
            match last(x) {
                Some(y) => out.push((x, y)),
                None => break,
            }
        }
    }
    out
}

pub(crate) fn in_window((lo, hi): (i64, i64), v: i64) -> bool {
    v >= lo && v <= hi
}

fn octants(x: i64, y: i64) -> [(i64, i64); 8] {
    [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ]
}

/// Midpoint outline offsets inside the window of column offsets `cols` and row offsets `rows`.
fn outline_in_window(r: i64, cols: (i64, i64), rows: (i64, i64)) -> BTreeSet<(i64, i64)> {
    let walk = |x: i64| {
        let y = octant_y(r, x);
        (x <= y).then_some(y)
    };
    window_columns(r, cols, rows, walk)
        .into_iter()
        .flat_map(|(x, y)| octants(x, y))
        .filter(|&(dx, dy)| in_window(cols, dx) && in_window(rows, dy))
        .collect()
}

/// Pixels of a midpoint circle outline, each listed once.
pub fn outline_points(radius: i32) -> Vec<(i32, i32)> {
    let r = i64::from(radius.max(0));
    outline_in_window(r, (-r, r), (-r, r))
        .into_iter()
        .map(|(x, y)| (x as i32, y as i32))
        .collect()
}

/// One-pixel-wide exact outline.
pub fn circle_outline(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    paint: Paint,
    blended: bool,
) -> SoftpixResult<()> {
    check_radius(radius)?;
    if radius == 0 {
        return put_point(buf, cx, cy, paint, blended);
    }
    if !visible(buf, cx, cy, radius) {
        return Ok(());
    }

    let clip = buf.clip();
    let points = outline_in_window(
        i64::from(radius),
        clip.column_offsets(cx),
        clip.row_offsets(cy),
    );
    buf.locked(|buf| {
        for (dx, dy) in points {
            if let Some((x, y)) = clip.offset_point(cx, cy, dx, dy) {
                composite(buf, x, y, paint.pixel, paint.alpha, blended);
            }
        }
    })
}

/// Antialiased coverage inside the window, strongest weight kept on overlap.
fn coverage_in_window(
    r: i64,
    cols: (i64, i64),
    rows: (i64, i64),
) -> BTreeMap<(i64, i64), u8> {
    let r2 = u128::from(r.unsigned_abs()).pow(2);
    // y * 256, exact to the truncated fraction
    let y_fp = |x: i64| ((r2 - u128::from(x.unsigned_abs()).pow(2)) << 16).isqrt();
    let walk = |x: i64| {
        let yi = (y_fp(x) >> 8) as i64;
        (x <= yi).then_some(yi)
    };

    let mut cover: BTreeMap<(i64, i64), u8> = BTreeMap::new();
    let mut mark = |x: i64, y: i64, w: u8| {
        if w == 0 {
            return;
        }
        for (px, py) in octants(x, y) {
            if in_window(cols, px) && in_window(rows, py) {
                let slot = cover.entry((px, py)).or_insert(0);
                *slot = (*slot).max(w);
            }
        }
    };
    for (x, yi) in window_columns(r, cols, rows, walk) {
        let frac = (y_fp(x) & 0xff) as u8;
        mark(x, yi, 255 - frac);
        mark(x, yi + 1, frac);
    }
    cover
}

/// Coverage of an antialiased outline: pixel offset to weight, strongest weight kept on overlap.
pub fn aa_outline_coverage(radius: i32) -> BTreeMap<(i32, i32), u8> {
    let r = i64::from(radius.max(0));
    coverage_in_window(r, (-r, r), (-r, r))
        .into_iter()
        .map(|((x, y), w)| ((x as i32, y as i32), w))
        .collect()
}

/// Antialiased outline: each ring pixel composited with the paint alpha scaled by its coverage.
pub fn aa_circle(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    paint: Paint,
) -> SoftpixResult<()> {
    check_radius(radius)?;
    if radius == 0 {
        return put_point(buf, cx, cy, paint, true);
    }
    if !visible(buf, cx, cy, radius) {
        return Ok(());
    }

    let clip = buf.clip();
    let cover = coverage_in_window(
        i64::from(radius),
        clip.column_offsets(cx),
        clip.row_offsets(cy),
    );
    buf.locked(|buf| {
        for ((dx, dy), w) in cover {
            if let Some((x, y)) = clip.offset_point(cx, cy, dx, dy) {
                blend_clipped(buf, x, y, paint.pixel, weighted_alpha(paint.alpha, w));
            }
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/draw/circle.rs"]
mod tests;
