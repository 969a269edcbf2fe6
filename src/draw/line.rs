use crate::draw::policy::RenderingPolicy;
use crate::draw::span::{store_hrun, store_vrun};
use crate::foundation::core::AlphaWeight;
use crate::foundation::error::SoftpixResult;
use crate::pixel::compositor::{PutOptions, blend_clipped, composite, put_pixel};
use crate::pixel::convert::Paint;
use crate::surface::buffer::PixelBuffer;
use crate::surface::clip::Segment;

const SINGLE_POINT: PutOptions = PutOptions {
    blend: true,
    clip: true,
    auto_lock: true,
};

/// Coverage-scaled alpha, as used for the pixel pairs of antialiased primitives.
pub(crate) fn weighted_alpha(alpha: AlphaWeight, weight: u8) -> AlphaWeight {
    ((u32::from(alpha) * u32::from(weight)) >> 8) as AlphaWeight
}

/// Draw a line from `(x1, y1)` to `(x2, y2)` with the algorithm `policy` selects.
///
/// Returns `Ok(false)` when the segment lies entirely outside the clip rectangle.
pub fn draw_line(
    buf: &mut PixelBuffer<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    paint: Paint,
    policy: &RenderingPolicy,
) -> SoftpixResult<bool> {
    let seg = Segment::new(x1, y1, x2, y2);
    if policy.antialiasing {
        aa_line(buf, seg, paint, policy.draw_endpoint)
    } else {
        exact_line(buf, seg, paint)
    }
}

/// Non-antialiased line including both endpoints.
///
/// Endpoints are put in a canonical order first, so a line and its reverse cover the same pixels.
pub fn exact_line(buf: &mut PixelBuffer<'_>, seg: Segment, paint: Paint) -> SoftpixResult<bool> {
    let seg = if (seg.x2, seg.y2) < (seg.x1, seg.y1) {
        seg.reversed()
    } else {
        seg
    };
    let Some(s) = buf.clip().clip_line(seg) else {
        tracing::trace!(?seg, "line clipped out");
        return Ok(false);
    };

    if s.x1 == s.x2 && s.y1 == s.y2 {
        put_pixel(
            buf,
            s.x1,
            s.y1,
            paint.pixel,
            paint.alpha,
            SINGLE_POINT,
        )?;
        return Ok(true);
    }
    if s.x1 == s.x2 {
        draw_vertical(buf, s.x1, s.y1, s.y2, paint)?;
        return Ok(true);
    }
    if s.y1 == s.y2 {
        draw_horizontal(buf, s.x1, s.x2, s.y1, paint)?;
        return Ok(true);
    }

    buf.locked(|buf| {
        if paint.is_opaque() {
            dda_store(buf, s, paint);
        } else {
            bresenham_blend(buf, s, paint);
        }
    })?;
    Ok(true)
}

/// Horizontal run: stored when opaque, otherwise blended pixel by pixel. One lock either way.
pub fn draw_horizontal(
    buf: &mut PixelBuffer<'_>,
    x1: i32,
    x2: i32,
    y: i32,
    paint: Paint,
) -> SoftpixResult<()> {
    let Some((a, b)) = buf.clip().clip_hspan(x1, x2, y) else {
        return Ok(());
    };
    buf.locked(|buf| {
        if paint.is_opaque() {
            store_hrun(buf, a, b, y, paint.pixel);
        } else {
            for x in a..=b {
                composite(buf, x, y, paint.pixel, paint.alpha, true);
            }
        }
    })
}

/// Vertical counterpart of [`draw_horizontal`].
pub fn draw_vertical(
    buf: &mut PixelBuffer<'_>,
    x: i32,
    y1: i32,
    y2: i32,
    paint: Paint,
) -> SoftpixResult<()> {
    let Some((a, b)) = buf.clip().clip_vspan(x, y1, y2) else {
        return Ok(());
    };
    buf.locked(|buf| {
        if paint.is_opaque() {
            store_vrun(buf, x, a, b, paint.pixel);
        } else {
            for y in a..=b {
                composite(buf, x, y, paint.pixel, paint.alpha, true);
            }
        }
    })
}

// Run-length stepper: one pixel per major-axis step, minor axis advances when the accumulated
// minor length reaches the major length.
fn dda_store(buf: &mut PixelBuffer<'_>, s: Segment, paint: Paint) {
    let sx = if s.x2 >= s.x1 { 1 } else { -1 };
    let sy = if s.y2 >= s.y1 { 1 } else { -1 };
    let dx = (s.x2 - s.x1).abs() + 1;
    let dy = (s.y2 - s.y1).abs() + 1;
    let x_major = dx >= dy;
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

    let (mut x, mut y) = (s.x1, s.y1);
    let mut acc = 0;
    for _ in 0..major {
        composite(buf, x, y, paint.pixel, 255, false);
        acc += minor;
        let step_minor = acc >= major;
        if step_minor {
            acc -= major;
        }
        if x_major {
            x += sx;
            if step_minor {
                y += sy;
            }
        } else {
            y += sy;
            if step_minor {
                x += sx;
            }
        }
    }
}

fn bresenham_blend(buf: &mut PixelBuffer<'_>, s: Segment, paint: Paint) {
    let dx = s.x2 - s.x1;
    let dy = s.y2 - s.y1;
    let sx = if dx >= 0 { 1 } else { -1 };
    let sy = if dy >= 0 { 1 } else { -1 };
    let ax = dx.abs() << 1;
    let ay = dy.abs() << 1;
    let (mut x, mut y) = (s.x1, s.y1);

    let put = |buf: &mut PixelBuffer<'_>, x: i32, y: i32| {
        blend_clipped(buf, x, y, paint.pixel, paint.alpha);
    };

    if ax > ay {
        let mut d = ay - (ax >> 1);
        while x != s.x2 {
            put(buf, x, y);
            if d > 0 || (d == 0 && sx == 1) {
                y += sy;
                d -= ax;
            }
            x += sx;
            d += ay;
        }
    } else {
        let mut d = ax - (ay >> 1);
        while y != s.y2 {
            put(buf, x, y);
            if d > 0 || (d == 0 && sy == 1) {
                x += sx;
                d -= ay;
            }
            y += sy;
            d += ax;
        }
    }
    put(buf, x, y);
}

/// Wu antialiased line.
///
/// Axis-aligned segments fall back to exact runs and 45-degree ones to [`exact_line`]. Otherwise
/// every step along the major axis paints two pixels straddling the ideal line, their alphas
/// split by the top eight bits of a 32-bit error accumulator. The first pixel is painted at full
/// weight, the last only when `draw_endpoint` is set, shortcuts included. A zero-length segment
/// always paints its single pixel.
pub fn aa_line(
    buf: &mut PixelBuffer<'_>,
    seg: Segment,
    paint: Paint,
    draw_endpoint: bool,
) -> SoftpixResult<bool> {
    let Some(s) = buf.clip().clip_line(seg) else {
        tracing::trace!(?seg, "line clipped out");
        return Ok(false);
    };

    let (mut x0, mut y0, mut x1, mut y1) = (s.x1, s.y1, s.x2, s.y2);
    if y0 > y1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }
    let mut dx = x1 - x0;
    let mut dy = y1 - y0;

    // Exact shortcuts paint whole runs, so the far end is trimmed up front when not wanted.
    let run = if draw_endpoint || (s.x1, s.y1) == (s.x2, s.y2) {
        s
    } else {
        Segment::new(
            s.x1,
            s.y1,
            s.x2 - (s.x2 - s.x1).signum(),
            s.y2 - (s.y2 - s.y1).signum(),
        )
    };
    if dx == 0 {
        draw_vertical(buf, run.x1, run.y1, run.y2, paint)?;
        return Ok(true);
    }
    if dy == 0 {
        draw_horizontal(buf, run.x1, run.x2, run.y1, paint)?;
        return Ok(true);
    }

    let xdir = if dx >= 0 {
        1
    } else {
        dx = -dx;
        -1
    };
    if dx == dy {
        return exact_line(buf, run, paint);
    }

    buf.locked(|buf| {
        let put = |buf: &mut PixelBuffer<'_>, x: i32, y: i32, alpha: AlphaWeight| {
            blend_clipped(buf, x, y, paint.pixel, alpha);
        };

        put(buf, s.x1, s.y1, paint.alpha);

        let mut erracc: u32 = 0;
        if dy > dx {
            let erradj = (((dx as u64) << 16) / dy as u64) << 16;
            let erradj = erradj as u32;
            let mut x0pxdir = x0 + xdir;
            dy -= 1;
            while dy > 0 {
                let prev = erracc;
                erracc = erracc.wrapping_add(erradj);
                if erracc <= prev {
                    x0 = x0pxdir;
                    x0pxdir += xdir;
                }
                y0 += 1;
                let wgt = ((erracc >> 24) & 0xff) as u8;
                put(buf, x0, y0, weighted_alpha(paint.alpha, 255 - wgt));
                put(buf, x0pxdir, y0, weighted_alpha(paint.alpha, wgt));
                dy -= 1;
            }
        } else {
            let erradj = (((dy as u64) << 16) / dx as u64) << 16;
            let erradj = erradj as u32;
            let mut y0p1 = y0 + 1;
            dx -= 1;
            while dx > 0 {
                let prev = erracc;
                erracc = erracc.wrapping_add(erradj);
                if erracc <= prev {
                    y0 = y0p1;
                    y0p1 += 1;
                }
                x0 += xdir;
                let wgt = ((erracc >> 24) & 0xff) as u8;
                put(buf, x0, y0, weighted_alpha(paint.alpha, 255 - wgt));
                put(buf, x0, y0p1, weighted_alpha(paint.alpha, wgt));
                dx -= 1;
            }
        }

        if draw_endpoint {
            put(buf, s.x2, s.y2, paint.alpha);
        }
    })?;
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/draw/line.rs"]
mod tests;
