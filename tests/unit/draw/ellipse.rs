use super::*;
use crate::foundation::core::{ColorRecord, EncodedPixel};
use crate::pixel::format::PixelFormat;
use crate::surface::owned::Surface;

fn canvas(w: u32, h: u32) -> Surface {
    Surface::new(w, h, PixelFormat::rgba8888()).unwrap()
}

fn paint(surface: &Surface, c: ColorRecord) -> Paint {
    Paint::from_color(surface.format(), c)
}

fn touched(surface: &Surface) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..surface.height() as i32 {
        for x in 0..surface.width() as i32 {
            if surface.pixel_at(x, y) != Some(EncodedPixel(0)) {
                out.push((x, y));
            }
        }
    }
    out
}

fn bounds(pts: &[(i32, i32)]) -> (i32, i32, i32, i32) {
    let xs = pts.iter().map(|p| p.0);
    let ys = pts.iter().map(|p| p.1);
    (
        xs.clone().min().unwrap(),
        ys.clone().min().unwrap(),
        xs.max().unwrap(),
        ys.max().unwrap(),
    )
}

fn assert_four_way_symmetric(s: &Surface, cx: i32, cy: i32) {
    for (x, y) in touched(s) {
        let (dx, dy) = (x - cx, y - cy);
        let here = s.pixel_at(x, y);
        assert_eq!(s.pixel_at(cx - dx, y), here, "({x}, {y}) mirrored across x");
        assert_eq!(s.pixel_at(x, cy - dy), here, "({x}, {y}) mirrored across y");
    }
}

#[test]
fn negative_half_axis_is_rejected_for_every_kind() {
    let mut s = canvas(8, 8);
    let p = paint(&s, ColorRecord::rgb(255, 0, 0));
    for (rx, ry) in [(-1, 3), (3, -1)] {
        for (filled, policy) in [
            (true, RenderingPolicy::default()),
            (false, RenderingPolicy::default()),
            (false, RenderingPolicy::exact()),
        ] {
            let err =
                draw_ellipse(&mut s.buffer(), 4, 4, rx, ry, p, filled, true, &policy).unwrap_err();
            assert!(matches!(err, SoftpixError::Geometry(_)));
        }
    }
    assert!(touched(&s).is_empty());
}

#[test]
fn filled_ellipse_spans_its_bounding_box_in_contiguous_rows() {
    let mut s = canvas(40, 30);
    let p = paint(&s, ColorRecord::rgb(0, 0, 255));
    draw_ellipse(&mut s.buffer(), 20, 15, 9, 5, p, true, false, &RenderingPolicy::exact())
        .unwrap();

    let pts = touched(&s);
    assert_eq!(bounds(&pts), (11, 10, 29, 20));
    for y in 10..=20 {
        let xs: Vec<i32> = pts.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
        assert_eq!(xs.len() as i32, xs[xs.len() - 1] - xs[0] + 1, "row {y}");
    }
    assert_eq!(pts.iter().filter(|p| p.1 == 15).count(), 19);
    assert_eq!(pts.iter().filter(|p| p.1 == 10).count(), 1);
    assert_four_way_symmetric(&s, 20, 15);
}

#[test]
fn exact_outline_is_hollow_symmetric_and_closed() {
    let mut s = canvas(40, 30);
    let p = paint(&s, ColorRecord::rgb(0, 255, 0));
    draw_ellipse(&mut s.buffer(), 20, 15, 9, 5, p, false, false, &RenderingPolicy::exact())
        .unwrap();

    let pts = touched(&s);
    assert_eq!(bounds(&pts), (11, 10, 29, 20));
    assert_eq!(s.pixel_at(20, 15), Some(EncodedPixel(0)));
    assert!(pts.contains(&(29, 15)) && pts.contains(&(20, 10)));
    assert_four_way_symmetric(&s, 20, 15);
    for &(x, y) in &pts {
        let neighbours = pts
            .iter()
            .filter(|&&(a, b)| (a, b) != (x, y) && (a - x).abs() <= 1 && (b - y).abs() <= 1)
            .count();
        assert!(neighbours >= 2, "({x}, {y}) is a loose end");
    }
}

#[test]
fn translucent_outline_blends_each_pixel_once() {
    let mut s = canvas(40, 30);
    let p = paint(&s, ColorRecord::rgba(200, 0, 0, 128));
    draw_ellipse(&mut s.buffer(), 20, 15, 12, 4, p, false, true, &RenderingPolicy::exact())
        .unwrap();
    let pts = touched(&s);
    assert!(!pts.is_empty());
    for (x, y) in pts {
        assert_eq!(s.color_at(x, y).unwrap(), ColorRecord::rgba(100, 0, 0, 64));
    }
}

#[test]
fn antialiased_outline_is_symmetric_with_full_extremes() {
    let mut s = canvas(40, 30);
    let p = paint(&s, ColorRecord::rgb(255, 255, 255));
    draw_ellipse(&mut s.buffer(), 20, 15, 11, 6, p, false, false, &RenderingPolicy::default())
        .unwrap();

    let pts = touched(&s);
    assert_eq!(bounds(&pts), (9, 9, 31, 21));
    assert_eq!(s.pixel_at(20, 15), Some(EncodedPixel(0)));
    let full = ColorRecord::rgba(253, 253, 253, 253);
    for (x, y) in [(31, 15), (9, 15), (20, 9), (20, 21)] {
        assert_eq!(s.color_at(x, y).unwrap(), full, "({x}, {y})");
    }
    assert_four_way_symmetric(&s, 20, 15);
}

#[test]
fn zero_half_axes_degenerate_to_runs() {
    let mut s = canvas(16, 16);
    let p = paint(&s, ColorRecord::rgb(255, 0, 0));
    let exact = RenderingPolicy::exact();
    draw_ellipse(&mut s.buffer(), 3, 8, 0, 4, p, false, false, &exact).unwrap();
    draw_ellipse(&mut s.buffer(), 10, 2, 3, 0, p, true, false, &exact).unwrap();
    draw_ellipse(&mut s.buffer(), 13, 13, 0, 0, p, false, false, &RenderingPolicy::default())
        .unwrap();

    let mut want: Vec<(i32, i32)> = (4..=12).map(|y| (3, y)).collect();
    want.extend((7..=13).map(|x| (x, 2)));
    want.push((13, 13));
    want.sort_unstable_by_key(|&(x, y)| (y, x));
    assert_eq!(touched(&s), want);
}

#[test]
fn ellipse_outside_clip_takes_no_lock() {
    let mut s = canvas(16, 16);
    s.set_must_lock(true);
    let p = paint(&s, ColorRecord::rgb(255, 0, 0));
    for filled in [true, false] {
        draw_ellipse(&mut s.buffer(), 40, 4, 20, 3, p, filled, true, &RenderingPolicy::default())
            .unwrap();
    }
    assert!(touched(&s).is_empty());
    assert_eq!(s.lock_acquisitions(), 0);
}

#[test]
fn huge_half_axes_stay_bounded_by_the_canvas() {
    let red = ColorRecord::rgb(255, 0, 0);
    let mut filled = canvas(16, 16);
    let p = paint(&filled, red);
    let exact = RenderingPolicy::exact();
    draw_ellipse(&mut filled.buffer(), 5, 5, i32::MAX, i32::MAX - 7, p, true, false, &exact)
        .unwrap();
    assert_eq!(touched(&filled).len(), 256);

    for policy in [RenderingPolicy::exact(), RenderingPolicy::default()] {
        let mut ring = canvas(16, 16);
        draw_ellipse(&mut ring.buffer(), 5, 5, i32::MAX, i32::MAX, p, false, false, &policy)
            .unwrap();
        assert!(touched(&ring).is_empty());
    }
}
