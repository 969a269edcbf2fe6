use super::*;
use crate::pixel::format::PixelFormat;
use crate::surface::clip::ClipRect;
use crate::surface::owned::Surface;

fn painted(surface: &Surface) -> Vec<(i32, i32)> {
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

#[test]
fn reversed_hspan_is_normalized() {
    let mut s = Surface::new(8, 4, PixelFormat::rgb565()).unwrap();
    hspan(&mut s.buffer(), 5, 2, 1, EncodedPixel(0x1234)).unwrap();
    assert_eq!(painted(&s), vec![(2, 1), (3, 1), (4, 1), (5, 1)]);
    assert_eq!(s.pixel_at(3, 1), Some(EncodedPixel(0x1234)));
}

#[test]
fn hspan_is_trimmed_to_clip() {
    let mut s = Surface::new(8, 4, PixelFormat::rgb888()).unwrap();
    s.set_clip(ClipRect::new(3, 0, 4, 3));
    hspan(&mut s.buffer(), -10, 10, 2, EncodedPixel(0xabcdef)).unwrap();
    assert_eq!(painted(&s), vec![(3, 2), (4, 2)]);
    assert_eq!(s.pixel_at(4, 2), Some(EncodedPixel(0xabcdef)));
}

#[test]
fn span_outside_clip_is_a_successful_no_op() {
    let mut s = Surface::new(8, 4, PixelFormat::rgba8888()).unwrap();
    s.set_must_lock(true);
    hspan(&mut s.buffer(), 0, 7, 9, EncodedPixel(1)).unwrap();
    vspan(&mut s.buffer(), -1, 0, 3, EncodedPixel(1)).unwrap();
    assert!(painted(&s).is_empty());
    assert_eq!(s.lock_acquisitions(), 0);
}

#[test]
fn vspan_steps_by_pitch() {
    let mut s = Surface::new(3, 5, PixelFormat::argb4444()).unwrap();
    assert_eq!(s.pitch(), 8);
    vspan(&mut s.buffer(), 1, 4, 1, EncodedPixel(0xf00f)).unwrap();
    assert_eq!(painted(&s), vec![(1, 1), (1, 2), (1, 3), (1, 4)]);
}

#[test]
fn span_locks_once() {
    let mut s = Surface::new(16, 16, PixelFormat::rgba8888()).unwrap();
    s.set_must_lock(true);
    hspan(&mut s.buffer(), 0, 15, 3, EncodedPixel(9)).unwrap();
    vspan(&mut s.buffer(), 3, 0, 15, EncodedPixel(9)).unwrap();
    assert_eq!(s.lock_acquisitions(), 2);
}

#[test]
fn busy_lock_reports_failure() {
    let mut s = Surface::new(4, 4, PixelFormat::rgba8888()).unwrap();
    s.set_must_lock(true);
    s.set_lock_busy(true);
    assert!(hspan(&mut s.buffer(), 0, 3, 0, EncodedPixel(9)).is_err());
    assert!(painted(&s).is_empty());
}

#[test]
fn indexed_span_writes_single_bytes() {
    let palette = crate::pixel::palette::Palette::greyscale(4).unwrap();
    let mut s = Surface::new(5, 2, PixelFormat::indexed(palette)).unwrap();
    hspan(&mut s.buffer(), 0, 4, 1, EncodedPixel(3)).unwrap();
    assert_eq!(&s.bytes()[8..13], &[3, 3, 3, 3, 3]);
    assert!(s.bytes()[..8].iter().all(|&b| b == 0));
}
