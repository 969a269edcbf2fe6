use super::*;
use crate::pixel::format::ByteOrder;
use crate::pixel::palette::Palette;
use crate::surface::clip::ClipRect;
use crate::surface::owned::Surface;

fn opts(blend: bool, clip: bool) -> PutOptions {
    PutOptions {
        blend,
        clip,
        auto_lock: false,
    }
}

#[test]
fn opaque_red_lands_at_expected_offset_in_8x8_rgba() {
    let format = PixelFormat::rgba8888().with_byte_order(ByteOrder::Little);
    let mut data = vec![0u8; 8 * 32];
    let mut buf = PixelBuffer::new(&mut data, 8, 8, 32, &format).unwrap();
    let red = encode(&format, ColorRecord::rgb(255, 0, 0));

    put_pixel(&mut buf, 4, 4, red, 255, PutOptions::default().with_auto_lock()).unwrap();

    let off = 4 * 32 + 4 * 4;
    assert_eq!(&data[off..off + 4], &0xff00_00ffu32.to_le_bytes());
    assert!(data[..off].iter().all(|&b| b == 0));
    assert!(data[off + 4..].iter().all(|&b| b == 0));
}

#[test]
fn clipped_pixel_is_dropped() {
    let format = PixelFormat::rgb565();
    let mut data = vec![0u8; 4 * 8];
    let mut buf = PixelBuffer::new(&mut data, 4, 4, 8, &format)
        .unwrap()
        .with_clip(ClipRect::new(1, 1, 2, 2));
    put_pixel(&mut buf, 0, 0, EncodedPixel(0xffff), 255, PutOptions::STORE).unwrap();
    put_pixel(&mut buf, 3, 2, EncodedPixel(0xffff), 255, PutOptions::STORE).unwrap();
    assert!(data.iter().all(|&b| b == 0));
}

#[test]
fn store_ignores_the_alpha_weight() {
    let format = PixelFormat::rgb565().with_byte_order(ByteOrder::Little);
    let mut data = vec![0u8; 4];
    let mut buf = PixelBuffer::new(&mut data, 2, 1, 4, &format).unwrap();
    put_pixel(&mut buf, 0, 0, EncodedPixel(0xf800), 0, PutOptions::STORE).unwrap();
    put_pixel(&mut buf, 1, 0, EncodedPixel(0x07e0), 1, PutOptions::STORE).unwrap();
    assert_eq!(get_pixel(&buf, 0, 0), Some(EncodedPixel(0xf800)));
    assert_eq!(get_pixel(&buf, 1, 0), Some(EncodedPixel(0x07e0)));
    assert_eq!(buf.data(), &[0x00, 0xf8, 0xe0, 0x07]);
}

#[test]
fn unclipped_write_ignores_clip_but_not_bounds() {
    let format = PixelFormat::rgb565();
    let mut data = vec![0u8; 4 * 8];
    let mut buf = PixelBuffer::new(&mut data, 4, 4, 8, &format)
        .unwrap()
        .with_clip(ClipRect::new(1, 1, 2, 2));
    put_pixel(&mut buf, 0, 0, EncodedPixel(0xffff), 255, opts(false, false)).unwrap();
    put_pixel(&mut buf, 4, 0, EncodedPixel(0xffff), 255, opts(false, false)).unwrap();
    put_pixel(&mut buf, -1, 9, EncodedPixel(0xffff), 255, opts(false, false)).unwrap();
    assert_eq!(get_pixel(&buf, 0, 0), Some(EncodedPixel(0xffff)));
    assert_eq!(data.iter().filter(|&&b| b != 0).count(), 2);
}

#[test]
fn half_alpha_blends_each_channel_of_rgb565() {
    let format = PixelFormat::rgb565();
    let mut data = vec![0u8; 2];
    let mut buf = PixelBuffer::new(&mut data, 1, 1, 2, &format).unwrap();
    put_pixel(&mut buf, 0, 0, EncodedPixel(0xffff), 128, opts(true, true)).unwrap();
    // 31 * 128 >> 8 = 15, 63 * 128 >> 8 = 31
    assert_eq!(
        get_pixel(&buf, 0, 0),
        Some(EncodedPixel((15 << 11) | (31 << 5) | 15))
    );
}

#[test]
fn blending_top_byte_channel_does_not_overflow() {
    let format = PixelFormat::rgba8888();
    let mut data = vec![0u8; 4];
    let mut buf = PixelBuffer::new(&mut data, 1, 1, 4, &format).unwrap();
    put_pixel(&mut buf, 0, 0, EncodedPixel(0xff00_0000), 128, opts(true, true)).unwrap();
    assert_eq!(get_pixel(&buf, 0, 0), Some(EncodedPixel(0x7f00_0000)));
}

#[test]
fn three_byte_blend_writes_each_channel_byte() {
    for order in [ByteOrder::Little, ByteOrder::Big] {
        let format = PixelFormat::rgb888().with_byte_order(order);
        let mut data = vec![0u8; 3];
        let mut buf = PixelBuffer::new(&mut data, 1, 1, 3, &format).unwrap();
        let src = encode(&format, ColorRecord::rgb(200, 100, 0));
        put_pixel(&mut buf, 0, 0, src, 128, opts(true, true)).unwrap();
        assert_eq!(get_color(&buf, 0, 0), Some(ColorRecord::rgb(100, 50, 0)));
    }
}

#[test]
fn indexed_blend_maps_back_to_nearest_entry() {
    let format = PixelFormat::indexed(Palette::greyscale(256).unwrap());
    let mut data = vec![0u8; 1];
    let mut buf = PixelBuffer::new(&mut data, 1, 1, 1, &format).unwrap();
    put_pixel(&mut buf, 0, 0, EncodedPixel(200), 128, opts(true, true)).unwrap();
    assert_eq!(data[0], 100);
}

#[test]
fn put_and_get_color_round_trip_through_the_format() {
    let format = PixelFormat::argb8888();
    let mut data = vec![0u8; 16];
    let mut buf = PixelBuffer::new(&mut data, 2, 2, 8, &format).unwrap();
    let c = ColorRecord::rgba(10, 20, 30, 255);
    put_color(&mut buf, 1, 1, c, PutOptions::default()).unwrap();
    assert_eq!(get_color(&buf, 1, 1), Some(c));
    assert_eq!(get_color(&buf, 2, 1), None);
}

#[test]
fn auto_lock_takes_the_lock_once_per_pixel() {
    let mut surface = Surface::new(4, 4, PixelFormat::rgba8888()).unwrap();
    surface.set_must_lock(true);
    {
        let mut buf = surface.buffer();
        put_pixel(&mut buf, 1, 1, EncodedPixel(1), 255, PutOptions::default().with_auto_lock())
            .unwrap();
        put_pixel(&mut buf, 2, 1, EncodedPixel(1), 255, PutOptions::default()).unwrap();
    }
    assert_eq!(surface.lock_acquisitions(), 1);
    assert!(!surface.is_locked());
}

#[test]
fn busy_lock_fails_without_writing() {
    let mut surface = Surface::new(4, 4, PixelFormat::rgba8888()).unwrap();
    surface.set_must_lock(true);
    surface.set_lock_busy(true);
    let before = surface.checksum();
    let err = {
        let mut buf = surface.buffer();
        put_pixel(&mut buf, 1, 1, EncodedPixel(7), 255, PutOptions::default().with_auto_lock())
            .unwrap_err()
    };
    assert!(matches!(err, crate::foundation::error::SoftpixError::Lock(_)));
    assert_eq!(surface.checksum(), before);
}
