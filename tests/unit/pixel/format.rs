use super::*;
use crate::foundation::core::ColorRecord;

#[test]
fn bytes_per_pixel_outside_one_to_four_is_a_format_error() {
    for bad in [0u8, 5, 8] {
        let err = BytesPerPixel::try_from(bad).unwrap_err();
        assert!(matches!(err, SoftpixError::Format(_)));
    }
    assert_eq!(BytesPerPixel::try_from(3).unwrap().get(), 3);
}

#[test]
fn channel_layout_derives_shift_and_loss() {
    let ch = ChannelLayout::from_mask(0x07e0).unwrap();
    assert_eq!(ch.shift, 5);
    assert_eq!(ch.loss, 2);
    assert_eq!(ch.bits(), 6);
    assert_eq!(ch.max_value(), 63);

    let none = ChannelLayout::from_mask(0).unwrap();
    assert!(!none.is_present());
    assert_eq!(none.loss, 8);
}

#[test]
fn channel_layout_rejects_holes_and_wide_masks() {
    assert!(ChannelLayout::from_mask(0x0505).is_err());
    assert!(ChannelLayout::from_mask(0x01ff).is_err());
    assert!(ChannelLayout::from_mask(u32::MAX).is_err());
}

#[test]
fn presets_match_from_masks() {
    let built = PixelFormat::from_masks(2, 0xf800, 0x07e0, 0x001f, 0).unwrap();
    assert_eq!(built, PixelFormat::rgb565());

    let built =
        PixelFormat::from_masks(4, 0xff00_0000, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff).unwrap();
    assert_eq!(built, PixelFormat::rgba8888());

    let built = PixelFormat::from_masks(3, 0xff0000, 0xff00, 0xff, 0).unwrap();
    assert_eq!(built, PixelFormat::rgb888());
}

#[test]
fn from_masks_rejects_inconsistent_descriptors() {
    // overlap
    assert!(PixelFormat::from_masks(2, 0xf800, 0x0fe0, 0x001f, 0).is_err());
    // does not fit in two bytes
    assert!(PixelFormat::from_masks(2, 0xff_0000, 0xff00, 0xff, 0).is_err());
    // 24-bit channel not byte aligned
    assert!(PixelFormat::from_masks(3, 0xf800, 0x07e0, 0x001f, 0).is_err());
    // indexed formats need a palette
    assert!(PixelFormat::from_masks(1, 0xe0, 0x1c, 0x03, 0).is_err());
    // missing colour channel
    assert!(PixelFormat::from_masks(4, 0xff, 0, 0xff00, 0).is_err());
    assert!(PixelFormat::from_masks(7, 0xff, 0xff00, 0xff_0000, 0).is_err());
}

#[test]
fn indexed_format_carries_palette() {
    let f = PixelFormat::indexed(Palette::greyscale(16).unwrap());
    assert!(f.is_indexed());
    assert_eq!(f.bytes_per_pixel(), BytesPerPixel::One);
    assert_eq!(f.palette().map(Palette::len), Some(16));
    assert!(!f.has_alpha());
    assert_eq!(f.palette().unwrap().get(15), ColorRecord::rgb(240, 240, 240));
}

#[test]
fn description_lists_every_channel() {
    let text = PixelFormat::argb4444()
        .with_byte_order(ByteOrder::Big)
        .to_string();
    assert!(text.contains("2 bytes per pixel (Big endian)"));
    assert!(text.contains("no palette"));
    assert!(text.contains("A: mask 0x0000f000 shift 12 loss 4"));
    assert!(text.contains("R: mask 0x00000f00 shift 8 loss 4"));
}
