//! Raw load/store of one encoded pixel, one entry per byte width.

use crate::pixel::format::{ByteOrder, BytesPerPixel};

/// Load and store for one byte width. Slices passed in are exactly one pixel long.
#[derive(Clone, Copy)]
pub(crate) struct PixelIo {
    pub(crate) load: fn(&[u8], ByteOrder) -> u32,
    pub(crate) store: fn(&mut [u8], ByteOrder, u32),
}

const PIXEL_IO: [PixelIo; 4] = [
    PixelIo {
        load: load1,
        store: store1,
    },
    PixelIo {
        load: load2,
        store: store2,
    },
    PixelIo {
        load: load3,
        store: store3,
    },
    PixelIo {
        load: load4,
        store: store4,
    },
];

pub(crate) fn pixel_io(bpp: BytesPerPixel) -> PixelIo {
    PIXEL_IO[bpp.get() - 1]
}

fn load1(px: &[u8], _: ByteOrder) -> u32 {
    px.first().copied().map_or(0, u32::from)
}

fn store1(px: &mut [u8], _: ByteOrder, v: u32) {
    if let Some(b) = px.first_mut() {
        *b = v as u8;
    }
}

fn load2(px: &[u8], order: ByteOrder) -> u32 {
    let Ok(bytes) = <[u8; 2]>::try_from(px) else {
        return 0;
    };
    u32::from(match order {
        ByteOrder::Little => u16::from_le_bytes(bytes),
        ByteOrder::Big => u16::from_be_bytes(bytes),
    })
}

fn store2(px: &mut [u8], order: ByteOrder, v: u32) {
    let bytes = match order {
        ByteOrder::Little => (v as u16).to_le_bytes(),
        ByteOrder::Big => (v as u16).to_be_bytes(),
    };
    px.copy_from_slice(&bytes);
}

fn load3(px: &[u8], order: ByteOrder) -> u32 {
    let &[b0, b1, b2] = px else {
        return 0;
    };
    let (lo, mid, hi) = match order {
        ByteOrder::Little => (b0, b1, b2),
        ByteOrder::Big => (b2, b1, b0),
    };
    u32::from(lo) | (u32::from(mid) << 8) | (u32::from(hi) << 16)
}

fn store3(px: &mut [u8], order: ByteOrder, v: u32) {
    let bytes = match order {
        ByteOrder::Little => [v as u8, (v >> 8) as u8, (v >> 16) as u8],
        ByteOrder::Big => [(v >> 16) as u8, (v >> 8) as u8, v as u8],
    };
    px.copy_from_slice(&bytes);
}

fn load4(px: &[u8], order: ByteOrder) -> u32 {
    let Ok(bytes) = <[u8; 4]>::try_from(px) else {
        return 0;
    };
    match order {
        ByteOrder::Little => u32::from_le_bytes(bytes),
        ByteOrder::Big => u32::from_be_bytes(bytes),
    }
}

fn store4(px: &mut [u8], order: ByteOrder, v: u32) {
    let bytes = match order {
        ByteOrder::Little => v.to_le_bytes(),
        ByteOrder::Big => v.to_be_bytes(),
    };
    px.copy_from_slice(&bytes);
}

/// Byte index of an 8-bit, byte-aligned channel inside a 3-byte pixel.
pub(crate) fn byte_index3(shift: u8, order: ByteOrder) -> usize {
    let i = usize::from(shift / 8);
    match order {
        ByteOrder::Little => i,
        ByteOrder::Big => 2 - i,
    }
}
