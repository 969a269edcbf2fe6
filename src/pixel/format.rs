use std::fmt;

use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::pixel::palette::Palette;

/// Storage width of one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BytesPerPixel {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl BytesPerPixel {
    pub fn get(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for BytesPerPixel {
    type Error = SoftpixError;

    fn try_from(v: u8) -> SoftpixResult<Self> {
        match v {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(SoftpixError::format(format!(
                "unsupported bytes per pixel {other} (expected 1, 2, 3 or 4)"
            ))),
        }
    }
}

/// Order of the bytes of a multi-byte pixel in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

/// Position and precision of one channel inside an encoded pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelLayout {
    pub mask: u32,
    pub shift: u8,
    /// Low bits of the 8-bit channel that are not stored.
    pub loss: u8,
}

impl ChannelLayout {
    pub const ABSENT: Self = Self {
        mask: 0,
        shift: 0,
        loss: 8,
    };

    const fn of(mask: u32) -> Self {
        if mask == 0 {
            return Self::ABSENT;
        }
        Self {
            mask,
            shift: mask.trailing_zeros() as u8,
            loss: 8 - mask.count_ones() as u8,
        }
    }

    pub fn from_mask(mask: u32) -> SoftpixResult<Self> {
        if mask == 0 {
            return Ok(Self::ABSENT);
        }
        if mask.count_ones() > 8 {
            return Err(SoftpixError::format(format!(
                "channel mask {mask:#010x} is wider than 8 bits"
            )));
        }
        let run = mask >> mask.trailing_zeros();
        if !(run + 1).is_power_of_two() {
            return Err(SoftpixError::format(format!(
                "channel mask {mask:#010x} is not contiguous"
            )));
        }
        Ok(Self::of(mask))
    }

    pub fn is_present(self) -> bool {
        self.mask != 0
    }

    /// Number of stored bits.
    pub fn bits(self) -> u8 {
        8 - self.loss
    }

    /// Largest stored channel value, after shifting down.
    pub fn max_value(self) -> u32 {
        self.mask >> self.shift
    }
}

/// Layout of one pixel buffer: byte width, byte order, channel placement and optional palette.
///
/// Constructors validate the masks once, so every per-pixel routine can trust the descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelFormat {
    bpp: BytesPerPixel,
    order: ByteOrder,
    red: ChannelLayout,
    green: ChannelLayout,
    blue: ChannelLayout,
    alpha: ChannelLayout,
    palette: Option<Palette>,
}

impl PixelFormat {
    /// Direct-color format from channel masks. Pass `0` as `a` for a format without alpha.
    #[tracing::instrument(level = "debug")]
    pub fn from_masks(bpp: u8, r: u32, g: u32, b: u32, a: u32) -> SoftpixResult<Self> {
        let bpp = BytesPerPixel::try_from(bpp)?;
        if bpp == BytesPerPixel::One {
            return Err(SoftpixError::format(
                "one byte per pixel formats are palette-indexed; use PixelFormat::indexed",
            ));
        }

        let red = ChannelLayout::from_mask(r)?;
        let green = ChannelLayout::from_mask(g)?;
        let blue = ChannelLayout::from_mask(b)?;
        let alpha = ChannelLayout::from_mask(a)?;

        if !(red.is_present() && green.is_present() && blue.is_present()) {
            return Err(SoftpixError::format("red, green and blue masks must be non-zero"));
        }

        let bits = bpp.get() as u32 * 8;
        let limit = if bits == 32 { u32::MAX } else { (1u32 << bits) - 1 };
        let mut seen = 0u32;
        for (name, ch) in [("red", red), ("green", green), ("blue", blue), ("alpha", alpha)] {
            if ch.mask & !limit != 0 {
                return Err(SoftpixError::format(format!(
                    "{name} mask {:#010x} does not fit in {} bytes",
                    ch.mask,
                    bpp.get()
                )));
            }
            if ch.mask & seen != 0 {
                return Err(SoftpixError::format(format!(
                    "{name} mask {:#010x} overlaps another channel",
                    ch.mask
                )));
            }
            seen |= ch.mask;

            if bpp == BytesPerPixel::Three
                && ch.is_present()
                && (ch.bits() != 8 || ch.shift % 8 != 0)
            {
                return Err(SoftpixError::format(format!(
                    "{name} mask {:#010x} is not byte aligned in a 3-byte format",
                    ch.mask
                )));
            }
        }

        Ok(Self {
            bpp,
            order: ByteOrder::native(),
            red,
            green,
            blue,
            alpha,
            palette: None,
        })
    }

    /// One byte per pixel, each byte an index into `palette`.
    pub fn indexed(palette: Palette) -> Self {
        Self {
            bpp: BytesPerPixel::One,
            order: ByteOrder::native(),
            red: ChannelLayout::ABSENT,
            green: ChannelLayout::ABSENT,
            blue: ChannelLayout::ABSENT,
            alpha: ChannelLayout::ABSENT,
            palette: Some(palette),
        }
    }

    const fn preset(bpp: BytesPerPixel, r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            bpp,
            order: ByteOrder::native(),
            red: ChannelLayout::of(r),
            green: ChannelLayout::of(g),
            blue: ChannelLayout::of(b),
            alpha: ChannelLayout::of(a),
            palette: None,
        }
    }

    pub const fn rgba8888() -> Self {
        Self::preset(BytesPerPixel::Four, 0xff00_0000, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff)
    }

    pub const fn argb8888() -> Self {
        Self::preset(BytesPerPixel::Four, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0xff00_0000)
    }

    pub const fn bgra8888() -> Self {
        Self::preset(BytesPerPixel::Four, 0x0000_ff00, 0x00ff_0000, 0xff00_0000, 0x0000_00ff)
    }

    pub const fn rgb888() -> Self {
        Self::preset(BytesPerPixel::Three, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0)
    }

    pub const fn bgr888() -> Self {
        Self::preset(BytesPerPixel::Three, 0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0)
    }

    pub const fn rgb565() -> Self {
        Self::preset(BytesPerPixel::Two, 0xf800, 0x07e0, 0x001f, 0)
    }

    pub const fn rgb555() -> Self {
        Self::preset(BytesPerPixel::Two, 0x7c00, 0x03e0, 0x001f, 0)
    }

    pub const fn argb4444() -> Self {
        Self::preset(BytesPerPixel::Two, 0x0f00, 0x00f0, 0x000f, 0xf000)
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn bytes_per_pixel(&self) -> BytesPerPixel {
        self.bpp
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn red(&self) -> ChannelLayout {
        self.red
    }

    pub fn green(&self) -> ChannelLayout {
        self.green
    }

    pub fn blue(&self) -> ChannelLayout {
        self.blue
    }

    pub fn alpha(&self) -> ChannelLayout {
        self.alpha
    }

    /// Red, green, blue, alpha.
    pub fn channels(&self) -> [ChannelLayout; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_present()
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn is_indexed(&self) -> bool {
        self.bpp == BytesPerPixel::One
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} bytes per pixel ({:?} endian)",
            self.bpp.get(),
            self.order
        )?;
        match &self.palette {
            Some(p) => writeln!(f, "palette with {} colors", p.len())?,
            None => writeln!(f, "no palette")?,
        }
        for (name, ch) in [
            ("R", self.red),
            ("G", self.green),
            ("B", self.blue),
            ("A", self.alpha),
        ] {
            writeln!(
                f,
                "{name}: mask {:#010x} shift {} loss {}",
                ch.mask, ch.shift, ch.loss
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/format.rs"]
mod tests;
