use std::fmt;

use serde::{Deserialize, Serialize};

/// Format-independent color with four 8-bit channels.
///
/// Alpha 0 is fully transparent, 255 fully opaque. The derived ordering compares red, then green,
/// then blue, then alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ColorRecord {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRecord {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Compare color channels only, ignoring alpha.
    pub fn eq_rgb(self, other: Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Pack as `0xRRGGBBAA`, independent of any pixel format.
    pub fn to_raw(self) -> u32 {
        (u32::from(self.r) << 24)
            | (u32::from(self.g) << 16)
            | (u32::from(self.b) << 8)
            | u32::from(self.a)
    }

    pub fn from_raw(raw: u32) -> Self {
        Self::rgba(
            (raw >> 24) as u8,
            (raw >> 16) as u8,
            (raw >> 8) as u8,
            raw as u8,
        )
    }

    /// First of red, green, blue and black whose RGB differs from every color in `avoid`.
    ///
    /// Up to three colors to avoid always leave one candidate.
    pub fn select_different_from(avoid: &[ColorRecord]) -> ColorRecord {
        const CANDIDATES: [ColorRecord; 4] = [
            ColorRecord::rgb(255, 0, 0),
            ColorRecord::rgb(0, 255, 0),
            ColorRecord::rgb(0, 0, 255),
            ColorRecord::rgb(0, 0, 0),
        ];

        CANDIDATES
            .into_iter()
            .find(|c| avoid.iter().all(|a| !c.eq_rgb(*a)))
            .unwrap_or(CANDIDATES[3])
    }

    /// Squared RGB distance, used for nearest-palette lookups.
    pub fn distance_sq(self, other: Self) -> u32 {
        let d = |x: u8, y: u8| {
            let v = i32::from(x) - i32::from(y);
            (v * v) as u32
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[R;G;B;A] = [ {} ; {} ; {} ; {} ]",
            self.r, self.g, self.b, self.a
        )
    }
}

impl<'de> Deserialize<'de> for ColorRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => parse_text(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_text(s: &str) -> Result<ColorRecord, String> {
    let s = s.trim();
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => crate::pixel::named::by_name(s).ok_or_else(|| format!("unknown color name \"{s}\"")),
    }
}

fn parse_hex(s: &str) -> Result<ColorRecord, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(ColorRecord::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(ColorRecord::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Pixel value whose bit layout belongs to exactly one pixel format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodedPixel(pub u32);

impl fmt::Display for EncodedPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Per-pixel coverage or opacity weight, 0..=255.
pub type AlphaWeight = u8;

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
