use crate::foundation::core::ColorRecord;
use crate::foundation::error::{SoftpixError, SoftpixResult};

pub const MAX_PALETTE_COLORS: usize = 256;

/// Color table of an indexed (one byte per pixel) format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ColorRecord>,
}

impl Palette {
    pub fn new(colors: Vec<ColorRecord>) -> SoftpixResult<Self> {
        if colors.is_empty() || colors.len() > MAX_PALETTE_COLORS {
            return Err(SoftpixError::format(format!(
                "palette must hold 1..={MAX_PALETTE_COLORS} colors, got {}",
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// `n` shades from black to white.
    pub fn greyscale(n: usize) -> SoftpixResult<Self> {
        Self::gradation(ColorRecord::rgb(0, 0, 0), ColorRecord::rgb(255, 255, 255), n)
    }

    /// `n` colors stepping linearly from `start` toward `end`.
    ///
    /// Each step is rounded up, so a 256-entry black-to-white gradation ends exactly on white.
    pub fn gradation(start: ColorRecord, end: ColorRecord, n: usize) -> SoftpixResult<Self> {
        if n == 0 || n > MAX_PALETTE_COLORS {
            return Err(SoftpixError::format(format!(
                "palette must hold 1..={MAX_PALETTE_COLORS} colors, got {n}"
            )));
        }

        let step = |s: u8, e: u8, c: usize| -> u8 {
            let inc = (f32::from(e) - f32::from(s)) / n as f32;
            (f32::from(s) + inc * c as f32).ceil().clamp(0.0, 255.0) as u8
        };

        let colors = (0..n)
            .map(|c| {
                ColorRecord::rgba(
                    step(start.r, end.r, c),
                    step(start.g, end.g, c),
                    step(start.b, end.b, c),
                    step(start.a, end.a, c),
                )
            })
            .collect();
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[ColorRecord] {
        &self.colors
    }

    /// Entry at `index`; indices past the end read as opaque black.
    pub fn get(&self, index: u8) -> ColorRecord {
        self.colors
            .get(usize::from(index))
            .copied()
            .unwrap_or(ColorRecord::rgb(0, 0, 0))
    }

    /// Index of the entry closest to `color` in RGB; ties keep the lowest index.
    pub fn nearest_index(&self, color: ColorRecord) -> u8 {
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let d = c.distance_sq(color);
            if d < best_dist {
                best = i;
                best_dist = d;
                if d == 0 {
                    break;
                }
            }
        }
        best as u8
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/palette.rs"]
mod tests;
