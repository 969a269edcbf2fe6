use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::draw::policy::RenderingPolicy;
use crate::foundation::core::ColorRecord;
use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::pixel::format::PixelFormat;
use crate::pixel::palette::Palette;
use crate::surface::clip::ClipRect;

/// Largest accepted canvas side, in pixels.
pub const MAX_SCENE_DIMENSION: u32 = 16_384;

/// Pixel formats a scene can ask for by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPreset {
    #[default]
    Rgba8888,
    Argb8888,
    Bgra8888,
    Rgb888,
    Bgr888,
    Rgb565,
    Rgb555,
    Argb4444,
    /// One byte per pixel over a 256-entry greyscale palette.
    Indexed8Grey,
}

impl FormatPreset {
    pub const ALL: [FormatPreset; 9] = [
        FormatPreset::Rgba8888,
        FormatPreset::Argb8888,
        FormatPreset::Bgra8888,
        FormatPreset::Rgb888,
        FormatPreset::Bgr888,
        FormatPreset::Rgb565,
        FormatPreset::Rgb555,
        FormatPreset::Argb4444,
        FormatPreset::Indexed8Grey,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormatPreset::Rgba8888 => "rgba8888",
            FormatPreset::Argb8888 => "argb8888",
            FormatPreset::Bgra8888 => "bgra8888",
            FormatPreset::Rgb888 => "rgb888",
            FormatPreset::Bgr888 => "bgr888",
            FormatPreset::Rgb565 => "rgb565",
            FormatPreset::Rgb555 => "rgb555",
            FormatPreset::Argb4444 => "argb4444",
            FormatPreset::Indexed8Grey => "indexed8_grey",
        }
    }

    pub fn pixel_format(self) -> SoftpixResult<PixelFormat> {
        Ok(match self {
            FormatPreset::Rgba8888 => PixelFormat::rgba8888(),
            FormatPreset::Argb8888 => PixelFormat::argb8888(),
            FormatPreset::Bgra8888 => PixelFormat::bgra8888(),
            FormatPreset::Rgb888 => PixelFormat::rgb888(),
            FormatPreset::Bgr888 => PixelFormat::bgr888(),
            FormatPreset::Rgb565 => PixelFormat::rgb565(),
            FormatPreset::Rgb555 => PixelFormat::rgb555(),
            FormatPreset::Argb4444 => PixelFormat::argb4444(),
            FormatPreset::Indexed8Grey => PixelFormat::indexed(Palette::greyscale(256)?),
        })
    }
}

impl fmt::Display for FormatPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatPreset {
    type Err = SoftpixError;

    fn from_str(s: &str) -> SoftpixResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
                SoftpixError::validation(format!(
                    "unknown format preset '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

fn default_true() -> bool {
    true
}

/// One drawing operation, tagged by `"op"` in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Pixel {
        x: i32,
        y: i32,
        color: ColorRecord,
        #[serde(default = "default_true")]
        blend: bool,
        #[serde(default = "default_true")]
        clip: bool,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: ColorRecord,
    },
    /// Stored without blending.
    Hline {
        x1: i32,
        x2: i32,
        y: i32,
        color: ColorRecord,
    },
    /// Stored without blending.
    Vline {
        x: i32,
        y1: i32,
        y2: i32,
        color: ColorRecord,
    },
    Circle {
        x: i32,
        y: i32,
        radius: i32,
        color: ColorRecord,
        #[serde(default)]
        filled: bool,
        #[serde(default = "default_true")]
        blended: bool,
    },
    /// Axis-aligned, half axes `rx` and `ry`.
    Ellipse {
        x: i32,
        y: i32,
        rx: i32,
        ry: i32,
        color: ColorRecord,
        #[serde(default)]
        filled: bool,
        #[serde(default = "default_true")]
        blended: bool,
    },
    DiscWithEdge {
        x: i32,
        y: i32,
        outer: i32,
        inner: i32,
        ring: ColorRecord,
        disc: ColorRecord,
        #[serde(default = "default_true")]
        blended: bool,
    },
    Cross {
        x: i32,
        y: i32,
        edge: u32,
        color: ColorRecord,
    },
}

impl DrawOp {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawOp::Pixel { .. } => "pixel",
            DrawOp::Line { .. } => "line",
            DrawOp::Hline { .. } => "hline",
            DrawOp::Vline { .. } => "vline",
            DrawOp::Circle { .. } => "circle",
            DrawOp::Ellipse { .. } => "ellipse",
            DrawOp::DiscWithEdge { .. } => "disc_with_edge",
            DrawOp::Cross { .. } => "cross",
        }
    }

    fn problem(&self) -> Option<String> {
        match *self {
            DrawOp::Circle { radius, .. } if radius < 0 => {
                Some(format!("radius must be >= 0, got {radius}"))
            }
            DrawOp::Ellipse { rx, ry, .. } if rx < 0 || ry < 0 => {
                Some(format!("half axes must be >= 0, got rx={rx} ry={ry}"))
            }
            DrawOp::DiscWithEdge { outer, inner, .. } if inner < 0 || inner >= outer => Some(
                format!("needs 0 <= inner < outer, got inner={inner} outer={outer}"),
            ),
            _ => None,
        }
    }
}

/// JSON-facing description of a canvas and what to draw on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub format: FormatPreset,
    /// Row stride in bytes; rows are padded to four bytes when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<usize>,
    /// Color stored in every pixel before any operation runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear: Option<ColorRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipRect>,
    #[serde(default)]
    pub policy: RenderingPolicy,
    #[serde(default)]
    pub ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new(width: u32, height: u32, format: FormatPreset) -> Self {
        Self {
            width,
            height,
            format,
            pitch: None,
            clear: None,
            clip: None,
            policy: RenderingPolicy::default(),
            ops: Vec::new(),
        }
    }

    pub fn from_json_str(s: &str) -> SoftpixResult<Self> {
        serde_json::from_str(s).map_err(|e| SoftpixError::serde(format!("parse scene JSON: {e}")))
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> SoftpixResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SoftpixError::serde(format!("parse scene JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> SoftpixResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SoftpixError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> SoftpixResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SoftpixError::validation("canvas width/height must be > 0"));
        }
        if self.width > MAX_SCENE_DIMENSION || self.height > MAX_SCENE_DIMENSION {
            return Err(SoftpixError::validation(format!(
                "canvas {}x{} exceeds the {MAX_SCENE_DIMENSION} pixel limit per side",
                self.width, self.height
            )));
        }
        if let Some(pitch) = self.pitch {
            let bpp = self.format.pixel_format()?.bytes_per_pixel().get();
            let row = self.width as usize * bpp;
            if pitch < row {
                return Err(SoftpixError::validation(format!(
                    "pitch {pitch} is smaller than the row size {row}"
                )));
            }
        }
        for (index, op) in self.ops.iter().enumerate() {
            if let Some(msg) = op.problem() {
                return Err(SoftpixError::validation(format!(
                    "op #{index} ({}): {msg}",
                    op.kind()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
