//! Softpix is a software pixel compositing and rasterization engine.
//!
//! It draws into caller-owned pixel memory of any packed RGB(A) or 8-bit indexed layout:
//!
//! - Describe the memory with a [`PixelFormat`] and wrap it in a [`PixelBuffer`] (or allocate a
//!   [`Surface`])
//! - Put, get and alpha-blend single pixels through [`put_pixel`] and [`get_pixel`]
//! - Rasterize spans, lines, circles and ellipses with the [`draw`] module, clipped to a [`ClipRect`]
//! - Run whole JSON [`Scene`]s and export the result as PNG
#![forbid(unsafe_code)]

mod foundation;

/// Rasterization primitives.
pub mod draw;
/// PNG export of surfaces.
pub mod export;
pub mod pixel;
/// JSON scene model and runner.
pub mod scene;
pub mod surface;

pub use crate::foundation::core::{AlphaWeight, ColorRecord, EncodedPixel};
pub use crate::foundation::error::{SoftpixError, SoftpixResult};

pub use crate::draw::circle::draw_circle;
pub use crate::draw::ellipse::draw_ellipse;
pub use crate::draw::line::draw_line;
pub use crate::draw::policy::RenderingPolicy;
pub use crate::draw::shapes::{disc_with_edge, draw_cross};
pub use crate::draw::span::{hspan, vspan};
pub use crate::pixel::compositor::{PutOptions, get_color, get_pixel, put_color, put_pixel};
pub use crate::pixel::convert::{Paint, decode, encode};
pub use crate::pixel::format::{BytesPerPixel, ByteOrder, ChannelLayout, PixelFormat};
pub use crate::pixel::named::by_name as named_color;
pub use crate::pixel::palette::Palette;
pub use crate::scene::{DrawOp, FormatPreset, Scene, SceneStats};
pub use crate::surface::buffer::{PixelBuffer, SurfaceLock};
pub use crate::surface::clip::{ClipRect, Segment};
pub use crate::surface::owned::Surface;
