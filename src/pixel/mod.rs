//! Pixel formats, color conversion and single-pixel compositing.

/// Put/get of one pixel, with optional blending, clipping and locking.
pub mod compositor;
/// Color record to encoded pixel and back.
pub mod convert;
/// Channel layouts and format descriptions.
pub mod format;
pub(crate) mod io;
/// Named color constants.
pub mod named;
/// Indexed-color palettes.
pub mod palette;
