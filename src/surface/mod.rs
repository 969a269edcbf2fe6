//! Pixel stores and clip geometry.

/// Borrowed pixel buffer plus the lock seam.
pub mod buffer;
/// Clip rectangles and segment clipping.
pub mod clip;
/// Owned surface.
pub mod owned;
