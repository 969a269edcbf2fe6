use std::path::Path;

use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::surface::owned::Surface;

/// Decode every pixel of `surface` into a straight-alpha RGBA8 image.
pub fn to_rgba_image(surface: &Surface) -> SoftpixResult<image::RgbaImage> {
    let (w, h) = (surface.width(), surface.height());
    let mut data = Vec::with_capacity(w as usize * h as usize * 4);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let c = surface.color_at(x, y).unwrap_or_default();
            data.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
    image::RgbaImage::from_raw(w, h, data)
        .ok_or_else(|| SoftpixError::format(format!("cannot build a {w}x{h} RGBA image")))
}

/// Write `surface` to `path` as PNG, creating the parent directory when missing.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_png(surface: &Surface, path: impl AsRef<Path>) -> SoftpixResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            SoftpixError::Other(anyhow::anyhow!(
                "create output dir '{}': {e}",
                parent.display()
            ))
        })?;
    }
    let img = to_rgba_image(surface)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SoftpixError::Other(anyhow::anyhow!("write png '{}': {e}", path.display())))?;
    tracing::debug!(width = img.width(), height = img.height(), "png written");
    Ok(())
}
