use crate::foundation::core::EncodedPixel;
use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::foundation::math::Fnv1a64;
use crate::pixel::format::PixelFormat;
use crate::pixel::io::pixel_io;
use crate::surface::clip::ClipRect;

/// Lock protocol of whatever owns the pixel memory.
///
/// Auto-locking entry points bracket their writes with `lock`/`unlock` when `must_lock` is true.
pub trait SurfaceLock {
    fn must_lock(&self) -> bool;

    fn lock(&mut self) -> SoftpixResult<()>;

    fn unlock(&mut self);

    fn is_locked(&self) -> bool;
}

/// Borrowed view of a pixel store: dimensions, row pitch, format, clip rectangle and lock.
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    pitch: usize,
    format: &'a PixelFormat,
    clip: ClipRect,
    lock: Option<&'a mut dyn SurfaceLock>,
}

impl std::fmt::Debug for PixelBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pitch", &self.pitch)
            .field("bytes_per_pixel", &self.format.bytes_per_pixel())
            .field("clip", &self.clip)
            .field("has_lock", &self.lock.is_some())
            .finish()
    }
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as `height` rows of `pitch` bytes. The clip rectangle starts as the whole
    /// buffer.
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        pitch: usize,
        format: &'a PixelFormat,
    ) -> SoftpixResult<Self> {
        check_geometry(data.len(), width, height, pitch, format)?;
        Ok(Self::from_checked(data, width, height, pitch, format))
    }

    pub(crate) fn from_checked(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        pitch: usize,
        format: &'a PixelFormat,
    ) -> Self {
        Self {
            data,
            width,
            height,
            pitch,
            format,
            clip: ClipRect::full(width, height),
            lock: None,
        }
    }

    /// Restrict writes to `clip`, intersected with the buffer bounds.
    pub fn with_clip(mut self, clip: ClipRect) -> Self {
        self.set_clip(clip);
        self
    }

    pub fn with_lock(mut self, lock: &'a mut dyn SurfaceLock) -> Self {
        self.lock = Some(lock);
        self
    }

    pub fn set_clip(&mut self, clip: ClipRect) {
        self.clip = clip.intersect(&ClipRect::full(self.width, self.height));
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn format(&self) -> &'a PixelFormat {
        self.format
    }

    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel().get()
    }

    /// Raw bytes, padding included.
    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    /// Run `f` with the surface locked, when the owner requires locking.
    ///
    /// Nested calls inside `f` see no lock and run directly, so one `locked` call is one
    /// acquisition however many pixels `f` touches.
    pub fn locked<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> SoftpixResult<R> {
        let Some(lock) = self.lock.take() else {
            return Ok(f(self));
        };
        if !lock.must_lock() {
            self.lock = Some(lock);
            return Ok(f(self));
        }
        if let Err(err) = lock.lock() {
            tracing::debug!(%err, "surface lock failed, nothing drawn");
            self.lock = Some(lock);
            return Err(err);
        }
        let out = f(self);
        lock.unlock();
        self.lock = Some(lock);
        Ok(out)
    }

    /// Byte offset of `(x, y)`, or `None` outside the buffer dimensions.
    pub(crate) fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.pitch + x as usize * self.bytes_per_pixel())
    }

    pub(crate) fn load(&self, offset: usize) -> Option<EncodedPixel> {
        let bpp = self.format.bytes_per_pixel();
        let px = self.data.get(offset..offset + bpp.get())?;
        Some(EncodedPixel((pixel_io(bpp).load)(px, self.format.byte_order())))
    }

    /// Store `pixel` at `offset`. Returns `false` when the offset is past the allocation.
    pub(crate) fn store(&mut self, offset: usize, pixel: EncodedPixel) -> bool {
        let bpp = self.format.bytes_per_pixel();
        let order = self.format.byte_order();
        match self.data.get_mut(offset..offset + bpp.get()) {
            Some(px) => {
                (pixel_io(bpp).store)(px, order, pixel.0);
                true
            }
            None => false,
        }
    }

    pub(crate) fn bytes_mut(&mut self, range: std::ops::Range<usize>) -> Option<&mut [u8]> {
        self.data.get_mut(range)
    }

    /// FNV-1a hash of the visible bytes of every row; pitch padding is ignored.
    pub fn checksum(&self) -> u64 {
        checksum_rows(&self.data[..], self.width, self.height, self.pitch, self.format)
    }
}

pub(crate) fn check_geometry(
    len: usize,
    width: u32,
    height: u32,
    pitch: usize,
    format: &PixelFormat,
) -> SoftpixResult<()> {
    let row = width as usize * format.bytes_per_pixel().get();
    if pitch < row {
        return Err(SoftpixError::format(format!(
            "pitch {pitch} is smaller than the row size {row}"
        )));
    }
    let needed = match height {
        0 => 0,
        h => (h as usize - 1) * pitch + row,
    };
    if len < needed {
        return Err(SoftpixError::format(format!(
            "pixel store holds {len} bytes, {width}x{height} with pitch {pitch} needs {needed}"
        )));
    }
    Ok(())
}

pub(crate) fn checksum_rows(
    data: &[u8],
    width: u32,
    height: u32,
    pitch: usize,
    format: &PixelFormat,
) -> u64 {
    let row = width as usize * format.bytes_per_pixel().get();
    let mut h = Fnv1a64::new_default();
    h.write_u32(width);
    h.write_u32(height);
    for y in 0..height as usize {
        let start = y * pitch;
        if let Some(bytes) = data.get(start..start + row) {
            h.write_bytes(bytes);
        }
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/surface/buffer.rs"]
mod tests;
