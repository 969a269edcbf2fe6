use crate::draw::span::hspan;
use crate::foundation::core::{ColorRecord, EncodedPixel};
use crate::foundation::error::{SoftpixError, SoftpixResult};
use crate::pixel::convert::{decode, encode};
use crate::pixel::format::PixelFormat;
use crate::surface::buffer::{PixelBuffer, SurfaceLock, check_geometry, checksum_rows};
use crate::surface::clip::ClipRect;

/// Lock bookkeeping of a [`Surface`].
///
/// `busy` simulates an owner that cannot hand out its memory right now.
#[derive(Clone, Debug, Default)]
pub struct LockState {
    must_lock: bool,
    depth: u32,
    acquisitions: u64,
    busy: bool,
}

impl SurfaceLock for LockState {
    fn must_lock(&self) -> bool {
        self.must_lock
    }

    fn lock(&mut self) -> SoftpixResult<()> {
        if self.busy {
            return Err(SoftpixError::lock("surface memory is busy"));
        }
        self.depth += 1;
        self.acquisitions += 1;
        Ok(())
    }

    fn unlock(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn is_locked(&self) -> bool {
        self.depth > 0
    }
}

/// Owned pixel store with its format, clip rectangle and lock state.
#[derive(Clone, Debug)]
pub struct Surface {
    data: Vec<u8>,
    width: u32,
    height: u32,
    pitch: usize,
    format: PixelFormat,
    clip: ClipRect,
    lock: LockState,
}

impl Surface {
    /// Zeroed surface with rows padded to a multiple of four bytes.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> SoftpixResult<Self> {
        let row = width as usize * format.bytes_per_pixel().get();
        Self::with_pitch(width, height, row.next_multiple_of(4), format)
    }

    pub fn with_pitch(
        width: u32,
        height: u32,
        pitch: usize,
        format: PixelFormat,
    ) -> SoftpixResult<Self> {
        let len = pitch
            .checked_mul(height as usize)
            .ok_or_else(|| SoftpixError::format("surface size overflows"))?;
        check_geometry(len, width, height, pitch, &format)?;
        tracing::debug!(width, height, pitch, "surface allocated");
        Ok(Self {
            data: vec![0; len],
            width,
            height,
            pitch,
            format,
            clip: ClipRect::full(width, height),
            lock: LockState::default(),
        })
    }

    /// Borrowed view for drawing, carrying this surface's clip rectangle and lock.
    pub fn buffer(&mut self) -> PixelBuffer<'_> {
        let clip = self.clip;
        PixelBuffer::from_checked(
            &mut self.data,
            self.width,
            self.height,
            self.pitch,
            &self.format,
        )
        .with_clip(clip)
        .with_lock(&mut self.lock)
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

    pub fn format(&self) -> &PixelFormat {
        &self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    /// Set the clip rectangle, intersected with the surface bounds.
    pub fn set_clip(&mut self, clip: ClipRect) {
        self.clip = clip.intersect(&ClipRect::full(self.width, self.height));
    }

    pub fn reset_clip(&mut self) {
        self.clip = ClipRect::full(self.width, self.height);
    }

    pub fn set_must_lock(&mut self, must_lock: bool) {
        self.lock.must_lock = must_lock;
    }

    pub fn set_lock_busy(&mut self, busy: bool) {
        self.lock.busy = busy;
    }

    /// Number of successful lock acquisitions so far.
    pub fn lock_acquisitions(&self) -> u64 {
        self.lock.acquisitions
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Store `color` in every pixel of the clip rectangle, without blending.
    pub fn fill(&mut self, color: ColorRecord) -> SoftpixResult<()> {
        let pixel = encode(&self.format, color);
        let clip = self.clip;
        let mut buf = self.buffer();
        for y in clip.top..=clip.bottom {
            hspan(&mut buf, clip.left, clip.right, y, pixel)?;
        }
        Ok(())
    }

    pub fn pixel_at(&self, x: i32, y: i32) -> Option<EncodedPixel> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let off = y as usize * self.pitch + x as usize * bpp.get();
        let px = self.data.get(off..off + bpp.get())?;
        Some(EncodedPixel((crate::pixel::io::pixel_io(bpp).load)(
            px,
            self.format.byte_order(),
        )))
    }

    pub fn color_at(&self, x: i32, y: i32) -> Option<ColorRecord> {
        self.pixel_at(x, y).map(|p| decode(&self.format, p))
    }

    /// Same hash as [`PixelBuffer::checksum`] over this surface.
    pub fn checksum(&self) -> u64 {
        checksum_rows(&self.data, self.width, self.height, self.pitch, &self.format)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/owned.rs"]
mod tests;
