use serde::{Deserialize, Serialize};

/// Inclusive rectangle of pixels eligible for writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointClass {
    Inside,
    Outside,
}

/// Line segment between two inclusive endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn reversed(self) -> Self {
        Self::new(self.x2, self.y2, self.x1, self.y1)
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

// Each pass moves one endpoint onto an edge; valid input settles in at most four.
const MAX_CLIP_PASSES: u32 = 16;

impl ClipRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of `w` x `h` pixels starting at `(x, y)`. Zero sizes give an empty rectangle.
    pub fn from_xywh(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self::new(
            x,
            y,
            x.saturating_add(w as i32).saturating_sub(1),
            y.saturating_add(h as i32).saturating_sub(1),
        )
    }

    /// Whole `width` x `height` buffer.
    pub fn full(width: u32, height: u32) -> Self {
        Self::from_xywh(0, 0, width, height)
    }

    /// Rectangle that contains nothing.
    pub const fn empty() -> Self {
        Self::new(0, 0, -1, -1)
    }

    pub fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.right.abs_diff(self.left).saturating_add(1)
        }
    }

    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.bottom.abs_diff(self.top).saturating_add(1)
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn classify_point(&self, x: i32, y: i32) -> PointClass {
        if self.contains(x, y) {
            PointClass::Inside
        } else {
            PointClass::Outside
        }
    }

    /// Overlap of two rectangles, or [`ClipRect::empty`] when they are disjoint.
    pub fn intersect(&self, other: &ClipRect) -> ClipRect {
        let r = ClipRect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if r.is_empty() { ClipRect::empty() } else { r }
    }

    /// Whether `[x1, x2] x [y1, y2]` (either order) touches the rectangle.
    pub fn overlaps_box(&self, x1: i64, y1: i64, x2: i64, y2: i64) -> bool {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        x2 >= i64::from(self.left)
            && x1 <= i64::from(self.right)
            && y2 >= i64::from(self.top)
            && y1 <= i64::from(self.bottom)
    }

    /// Whether the box reaching `half_w` columns and `half_h` rows out from `(cx, cy)` touches
    /// the rectangle.
    pub fn overlaps_around(&self, cx: i32, cy: i32, half_w: i32, half_h: i32) -> bool {
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let (hw, hh) = (i64::from(half_w), i64::from(half_h));
        self.overlaps_box(cx - hw, cy - hh, cx + hw, cy + hh)
    }

    /// Offsets from column `cx` to the first and last clip column, widened to 64-bit.
    pub(crate) fn column_offsets(&self, cx: i32) -> (i64, i64) {
        let cx = i64::from(cx);
        (i64::from(self.left) - cx, i64::from(self.right) - cx)
    }

    /// Offsets from row `cy` to the first and last clip row, widened to 64-bit.
    pub(crate) fn row_offsets(&self, cy: i32) -> (i64, i64) {
        let cy = i64::from(cy);
        (i64::from(self.top) - cy, i64::from(self.bottom) - cy)
    }

    /// Pixel at offset `(dx, dy)` from `(cx, cy)`, when it falls inside.
    pub(crate) fn offset_point(&self, cx: i32, cy: i32, dx: i64, dy: i64) -> Option<(i32, i32)> {
        let (x, y) = (i64::from(cx) + dx, i64::from(cy) + dy);
        (self.outcode(x, y) == 0).then_some((x as i32, y as i32))
    }

    /// Run of column offsets `from..=to` on row offset `dy`, relative to `(cx, cy)` and trimmed
    /// to the rectangle. Yields absolute `(x1, x2, y)`.
    pub(crate) fn offset_run(
        &self,
        cx: i32,
        cy: i32,
        dy: i64,
        from: i64,
        to: i64,
    ) -> Option<(i32, i32, i32)> {
        let (left, right) = self.column_offsets(cx);
        let (top, bottom) = self.row_offsets(cy);
        let (a, b) = (from.max(left), to.min(right));
        if a > b || dy < top || dy > bottom {
            return None;
        }
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        Some(((cx + a) as i32, (cx + b) as i32, (cy + dy) as i32))
    }

    /// Trim a horizontal run to the rectangle, normalizing endpoint order first.
    pub fn clip_hspan(&self, x1: i32, x2: i32, y: i32) -> Option<(i32, i32)> {
        if y < self.top || y > self.bottom {
            return None;
        }
        let (a, b) = (x1.min(x2).max(self.left), x1.max(x2).min(self.right));
        (a <= b).then_some((a, b))
    }

    /// Trim a vertical run to the rectangle, normalizing endpoint order first.
    pub fn clip_vspan(&self, x: i32, y1: i32, y2: i32) -> Option<(i32, i32)> {
        if x < self.left || x > self.right {
            return None;
        }
        let (a, b) = (y1.min(y2).max(self.top), y1.max(y2).min(self.bottom));
        (a <= b).then_some((a, b))
    }

    fn outcode(&self, x: i64, y: i64) -> u8 {
        let mut code = 0;
        if x < i64::from(self.left) {
            code |= LEFT;
        } else if x > i64::from(self.right) {
            code |= RIGHT;
        }
        if y < i64::from(self.top) {
            code |= TOP;
        } else if y > i64::from(self.bottom) {
            code |= BOTTOM;
        }
        code
    }

    /// Cohen-Sutherland clipping.
    ///
    /// Returns the visible part of `seg` with endpoints in the caller's order, or `None` when
    /// the segment lies entirely outside. Vertical segments use a unit slope. The walk runs in
    /// 64-bit so endpoints anywhere in the `i32` plane are accepted.
    pub fn clip_line(&self, seg: Segment) -> Option<Segment> {
        let (mut x1, mut y1) = (i64::from(seg.x1), i64::from(seg.y1));
        let (mut x2, mut y2) = (i64::from(seg.x2), i64::from(seg.y2));
        let (left, right) = (i64::from(self.left), i64::from(self.right));
        let (top, bottom) = (i64::from(self.top), i64::from(self.bottom));
        let mut swapped = false;

        for _ in 0..MAX_CLIP_PASSES {
            let mut code1 = self.outcode(x1, y1);
            let mut code2 = self.outcode(x2, y2);

            if code1 | code2 == 0 {
                // both endpoints are inside the rectangle, so they fit in i32
                let out = Segment::new(x1 as i32, y1 as i32, x2 as i32, y2 as i32);
                return Some(if swapped { out.reversed() } else { out });
            }
            if code1 & code2 != 0 {
                return None;
            }

            // Always walk the first endpoint; make sure it is the outside one.
            if code1 == 0 {
                std::mem::swap(&mut x1, &mut x2);
                std::mem::swap(&mut y1, &mut y2);
                std::mem::swap(&mut code1, &mut code2);
                swapped = !swapped;
            }

            let m = if x2 != x1 {
                (y2 - y1) as f64 / (x2 - x1) as f64
            } else {
                1.0
            };

            if code1 & LEFT != 0 {
                y1 += ((left - x1) as f64 * m) as i64;
                x1 = left;
            } else if code1 & RIGHT != 0 {
                y1 += ((right - x1) as f64 * m) as i64;
                x1 = right;
            } else if code1 & BOTTOM != 0 {
                if x2 != x1 {
                    x1 += ((bottom - y1) as f64 / m) as i64;
                }
                y1 = bottom;
            } else if code1 & TOP != 0 {
                if x2 != x1 {
                    x1 += ((top - y1) as f64 / m) as i64;
                }
                y1 = top;
            }
        }

        tracing::trace!(?seg, "clip_line did not settle, rejecting segment");
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/clip.rs"]
mod tests;
