use serde::Serialize;

use crate::draw::circle::draw_circle;
use crate::draw::ellipse::draw_ellipse;
use crate::draw::line::draw_line;
use crate::draw::policy::RenderingPolicy;
use crate::draw::shapes::{disc_with_edge, draw_cross};
use crate::draw::span::{hspan, vspan};
use crate::foundation::error::SoftpixResult;
use crate::pixel::compositor::{PutOptions, put_pixel};
use crate::pixel::convert::{Paint, encode};
use crate::scene::model::{DrawOp, Scene};
use crate::surface::owned::Surface;

/// Counters gathered while running a scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SceneStats {
    pub ops_executed: usize,
    /// Operations that ran but touched nothing because they lay outside the clip rectangle.
    pub ops_clipped_out: usize,
}

impl Scene {
    /// Validate, allocate the canvas, clear it, apply the clip and run every operation in order.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height, ops = self.ops.len()))]
    pub fn render(&self) -> SoftpixResult<(Surface, SceneStats)> {
        self.validate()?;

        let format = self.format.pixel_format()?;
        let mut surface = match self.pitch {
            Some(pitch) => Surface::with_pitch(self.width, self.height, pitch, format)?,
            None => Surface::new(self.width, self.height, format)?,
        };
        if let Some(color) = self.clear {
            surface.fill(color)?;
        }
        if let Some(clip) = self.clip {
            surface.set_clip(clip);
        }

        let mut stats = SceneStats::default();
        for (index, op) in self.ops.iter().enumerate() {
            let visible = run_op(&mut surface, op, &self.policy).inspect_err(|err| {
                tracing::warn!(index, op = op.kind(), %err, "scene op failed");
            })?;
            stats.ops_executed += 1;
            if !visible {
                stats.ops_clipped_out += 1;
            }
        }

        tracing::debug!(?stats, "scene rendered");
        Ok((surface, stats))
    }
}

/// Run one operation; `Ok(false)` when it lay entirely outside the clip rectangle.
fn run_op(surface: &mut Surface, op: &DrawOp, policy: &RenderingPolicy) -> SoftpixResult<bool> {
    let clip = surface.clip();
    let paint = |surface: &Surface, color| Paint::from_color(surface.format(), color);

    match *op {
        DrawOp::Pixel {
            x,
            y,
            color,
            blend,
            clip: clip_on,
        } => {
            let p = paint(surface, color);
            let opts = PutOptions {
                blend,
                clip: clip_on,
                auto_lock: true,
            };
            put_pixel(&mut surface.buffer(), x, y, p.pixel, p.alpha, opts)?;
            Ok(clip.contains(x, y))
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        } => {
            let p = paint(surface, color);
            draw_line(&mut surface.buffer(), x1, y1, x2, y2, p, policy)
        }
        DrawOp::Hline { x1, x2, y, color } => {
            let pixel = encode(surface.format(), color);
            hspan(&mut surface.buffer(), x1, x2, y, pixel)?;
            Ok(clip.clip_hspan(x1, x2, y).is_some())
        }
        DrawOp::Vline { x, y1, y2, color } => {
            let pixel = encode(surface.format(), color);
            vspan(&mut surface.buffer(), x, y1, y2, pixel)?;
            Ok(clip.clip_vspan(x, y1, y2).is_some())
        }
        DrawOp::Circle {
            x,
            y,
            radius,
            color,
            filled,
            blended,
        } => {
            let p = paint(surface, color);
            draw_circle(&mut surface.buffer(), x, y, radius, p, filled, blended, policy)?;
            Ok(clip.overlaps_around(x, y, radius, radius))
        }
        DrawOp::Ellipse {
            x,
            y,
            rx,
            ry,
            color,
            filled,
            blended,
        } => {
            let p = paint(surface, color);
            draw_ellipse(&mut surface.buffer(), x, y, rx, ry, p, filled, blended, policy)?;
            Ok(clip.overlaps_around(x, y, rx, ry))
        }
        DrawOp::DiscWithEdge {
            x,
            y,
            outer,
            inner,
            ring,
            disc,
            blended,
        } => {
            let ring = paint(surface, ring);
            let disc = paint(surface, disc);
            disc_with_edge(&mut surface.buffer(), x, y, outer, inner, ring, disc, blended)?;
            Ok(clip.overlaps_around(x, y, outer, outer))
        }
        DrawOp::Cross { x, y, edge, color } => {
            let p = paint(surface, color);
            draw_cross(&mut surface.buffer(), x, y, edge, p, policy)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
