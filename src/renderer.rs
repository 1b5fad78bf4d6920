use glam::Vec2;
use log::{debug, trace, warn};

use crate::config::RendererConfig;
use crate::context::{Readiness, RenderContext};
use crate::error::RenderError;
use crate::shared::Cell;
use crate::target::{RenderTarget, TargetSet};
use crate::traits::{DrawCall, DrawOutcome, GridRenderer, ViewRect};

/// Software grid renderer drawing into CPU canvases
///
/// Each cell is mapped through the context transform, scaled from viewport
/// units to target pixels and filled as its axis-aligned pixel bounds.
#[derive(Debug, Clone)]
pub struct CanvasRenderer {
    targets: TargetSet,
    clear_color: Cell,
    draws: Vec<DrawCall>,
}

impl CanvasRenderer {
    pub fn new(targets: Vec<RenderTarget>, clear_color: Cell) -> Self {
        Self {
            targets: TargetSet::new(targets),
            clear_color,
            draws: Vec::new(),
        }
    }

    pub fn from_config(config: &RendererConfig) -> Self {
        let targets = config.targets.iter().map(RenderTarget::from).collect();
        Self::new(targets, config.clear_color)
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Draws issued since the last `begin_frame`
    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Clear every target and forget previous draws
    pub fn begin_frame(&mut self) {
        self.targets.clear_all(self.clear_color);
        self.draws.clear();
    }

    fn draw(target: &mut RenderTarget, idx: u32, ctx: &RenderContext) -> DrawCall {
        let (width, height) = target.canvas.dimensions();
        let scale = Vec2::new(width as f32, height as f32) / ctx.view_size;

        let mut cells = 0;
        let mut pixels = 0;
        for (x, y, cell) in ctx.grid.iter_cells() {
            if cell[3] == 0 {
                continue;
            }
            let (min, max) = ctx.grid.cell_bounds(x, y);
            let Some((lo, hi)) = viewport_bounds(ctx, min, max) else {
                continue;
            };

            let lo = (lo * scale).round().max(Vec2::ZERO);
            let hi = (hi * scale).round().max(Vec2::ZERO);
            let written = target
                .canvas
                .fill_rect(lo.x as u32, lo.y as u32, hi.x as u32, hi.y as u32, cell);
            if written > 0 {
                cells += 1;
                pixels += written;
            }
        }

        let covered = viewport_bounds(ctx, Vec2::splat(-1.0), Vec2::ONE)
            .map(|(lo, hi)| ViewRect {
                min: lo.clamp(Vec2::ZERO, ctx.view_size).to_array(),
                max: hi.clamp(Vec2::ZERO, ctx.view_size).to_array(),
            })
            .unwrap_or(ViewRect {
                min: [0.0; 2],
                max: [0.0; 2],
            });

        DrawCall {
            target: idx,
            grid: ctx.grid.dimensions(),
            cells,
            pixels,
            covered,
        }
    }
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::from_config(&RendererConfig::default())
    }
}

/// Axis-aligned viewport bounds of a transformed grid-space rectangle
fn viewport_bounds(ctx: &RenderContext, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        Vec2::new(max.x, max.y),
    ];

    corners.iter().try_fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(lo, hi), &corner| {
            let p = ctx.grid_to_viewport(corner)?;
            Some((lo.min(p), hi.max(p)))
        },
    )
}

impl GridRenderer for CanvasRenderer {
    fn target_count(&self) -> usize {
        self.targets.len()
    }

    fn render(&mut self, ctx: &RenderContext) -> Result<DrawOutcome, RenderError> {
        let target = self.targets.resolve_mut(ctx.idx).inspect_err(|err| {
            warn!("{err}");
        })?;

        if let Readiness::Skip(reason) = ctx.readiness() {
            debug!("skipping context for target {}: {reason:?}", ctx.idx);
            return Ok(DrawOutcome::Skipped(reason));
        }

        let call = Self::draw(target, ctx.idx, ctx);
        trace!(
            "drew {} cells ({} px) into target {} '{}'",
            call.cells,
            call.pixels,
            ctx.idx,
            target.label
        );
        self.draws.push(call.clone());
        Ok(DrawOutcome::Drawn(call))
    }
}
