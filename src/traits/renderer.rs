use serde::Serialize;

use crate::context::{RenderContext, SkipReason};
use crate::error::RenderError;

/// Rectangle in viewport units (origin top-left, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewRect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

/// Record of one issued draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCall {
    /// Target index the draw went to
    pub target: u32,
    /// (columns, rows) of the drawn grid
    pub grid: (u32, u32),
    /// Non-transparent cells that wrote at least one pixel
    pub cells: usize,
    /// Pixels written into the target
    pub pixels: usize,
    /// Viewport area covered by the grid, clipped to the viewport
    pub covered: ViewRect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOutcome {
    Drawn(DrawCall),
    Skipped(SkipReason),
}

impl DrawOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn(_))
    }
}

/// Per-context results of one frame, in input order
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    pub results: Vec<Result<DrawOutcome, RenderError>>,
}

impl FrameReport {
    pub fn drawn(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r, Ok(DrawOutcome::Drawn(_))))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r, Ok(DrawOutcome::Skipped(_))))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.is_err()).count()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let entries: Vec<_> = self
            .results
            .iter()
            .map(|result| match result {
                Ok(outcome) => serde_json::json!({ "ok": outcome }),
                Err(err) => serde_json::json!({ "error": err.to_string() }),
            })
            .collect();

        serde_json::json!({
            "drawn": self.drawn(),
            "skipped": self.skipped(),
            "failed": self.failed(),
            "contexts": entries,
        })
    }
}

/// Consumer of render contexts
pub trait GridRenderer {
    /// Number of live render targets
    fn target_count(&self) -> usize;

    /// Draw one context.
    ///
    /// An out-of-range `idx` is an error reported before any drawing. An
    /// unsized or unconfigured context is `Skipped`, never an error.
    fn render(&mut self, ctx: &RenderContext) -> Result<DrawOutcome, RenderError>;

    /// Render every context independently; one failure does not stop the rest
    fn render_frame(&mut self, contexts: &[RenderContext]) -> FrameReport {
        FrameReport {
            results: contexts.iter().map(|ctx| self.render(ctx)).collect(),
        }
    }
}
