use crate::canvas::Canvas;
use crate::config::TargetConfig;
use crate::error::RenderError;
use crate::shared::Cell;

/// Index-addressed surface a renderer draws into
#[derive(Debug, Clone)]
pub struct RenderTarget {
    pub label: String,
    pub canvas: Canvas,
}

impl RenderTarget {
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            canvas: Canvas::new(width, height),
        }
    }
}

impl From<&TargetConfig> for RenderTarget {
    fn from(config: &TargetConfig) -> Self {
        Self::new(config.label.clone(), config.width, config.height)
    }
}

/// Live render targets, addressed by `RenderContext::idx`
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    targets: Vec<RenderTarget>,
}

impl TargetSet {
    pub fn new(targets: Vec<RenderTarget>) -> Self {
        Self { targets }
    }

    pub fn push(&mut self, target: RenderTarget) -> u32 {
        self.targets.push(target);
        (self.targets.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, idx: u32) -> Option<&RenderTarget> {
        self.targets.get(idx as usize)
    }

    /// Look up a target for drawing. Never falls back to another index.
    pub fn resolve_mut(&mut self, idx: u32) -> Result<&mut RenderTarget, RenderError> {
        let count = self.targets.len();
        self.targets
            .get_mut(idx as usize)
            .ok_or(RenderError::InvalidTarget { idx, count })
    }

    pub fn clear_all(&mut self, color: Cell) {
        for target in &mut self.targets {
            target.canvas.clear(color);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderTarget> {
        self.targets.iter()
    }
}
