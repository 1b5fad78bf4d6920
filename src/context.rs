use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
use serde::Serialize;

use crate::shared::Grid;

/// Transforms whose planar |determinant| is at or below this are treated as degenerate
pub const DEGENERATE_EPSILON: f32 = 1e-10;

/// Per-frame description of one grid draw into one render target.
///
/// Every field has a default that keeps older call sites valid: a fresh
/// context carries an empty grid, targets index 0, is unsized and has the
/// zero-matrix "not configured" transform. Such a context is legal to pass to
/// a renderer; it is simply skipped.
///
/// Field order and `repr(C)` are part of the contract, see [`crate::revision`].
#[repr(C)]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    /// Content to render
    pub grid: Grid,
    /// Index into the renderer's live target set
    pub idx: u32,
    /// Logical (width, height) of the target in renderer units
    pub view_size: Vec2,
    /// Grid space -> clip space. `Mat4::ZERO` means "not configured".
    pub transform: Mat4,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            idx: 0,
            view_size: Vec2::ZERO,
            transform: Mat4::ZERO,
        }
    }
}

/// How usable the context's transform is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformState {
    /// Exactly the zero sentinel
    Unconfigured,
    /// Contains NaN or infinity
    NonFinite,
    /// Finite but (near) singular on the grid plane
    Degenerate,
    Usable,
}

/// Why a context produced no draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    Unsized,
    UnconfiguredTransform,
    NonFiniteTransform,
    DegenerateTransform,
    EmptyGrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Skip(SkipReason),
}

impl RenderContext {
    /// Context for `grid` with every other field at its default
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn with_idx(mut self, idx: u32) -> Self {
        self.idx = idx;
        self
    }

    pub fn with_view_size(mut self, view_size: Vec2) -> Self {
        self.view_size = view_size;
        self
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Both viewport components are finite and strictly positive
    pub fn is_sized(&self) -> bool {
        self.view_size.is_finite() && self.view_size.x > 0.0 && self.view_size.y > 0.0
    }

    pub fn transform_state(&self) -> TransformState {
        if self.transform == Mat4::ZERO {
            TransformState::Unconfigured
        } else if !self.transform.is_finite() {
            TransformState::NonFinite
        } else if self.planar_determinant().abs() <= DEGENERATE_EPSILON {
            TransformState::Degenerate
        } else {
            TransformState::Usable
        }
    }

    /// Determinant of the x/y/w part of `transform`.
    ///
    /// Grid points have z = 0 and only clip x, y and w reach the viewport, so
    /// a transform that flattens z is still usable.
    pub fn planar_determinant(&self) -> f32 {
        let m = &self.transform;
        Mat3::from_cols(
            Vec3::new(m.x_axis.x, m.x_axis.y, m.x_axis.w),
            Vec3::new(m.y_axis.x, m.y_axis.y, m.y_axis.w),
            Vec3::new(m.w_axis.x, m.w_axis.y, m.w_axis.w),
        )
        .determinant()
    }

    /// Whether a renderer should draw this context. Sizing is checked first.
    pub fn readiness(&self) -> Readiness {
        if !self.is_sized() {
            return Readiness::Skip(SkipReason::Unsized);
        }
        let reason = match self.transform_state() {
            TransformState::Usable if self.grid.is_empty() => SkipReason::EmptyGrid,
            TransformState::Usable => return Readiness::Ready,
            TransformState::Unconfigured => SkipReason::UnconfiguredTransform,
            TransformState::NonFinite => SkipReason::NonFiniteTransform,
            TransformState::Degenerate => SkipReason::DegenerateTransform,
        };
        Readiness::Skip(reason)
    }

    /// Map a normalized grid-space point into viewport coordinates.
    ///
    /// The result has its origin at the top-left corner with +y down, in the
    /// same units as `view_size`. Returns `None` if the projected `w` is zero.
    pub fn grid_to_viewport(&self, point: Vec2) -> Option<Vec2> {
        let clip = self.transform * Vec4::new(point.x, point.y, 0.0, 1.0);
        if clip.w == 0.0 {
            return None;
        }
        let ndc = Vec2::new(clip.x, clip.y) / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.view_size.x,
            (1.0 - ndc.y) * 0.5 * self.view_size.y,
        ))
    }

    /// Flatten into GPU uniform layout
    pub fn to_uniform(&self) -> ContextUniform {
        let (grid_cols, grid_rows) = self.grid.dimensions();
        ContextUniform {
            transform: self.transform.to_cols_array_2d(),
            view_size: self.view_size.to_array(),
            idx: self.idx,
            grid_cols,
            grid_rows,
            _pad: [0; 3],
        }
    }
}

/// Render context uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ContextUniform {
    pub transform: [[f32; 4]; 4],
    pub view_size: [f32; 2],
    pub idx: u32,
    pub grid_cols: u32,
    pub grid_rows: u32,
    pub _pad: [u32; 3], // Pad to 16-byte multiple
}
