//! Earlier render context revisions.
//!
//! - v1: `grid`, `view_size`, `transform`
//! - v2: adds `idx` (defaults to 0) after `grid`
//! - v3 ([`RenderContext`]): `Grid` moved into [`crate::shared`], layout unchanged
//!
//! Old values convert losslessly into the current type, so call sites built
//! against an older revision keep working.

use glam::{Mat4, Vec2};

use crate::context::RenderContext;
// Earlier revisions reach the grid through its original crate-root path
use crate::Grid;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderContextV1 {
    pub grid: Grid,
    pub view_size: Vec2,
    pub transform: Mat4,
}

impl Default for RenderContextV1 {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            view_size: Vec2::ZERO,
            transform: Mat4::ZERO,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContextV2 {
    pub grid: Grid,
    pub idx: u32,
    pub view_size: Vec2,
    pub transform: Mat4,
}

impl Default for RenderContextV2 {
    fn default() -> Self {
        RenderContextV1::default().into()
    }
}

impl From<RenderContextV1> for RenderContextV2 {
    fn from(v1: RenderContextV1) -> Self {
        Self {
            grid: v1.grid,
            idx: 0,
            view_size: v1.view_size,
            transform: v1.transform,
        }
    }
}

impl From<RenderContextV2> for RenderContext {
    fn from(v2: RenderContextV2) -> Self {
        Self {
            grid: v2.grid,
            idx: v2.idx,
            view_size: v2.view_size,
            transform: v2.transform,
        }
    }
}

impl From<RenderContextV1> for RenderContext {
    fn from(v1: RenderContextV1) -> Self {
        RenderContextV2::from(v1).into()
    }
}
