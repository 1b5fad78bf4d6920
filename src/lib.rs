pub mod canvas;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod renderer;
pub mod revision;
pub mod shared;
pub mod target;
pub mod traits;

pub use context::{ContextUniform, Readiness, RenderContext, SkipReason, TransformState};
pub use error::{ConfigError, RenderError};
pub use renderer::CanvasRenderer;
/// Pre-relocation path of [`shared::Grid`]. Revisions 1 and 2 named the grid
/// here; it stays as an alias so the move into `shared` changes no layout.
pub use shared::Grid;
pub use traits::{DrawCall, DrawOutcome, FrameReport, GridRenderer};
