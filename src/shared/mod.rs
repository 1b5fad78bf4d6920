//! Types shared between the host application and the grid layer.

pub mod grid;

pub use grid::{Cell, Grid};
