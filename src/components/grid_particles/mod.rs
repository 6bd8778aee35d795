//! Pointer-reactive lattice drawn on a full-viewport canvas.

mod color;
mod component;
mod config;
mod error;
mod grid;
mod pointer;
pub mod render;
mod sizing;
mod state;

pub use color::{FALLBACK_RGB, Rgb, resolve_color};
pub use component::{FrameLoop, GridParticles};
pub use config::{GridConfig, GridProps};
pub use error::SurfaceError;
pub use grid::{Connection, Grid, GridNode};
pub use pointer::{OFF_SURFACE, PointerState};
pub use render::Surface;
pub use sizing::{GridDimensions, Viewport};
pub use state::GridParticlesState;
