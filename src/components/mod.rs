//! Reusable view components.

pub mod grid_particles;
