//! Lifting-surface geometry and panelling.
//!
//! `surface` composes half-wings and wings from sections; `mesh` subdivides
//! them into the quadrilateral panels the vortex-lattice solver consumes.

mod mesh;
mod surface;

pub use crate::errors::GeometryError;
pub use mesh::{panel_halfwing, panel_wing, MeshConfig, Panel3, Spacing, SurfacePanels};
pub use surface::{HalfWing, Wing};

#[cfg(test)]
mod tests;
