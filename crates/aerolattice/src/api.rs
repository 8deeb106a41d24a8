//! Curated re-export surface.
//!
//! Prefer these re-exports for clarity and consistency across downstream
//! drivers and experiments; `crate::prelude` carries the same set for glob
//! imports.

// 2D airfoil pipeline
pub use crate::foil::{solve_foil_case, Airfoil, CamberStation, FoilCase, Uniform2D};
// Spacing and placement helpers
pub use crate::geom::{
    cosine_spacing, sine_spacing, uniform_spacing, weighted, weighted_point, RigidTransform,
};
// Lifting-surface geometry and panelling
pub use crate::wing::{
    panel_halfwing, panel_wing, GeometryError, HalfWing, MeshConfig, Panel3, Spacing,
    SurfacePanels, Wing,
};
// Vortex primitives
pub use crate::vortex::{Horseshoe, Line, VortexRing};
// VLM solver and post-processing
pub use crate::vlm::{
    solve_case, solve_case_with, solve_stability_case, streamlines, Aircraft, CaseOptions,
    CaseResults, ComponentResult, Freestream, References, SolveError, StabilityResults,
};
