//! Steady, incompressible, inviscid aerodynamics core.
//!
//! Two classical potential-flow methods:
//! - a three-dimensional vortex-lattice method over horseshoe elements for
//!   lifting surfaces (`wing`, `vortex`, `vlm`), with near-field and
//!   Trefftz-plane force recovery, finite-difference stability-derivative
//!   sweeps, and streamline tracing;
//! - a two-dimensional constant-strength doublet-source panel method for
//!   airfoil sections (`foil`).
//!
//! The geometry pipeline runs leaves-first: airfoils → half-wing/wing
//! sections → quadrilateral panel meshes → horseshoes → influence matrix →
//! circulations → coefficients. All working storage of a solve is scoped to
//! a single `vlm::solve_case` call.

pub mod api;
pub mod errors;
pub mod foil;
pub mod geom;
pub mod vlm;
pub mod vortex;
pub mod wing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers share the crate's vector notation.
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::foil::{Airfoil, FoilCase, Uniform2D};
    pub use crate::geom::RigidTransform;
    pub use crate::vlm::{
        solve_case, solve_stability_case, streamlines, Aircraft, CaseOptions, CaseResults,
        Freestream, References, SolveError, StabilityResults,
    };
    pub use crate::vortex::{Horseshoe, Line, VortexRing};
    pub use crate::wing::{
        panel_halfwing, panel_wing, GeometryError, HalfWing, MeshConfig, Panel3, Spacing,
        SurfacePanels, Wing,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
