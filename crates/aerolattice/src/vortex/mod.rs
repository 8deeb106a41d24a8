//! Vortex filament primitives and Biot-Savart velocity kernels.
//!
//! Numerics
//! - The bound-filament kernel uses the Moran form, which stays finite on
//!   the filament's extension and switches off inside the core radius
//!   `CORE_EPS`. A point exactly on the segment, or collinear beyond it,
//!   sees zero induced velocity.
//! - Horseshoe trailing legs are semi-infinite and aligned with a unit
//!   direction supplied at evaluation time (the freestream direction).

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::geom::weighted_point;
use crate::wing::Panel3;

/// Core radius below which induced velocities are zeroed.
pub const CORE_EPS: f64 = 1e-8;

const FOUR_PI: f64 = 4.0 * std::f64::consts::PI;

/// A straight vortex filament of unit strength from `r1` to `r2`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Line {
    pub r1: Vector3<f64>,
    pub r2: Vector3<f64>,
}

impl Line {
    pub fn new(r1: Vector3<f64>, r2: Vector3<f64>) -> Self {
        Self { r1, r2 }
    }

    /// Filament vector `r2 - r1`.
    #[inline]
    pub fn vector(&self) -> Vector3<f64> {
        self.r2 - self.r1
    }

    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        0.5 * (self.r1 + self.r2)
    }

    /// Unit-strength induced velocity at `r`, without the 1/4π factor.
    #[inline]
    pub fn bound_velocity(&self, r: Vector3<f64>) -> Vector3<f64> {
        let a = r - self.r1;
        let b = r - self.r2;
        let axb = a.cross(&b);
        let na = a.norm();
        let nb = b.norm();
        if na.min(nb).min(axb.norm()) < CORE_EPS {
            return Vector3::zeros();
        }
        (1.0 / na + 1.0 / nb) / (na * nb + a.dot(&b)) * axb
    }

    /// Induced velocity at `r` for strength `gamma`.
    #[inline]
    pub fn velocity(&self, r: Vector3<f64>, gamma: f64) -> Vector3<f64> {
        gamma / FOUR_PI * self.bound_velocity(r)
    }

    pub fn mirror_y(&self) -> Line {
        Line {
            r1: mirror_y(self.r1),
            r2: mirror_y(self.r2),
        }
    }
}

#[inline]
fn mirror_y(p: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(p.x, -p.y, p.z)
}

/// Semi-infinite trailing-leg kernel from point offset `a` along the unit
/// direction `d`, without the 1/4π factor.
#[inline]
fn trailing_leg(a: Vector3<f64>, d: Vector3<f64>) -> Vector3<f64> {
    let na = a.norm();
    let denom = na * (na - a.dot(&d));
    if denom.abs() < CORE_EPS {
        return Vector3::zeros();
    }
    a.cross(&d) / denom
}

/// A horseshoe element: a bound leg on the panel quarter-chord line plus
/// two implicit trailing legs running downstream.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Horseshoe {
    pub bound: Line,
}

impl Horseshoe {
    pub fn new(bound: Line) -> Self {
        Self { bound }
    }

    /// Bound leg and collocation point of a panel (Pistolesi placement):
    /// the bound leg spans the panel quarter-chord line, the collocation
    /// point sits at the mid three-quarter-chord line. Only the in-plane
    /// (x, z) offsets move toward the quarter chord; the span coordinate
    /// is preserved.
    pub fn from_panel(panel: &Panel3) -> (Horseshoe, Vector3<f64>) {
        let r1 = weighted_point(panel.p1, panel.p2, 0.25, 0.0, 0.25);
        let r2 = weighted_point(panel.p4, panel.p3, 0.25, 0.0, 0.25);
        let collocation = 0.5
            * (weighted_point(panel.p1, panel.p2, 0.75, 0.0, 0.75)
                + weighted_point(panel.p4, panel.p3, 0.75, 0.0, 0.75));
        (Horseshoe::new(Line::new(r1, r2)), collocation)
    }

    /// Unit-strength induced velocity at `r` with trailing legs along the
    /// unit direction `trailing` (pointing downstream).
    #[inline]
    pub fn unit_velocity(&self, r: Vector3<f64>, trailing: Vector3<f64>) -> Vector3<f64> {
        let a = r - self.bound.r1;
        let b = r - self.bound.r2;
        let total =
            self.bound.bound_velocity(r) + trailing_leg(a, trailing) - trailing_leg(b, trailing);
        total / FOUR_PI
    }

    /// Induced velocity at `r` for circulation `gamma`.
    #[inline]
    pub fn velocity(&self, r: Vector3<f64>, gamma: f64, trailing: Vector3<f64>) -> Vector3<f64> {
        gamma * self.unit_velocity(r, trailing)
    }

    pub fn mirror_y(&self) -> Horseshoe {
        Horseshoe {
            bound: self.bound.mirror_y(),
        }
    }
}

/// A closed vortex ring on a panel: four bound legs, no trailing part.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VortexRing {
    pub left: Line,
    pub bound: Line,
    pub back: Line,
    pub right: Line,
}

impl VortexRing {
    /// Ring legs follow the panel edges in a consistent loop:
    /// p1 → p4 (bound), p4 → p3 (right), p3 → p2 (back), p2 → p1 (left).
    pub fn from_panel(panel: &Panel3) -> Self {
        Self {
            bound: Line::new(panel.p1, panel.p4),
            right: Line::new(panel.p4, panel.p3),
            back: Line::new(panel.p3, panel.p2),
            left: Line::new(panel.p2, panel.p1),
        }
    }

    fn legs(&self) -> [Line; 4] {
        [self.bound, self.right, self.back, self.left]
    }

    /// Induced velocity at `r` for circulation `gamma`: sum over the four
    /// closed-loop legs.
    pub fn velocity(&self, r: Vector3<f64>, gamma: f64) -> Vector3<f64> {
        let total: Vector3<f64> = self.legs().iter().map(|l| l.bound_velocity(r)).sum();
        gamma / FOUR_PI * total
    }
}
