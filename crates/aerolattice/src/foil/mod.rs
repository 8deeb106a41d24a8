//! Airfoil representation and the 2D panel method.
//!
//! Purpose
//! - `Airfoil` carries an ordered outline in Selig order and provides the
//!   resampling and camber/thickness decomposition the 3D paneller needs.
//! - `doublet_source` solves the section flow with constant-strength
//!   doublet and source panels under a Dirichlet boundary condition.

mod doublet_source;

pub use doublet_source::{solve_foil_case, FoilCase, Uniform2D};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geom::{cosine_interp, cosine_spacing, interp1};

/// A camber/thickness sample at a chordwise station: camber is the mean of
/// the matched upper/lower surface heights, thickness the half-difference.
#[derive(Clone, Copy, Debug)]
pub struct CamberStation {
    pub x: f64,
    pub camber: f64,
    pub thickness: f64,
}

/// An airfoil outline in Selig order.
///
/// Invariants:
/// - Points run from the upper trailing edge to the leading edge, then back
///   along the lower surface to the trailing edge.
/// - First and last points coincide (closed) or define an open trailing
///   edge.
/// - Each surface has monotone x between leading and trailing edge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Airfoil {
    pub points: Vec<Vector2<f64>>,
}

impl Airfoil {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }

    /// NACA 4-digit section, e.g. `naca4(0.02, 0.4, 0.12, n, false)` for a
    /// NACA 2412 with `n` points per surface.
    ///
    /// `sharp_te` selects the closed-trailing-edge thickness polynomial.
    pub fn naca4(max_camber: f64, camber_pos: f64, thickness: f64, n: usize, sharp_te: bool) -> Self {
        let c4 = if sharp_te { 0.1036 } else { 0.1015 };
        let half_thickness = |x: f64| {
            5.0 * thickness
                * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x * x * x
                    - c4 * x * x * x * x)
        };
        let camber = |x: f64| {
            if max_camber == 0.0 || camber_pos == 0.0 {
                0.0
            } else if x < camber_pos {
                max_camber / (camber_pos * camber_pos) * (2.0 * camber_pos * x - x * x)
            } else {
                max_camber / ((1.0 - camber_pos) * (1.0 - camber_pos))
                    * ((1.0 - 2.0 * camber_pos) + 2.0 * camber_pos * x - x * x)
            }
        };
        let xs = cosine_spacing(0.0, 1.0, n);
        let mut points = Vec::with_capacity(2 * n - 1);
        for &x in xs.iter().rev() {
            points.push(Vector2::new(x, camber(x) + half_thickness(x)));
        }
        for &x in xs.iter().skip(1) {
            points.push(Vector2::new(x, camber(x) - half_thickness(x)));
        }
        Self { points }
    }

    /// Chord length from the x-extent of the outline.
    pub fn chord(&self) -> f64 {
        let (lo, hi) = self.x_extent();
        hi - lo
    }

    fn x_extent(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in &self.points {
            lo = lo.min(p.x);
            hi = hi.max(p.x);
        }
        (lo, hi)
    }

    fn leading_edge_index(&self) -> usize {
        let mut best = 0;
        for (i, p) in self.points.iter().enumerate() {
            if p.x < self.points[best].x {
                best = i;
            }
        }
        best
    }

    /// Split at the minimum-x point into upper and lower surfaces, both
    /// ordered leading edge → trailing edge (ascending x).
    pub fn split_surfaces(&self) -> (Vec<Vector2<f64>>, Vec<Vector2<f64>>) {
        let le = self.leading_edge_index();
        let mut upper: Vec<_> = self.points[..=le].to_vec();
        upper.reverse();
        let lower: Vec<_> = self.points[le..].to_vec();
        (upper, lower)
    }

    /// Resample both surfaces onto `n` cosine-spaced x stations and
    /// reassemble in Selig order (2n-1 points). Resampling at the same
    /// count is idempotent.
    pub fn cosine_resample(&self, n: usize) -> Airfoil {
        let (upper, lower) = self.split_surfaces();
        let up = cosine_interp(&upper, n);
        let lo = cosine_interp(&lower, n);
        let mut points = Vec::with_capacity(2 * n - 1);
        points.extend(up.into_iter().rev());
        points.extend(lo.into_iter().skip(1));
        Airfoil { points }
    }

    /// Camber/thickness decomposition at `n` cosine-spaced stations.
    pub fn camber_thickness(&self, n: usize) -> Vec<CamberStation> {
        let (upper, lower) = self.split_surfaces();
        let ux: Vec<f64> = upper.iter().map(|p| p.x).collect();
        let uy: Vec<f64> = upper.iter().map(|p| p.y).collect();
        let lx: Vec<f64> = lower.iter().map(|p| p.x).collect();
        let ly: Vec<f64> = lower.iter().map(|p| p.y).collect();
        let (lo, hi) = self.x_extent();
        cosine_spacing(lo, hi, n)
            .into_iter()
            .map(|x| {
                let yu = interp1(&ux, &uy, x);
                let yl = interp1(&lx, &ly, x);
                CamberStation {
                    x,
                    camber: 0.5 * (yu + yl),
                    thickness: 0.5 * (yu - yl),
                }
            })
            .collect()
    }

    /// Camber line as (x, y) points at `n` cosine-spaced stations.
    pub fn camber_line(&self, n: usize) -> Vec<Vector2<f64>> {
        self.camber_thickness(n)
            .into_iter()
            .map(|s| Vector2::new(s.x, s.camber))
            .collect()
    }

    /// Camber heights per unit chord at the given chord fractions in [0, 1].
    pub(crate) fn camber_at_fractions(&self, ts: &[f64]) -> Vec<f64> {
        let stations = self.camber_thickness(60);
        let xs: Vec<f64> = stations.iter().map(|s| s.x).collect();
        let ys: Vec<f64> = stations.iter().map(|s| s.camber).collect();
        let (lo, hi) = self.x_extent();
        let chord = hi - lo;
        ts.iter()
            .map(|&t| interp1(&xs, &ys, lo + t * chord) / chord)
            .collect()
    }
}
