//! Trefftz-plane (far-field) force recovery.
//!
//! Far downstream the trailing legs become straight 2D vortices in the
//! wind-axes y-z plane. Each horseshoe projects to a wake segment between
//! its bound-leg endpoints carrying ±Γ tip vortices; the induced drag is
//! the classical wake integral `D = -ρ/2 Σ Γ_i (w_i · n̂_i) ℓ_i`, and lift
//! and side force follow from Kutta-Joukowski on the wake sheet.

use nalgebra::{Vector2, Vector3};

use super::nearfield::body_to_wind;
use super::{Freestream, References};
use crate::vortex::Horseshoe;

/// `[CD_i, CY, CL]`. `targets` are the horseshoes whose loads are summed;
/// `sources` supply the wake downwash (the full lattice, with the mirrored
/// half under symmetry).
pub(crate) fn trefftz_coefficients(
    targets: &[Horseshoe],
    target_gammas: &[f64],
    sources: &[Horseshoe],
    source_gammas: &[f64],
    freestream: &Freestream,
    references: &References,
) -> [f64; 3] {
    let project = |p: Vector3<f64>| -> Vector2<f64> {
        let w = body_to_wind(p, freestream.alpha, freestream.beta);
        Vector2::new(w.y, w.z)
    };
    let target_legs: Vec<(Vector2<f64>, Vector2<f64>)> = targets
        .iter()
        .map(|hs| (project(hs.bound.r1), project(hs.bound.r2)))
        .collect();
    let source_legs: Vec<(Vector2<f64>, Vector2<f64>)> = sources
        .iter()
        .map(|hs| (project(hs.bound.r1), project(hs.bound.r2)))
        .collect();

    let rho = references.density;
    let mut drag = 0.0;
    let mut side = 0.0;
    let mut lift = 0.0;
    for (i, &(a, b)) in target_legs.iter().enumerate() {
        let t = b - a;
        let len = t.norm();
        if len < 1e-12 {
            continue;
        }
        let mid = 0.5 * (a + b);
        let normal = Vector2::new(-t.y, t.x) / len;
        let mut w = Vector2::zeros();
        for (j, &(aj, bj)) in source_legs.iter().enumerate() {
            w += source_gammas[j] * (wake_vortex(mid, bj) - wake_vortex(mid, aj));
        }
        let gamma = target_gammas[i];
        drag -= 0.5 * rho * gamma * w.dot(&normal) * len;
        lift += rho * freestream.speed * gamma * t.x;
        side -= rho * freestream.speed * gamma * t.y;
    }
    let qs = references.dynamic_pressure(freestream.speed) * references.area;
    [drag / qs, side / qs, lift / qs]
}

/// 2D velocity of a unit trailing vortex piercing the plane at `q`.
#[inline]
fn wake_vortex(p: Vector2<f64>, q: Vector2<f64>) -> Vector2<f64> {
    let d = p - q;
    let r_sq = d.norm_squared();
    if r_sq < 1e-12 {
        return Vector2::zeros();
    }
    Vector2::new(-d.y, d.x) / (2.0 * std::f64::consts::PI * r_sq)
}
