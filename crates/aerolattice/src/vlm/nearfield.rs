//! Kutta-Joukowski near-field loads, axis frames, and coefficients.

use nalgebra::Vector3;

use super::{Freestream, References};
use crate::vortex::Horseshoe;

/// Induced + freestream + rotational velocity at a point.
pub fn total_velocity(
    r: Vector3<f64>,
    horseshoes: &[Horseshoe],
    circulations: &[f64],
    trailing: Vector3<f64>,
    u: Vector3<f64>,
    omega: Vector3<f64>,
) -> Vector3<f64> {
    let induced: Vector3<f64> = horseshoes
        .iter()
        .zip(circulations)
        .map(|(hs, &gamma)| hs.velocity(r, gamma, trailing))
        .sum();
    induced + u + omega.cross(&r)
}

/// `F_i = ρ Γ_i (v_total × ℓ_i)` at each bound-leg midpoint. `sources`
/// supply the induced field (they include the mirrored half under
/// symmetry).
pub(crate) fn panel_forces(
    horseshoes: &[Horseshoe],
    circulations: &[f64],
    sources: &[Horseshoe],
    source_gammas: &[f64],
    freestream: &Freestream,
    density: f64,
) -> Vec<Vector3<f64>> {
    let u = freestream.velocity();
    let u_hat = freestream.direction();
    horseshoes
        .iter()
        .zip(circulations)
        .map(|(hs, &gamma)| {
            let r = hs.bound.center();
            let v = total_velocity(r, sources, source_gammas, u_hat, u, freestream.omega);
            density * gamma * v.cross(&hs.bound.vector())
        })
        .collect()
}

/// Panel moments about the reference point.
pub(crate) fn panel_moments(
    horseshoes: &[Horseshoe],
    forces: &[Vector3<f64>],
    reference: Vector3<f64>,
) -> Vec<Vector3<f64>> {
    horseshoes
        .iter()
        .zip(forces)
        .map(|(hs, f)| (hs.bound.center() - reference).cross(f))
        .collect()
}

/// Body → stability axes: rotate by α about y.
#[inline]
pub fn body_to_stability(v: Vector3<f64>, alpha: f64) -> Vector3<f64> {
    let (sa, ca) = alpha.sin_cos();
    Vector3::new(v.x * ca + v.z * sa, v.y, v.z * ca - v.x * sa)
}

/// Body → wind axes: β about z after the α rotation. The wind x-axis is
/// the freestream direction, so the first component is the drag-wise
/// projection `F · Û`.
#[inline]
pub fn body_to_wind(v: Vector3<f64>, alpha: f64, beta: f64) -> Vector3<f64> {
    let s = body_to_stability(v, alpha);
    let (sb, cb) = beta.sin_cos();
    Vector3::new(s.x * cb - s.y * sb, s.x * sb + s.y * cb, s.z)
}

/// `[CD, CY, CL, Cl, Cm, Cn, p̄, q̄, r̄]`: wind-axis force coefficients,
/// body-axis moment coefficients (span for roll/yaw, chord for pitch),
/// and the non-dimensional angular rates.
pub(crate) fn nearfield_coefficients(
    force: Vector3<f64>,
    moment: Vector3<f64>,
    freestream: &Freestream,
    references: &References,
) -> [f64; 9] {
    let qs = references.dynamic_pressure(freestream.speed) * references.area;
    let cf = body_to_wind(force, freestream.alpha, freestream.beta) / qs;
    let half_rate = 0.5 / freestream.speed;
    [
        cf.x,
        cf.y,
        cf.z,
        moment.x / (qs * references.span),
        moment.y / (qs * references.chord),
        moment.z / (qs * references.span),
        freestream.omega.x * references.span * half_rate,
        freestream.omega.y * references.chord * half_rate,
        freestream.omega.z * references.span * half_rate,
    ]
}
