//! Finite-difference stability-derivative sweeps.
//!
//! Each of (α, β, p̄, q̄, r̄) is perturbed by ±Δ and the case re-solved;
//! Δ = 1e-3 sits well inside the linear regime of the lattice. Rate
//! perturbations convert from the non-dimensional coefficients through
//! `p = p̄ · 2V/b`, `q = q̄ · 2V/c̄`, `r = r̄ · 2V/b`.

use nalgebra::SMatrix;

use super::{solve_case, Aircraft, Freestream, References, SolveError};

/// Derivative matrix: rows (CD, CY, CL, Cl, Cm, Cn), columns
/// (α, β, p̄, q̄, r̄).
pub type Derivatives = SMatrix<f64, 6, 5>;

/// Base-case coefficients plus the derivative matrix.
#[derive(Clone, Debug)]
pub struct StabilityResults {
    pub nearfield: [f64; 9],
    pub farfield: [f64; 3],
    pub derivatives: Derivatives,
}

const DELTA: f64 = 1e-3;

/// Central-difference sweep over the five freestream variables.
pub fn solve_stability_case(
    aircraft: &Aircraft,
    freestream: &Freestream,
    references: &References,
) -> Result<StabilityResults, SolveError> {
    let base = solve_case(aircraft, freestream, references)?;
    let mut derivatives = Derivatives::zeros();
    for var in 0..5 {
        let plus = solve_case(aircraft, &perturbed(freestream, references, var, DELTA), references)?;
        let minus = solve_case(
            aircraft,
            &perturbed(freestream, references, var, -DELTA),
            references,
        )?;
        for row in 0..6 {
            derivatives[(row, var)] =
                (plus.total.nearfield[row] - minus.total.nearfield[row]) / (2.0 * DELTA);
        }
    }
    Ok(StabilityResults {
        nearfield: base.total.nearfield,
        farfield: base.total.farfield,
        derivatives,
    })
}

fn perturbed(freestream: &Freestream, references: &References, var: usize, delta: f64) -> Freestream {
    let mut out = *freestream;
    let two_v = 2.0 * freestream.speed;
    match var {
        0 => out.alpha += delta,
        1 => out.beta += delta,
        2 => out.omega.x += delta * two_v / references.span,
        3 => out.omega.y += delta * two_v / references.chord,
        4 => out.omega.z += delta * two_v / references.span,
        _ => unreachable!("five sweep variables"),
    }
    out
}
