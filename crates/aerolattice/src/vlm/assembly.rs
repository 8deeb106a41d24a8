//! Influence-matrix assembly and the dense solve for circulations.
//!
//! The AIC is dense with no exploitable sparsity; panel counts run
//! 10²-10⁴, so a partial-pivoting LU is the whole story. A failed solve
//! means degenerate geometry (zero-area panels, overlapping sections) and
//! surfaces as `SolveError::SingularSystem`.

use nalgebra::{DMatrix, DVector, Vector3};

use crate::errors::SolveError;
use crate::vortex::Horseshoe;

/// `A[i][j] = v_ij · n̂_i`: unit-strength induced velocity of horseshoe j
/// at collocation point i, trailing legs along the freestream direction.
/// With `symmetry`, each entry also carries the horseshoe's influence on
/// the y-mirrored collocation point with the induced y-velocity flipped.
pub(crate) fn influence_matrix(
    horseshoes: &[Horseshoe],
    collocations: &[Vector3<f64>],
    normals: &[Vector3<f64>],
    trailing: Vector3<f64>,
    symmetry: bool,
) -> DMatrix<f64> {
    let m = horseshoes.len();
    DMatrix::from_fn(m, m, |i, j| {
        let mut v = horseshoes[j].unit_velocity(collocations[i], trailing);
        if symmetry {
            let mirrored = Vector3::new(collocations[i].x, -collocations[i].y, collocations[i].z);
            let mut vm = horseshoes[j].unit_velocity(mirrored, trailing);
            vm.y = -vm.y;
            v += vm;
        }
        v.dot(&normals[i])
    })
}

/// `b_i = -(U + Ω × c_i) · n̂_i`.
pub(crate) fn normal_velocity_rhs(
    collocations: &[Vector3<f64>],
    normals: &[Vector3<f64>],
    u: Vector3<f64>,
    omega: Vector3<f64>,
) -> DVector<f64> {
    DVector::from_fn(collocations.len(), |i, _| {
        -(u + omega.cross(&collocations[i])).dot(&normals[i])
    })
}

pub(crate) fn solve_circulations(
    aic: DMatrix<f64>,
    rhs: DVector<f64>,
) -> Result<Vec<f64>, SolveError> {
    let solution = aic.lu().solve(&rhs).ok_or(SolveError::SingularSystem)?;
    if solution.iter().any(|v| !v.is_finite()) {
        return Err(SolveError::SingularSystem);
    }
    Ok(solution.iter().copied().collect())
}
