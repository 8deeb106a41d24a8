//! Rigid-body placement of component meshes.

use nalgebra::{Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// Translation plus axis/angle rotation, applied rotation-first.
///
/// Used to place component meshes (horizontal/vertical tails offset from
/// the wing origin). `inverse_apply` undoes `apply` exactly, so a
/// transformed mesh round-trips to the original point set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RigidTransform {
    pub position: Vector3<f64>,
    pub axis: Vector3<f64>,
    pub angle: f64,
}

impl RigidTransform {
    pub fn new(position: Vector3<f64>, axis: Vector3<f64>, angle: f64) -> Self {
        Self {
            position,
            axis,
            angle,
        }
    }

    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            axis: Vector3::y(),
            angle: 0.0,
        }
    }

    /// Translation-only placement.
    pub fn translation(position: Vector3<f64>) -> Self {
        Self {
            position,
            axis: Vector3::y(),
            angle: 0.0,
        }
    }

    fn rotation(&self) -> Rotation3<f64> {
        if self.angle == 0.0 || self.axis.norm() < 1e-12 {
            Rotation3::identity()
        } else {
            Rotation3::from_axis_angle(&Unit::new_normalize(self.axis), self.angle)
        }
    }

    #[inline]
    pub fn apply(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.rotation() * p + self.position
    }

    #[inline]
    pub fn inverse_apply(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.rotation().inverse() * (p - self.position)
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}
