//! Half-wing and wing composition from spanwise sections.
//!
//! Conventions
//! - A half-wing of N sections has N airfoils/chords/twists and N-1
//!   inter-section spans/dihedrals/leading-edge sweeps.
//! - Spans are y-projections: dihedral raises the tip through the
//!   leading-edge curve without shortening the spanwise extent.
//! - Twist inputs are negated on construction; positive input twist means
//!   leading-edge-up, and the stored angle rotates sections about the
//!   spanwise axis so the trailing edge drops.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;
use crate::foil::Airfoil;
use crate::geom::{forward_ratio, forward_sum, weighted};

/// One half of a lifting surface, built from spanwise sections.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HalfWing {
    foils: Vec<Airfoil>,
    chords: Vec<f64>,
    twists: Vec<f64>,
    spans: Vec<f64>,
    dihedrals: Vec<f64>,
    sweeps: Vec<f64>,
}

impl HalfWing {
    /// Validates section counts, positivity, and array-length consistency.
    /// All angles in radians; twists are stored negated.
    pub fn new(
        foils: Vec<Airfoil>,
        chords: Vec<f64>,
        twists: Vec<f64>,
        spans: Vec<f64>,
        dihedrals: Vec<f64>,
        sweeps: Vec<f64>,
    ) -> Result<Self, GeometryError> {
        let n = chords.len();
        if n < 2 {
            return Err(GeometryError::TooFewSections { count: n });
        }
        for (what, got, expected) in [
            ("airfoil", foils.len(), n),
            ("twist", twists.len(), n),
            ("span", spans.len(), n - 1),
            ("dihedral", dihedrals.len(), n - 1),
            ("sweep", sweeps.len(), n - 1),
        ] {
            if got != expected {
                return Err(GeometryError::LengthMismatch {
                    what,
                    expected,
                    got,
                });
            }
        }
        for (index, &chord) in chords.iter().enumerate() {
            if !(chord > 0.0) {
                return Err(GeometryError::InvalidChord { index, chord });
            }
        }
        for (index, &span) in spans.iter().enumerate() {
            if !(span > 0.0) {
                return Err(GeometryError::InvalidSpan { index, span });
            }
        }
        for foil in &foils {
            if foil.points.len() < 3 {
                return Err(GeometryError::FoilTooCoarse {
                    points: foil.points.len(),
                });
            }
        }
        Ok(Self {
            foils,
            chords,
            twists: twists.into_iter().map(|t| -t).collect(),
            spans,
            dihedrals,
            sweeps,
        })
    }

    pub fn sections(&self) -> usize {
        self.chords.len()
    }

    pub fn foils(&self) -> &[Airfoil] {
        &self.foils
    }

    pub fn chords(&self) -> &[f64] {
        &self.chords
    }

    pub fn spans(&self) -> &[f64] {
        &self.spans
    }

    pub fn sweeps(&self) -> &[f64] {
        &self.sweeps
    }

    pub fn dihedrals(&self) -> &[f64] {
        &self.dihedrals
    }

    /// Stored (negated) twist angles.
    pub(crate) fn stored_twists(&self) -> &[f64] {
        &self.twists
    }

    /// Spanwise extent (sum of the y-projected segment spans).
    pub fn span(&self) -> f64 {
        self.spans.iter().sum()
    }

    /// Leading-edge curve: cumulative sweep/dihedral displacements from the
    /// root. `mirrored` negates the y coordinates for the left half.
    pub fn leading_edge(&self, mirrored: bool) -> Vec<Vector3<f64>> {
        let sign = if mirrored { -1.0 } else { 1.0 };
        let mut pts = Vec::with_capacity(self.sections());
        let mut p = Vector3::zeros();
        pts.push(p);
        for k in 0..self.spans.len() {
            let s = self.spans[k];
            p += Vector3::new(s * self.sweeps[k].tan(), sign * s, s * self.dihedrals[k].tan());
            pts.push(p);
        }
        pts
    }

    /// Trailing-edge curve: leading edge plus the twisted chord
    /// displacement in the local x-z plane.
    pub fn trailing_edge(&self, mirrored: bool) -> Vec<Vector3<f64>> {
        self.leading_edge(mirrored)
            .into_iter()
            .zip(self.chords.iter().zip(&self.twists))
            .map(|(le, (&c, &t))| le + Vector3::new(c * t.cos(), 0.0, c * t.sin()))
            .collect()
    }

    fn mean_chords(&self) -> Vec<f64> {
        forward_sum(&self.chords).into_iter().map(|s| 0.5 * s).collect()
    }

    fn mean_twists(&self) -> Vec<f64> {
        forward_sum(&self.twists).into_iter().map(|s| 0.5 * s).collect()
    }

    /// Flat trapezoid areas per segment, used as MAC weights.
    fn section_areas(&self) -> Vec<f64> {
        self.spans
            .iter()
            .zip(self.mean_chords())
            .map(|(&s, mc)| s * mc)
            .collect()
    }

    /// MAC of each trapezoidal segment: `(2/3) c_r (1+λ+λ²)/(1+λ)`.
    fn section_macs(&self) -> Vec<f64> {
        forward_ratio(&self.chords)
            .iter()
            .zip(&self.chords)
            .map(|(&lambda, &c_root)| {
                2.0 / 3.0 * c_root * (1.0 + lambda + lambda * lambda) / (1.0 + lambda)
            })
            .collect()
    }

    /// Projected planform area: spans are already y-projections, so only
    /// the twist foreshortening applies.
    pub fn projected_area(&self) -> f64 {
        self.spans
            .iter()
            .zip(self.mean_chords())
            .zip(self.mean_twists())
            .map(|((&s, mc), mt)| s * mc * mt.cos())
            .sum()
    }

    /// Area-weighted mean aerodynamic chord.
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let areas = self.section_areas();
        let macs = self.section_macs();
        let total: f64 = areas.iter().sum();
        macs.iter().zip(&areas).map(|(m, a)| m * a).sum::<f64>() / total
    }

    pub fn aspect_ratio(&self) -> f64 {
        let b = self.span();
        b * b / self.projected_area()
    }

    pub fn taper_ratio(&self) -> f64 {
        self.chords[self.chords.len() - 1] / self.chords[0]
    }

    /// Area-weighted mean aerodynamic center: per segment, the leading
    /// edge at the MAC spanwise station `y_k + s_k (1+2λ)/(6(1+λ))` plus a
    /// quarter of the segment MAC.
    pub fn mean_aerodynamic_center(&self) -> Vector3<f64> {
        let le = self.leading_edge(false);
        let areas = self.section_areas();
        let macs = self.section_macs();
        let lambdas = forward_ratio(&self.chords);
        let mut num = Vector3::zeros();
        let mut den = 0.0;
        for k in 0..self.spans.len() {
            let lambda = lambdas[k];
            let y_rel = self.spans[k] * (1.0 + 2.0 * lambda) / (6.0 * (1.0 + lambda));
            let x = le[k].x + self.sweeps[k].tan() * y_rel + 0.25 * macs[k];
            let y = le[k].y + y_rel;
            num += areas[k] * Vector3::new(x, y, 0.0);
            den += areas[k];
        }
        num / den
    }

    /// Uniformly scaled chords (taper-preserving); used by tests and
    /// parameter sweeps.
    pub fn scale_chords(&self, factor: f64) -> Self {
        let mut out = self.clone();
        out.chords.iter_mut().for_each(|c| *c *= factor);
        out
    }
}

/// A full lifting surface: left and right halves of possibly different
/// geometry. The left half is mirrored about the x-z plane during meshing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wing {
    pub left: HalfWing,
    pub right: HalfWing,
}

impl Wing {
    pub fn new(left: HalfWing, right: HalfWing) -> Self {
        Self { left, right }
    }

    /// Symmetric wing from a single half.
    pub fn symmetric(half: HalfWing) -> Self {
        Self {
            left: half.clone(),
            right: half,
        }
    }

    pub fn span(&self) -> f64 {
        self.left.span() + self.right.span()
    }

    pub fn projected_area(&self) -> f64 {
        self.left.projected_area() + self.right.projected_area()
    }

    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let (al, ar) = (self.left.projected_area(), self.right.projected_area());
        weighted(
            self.left.mean_aerodynamic_chord(),
            self.right.mean_aerodynamic_chord(),
            ar / (al + ar),
        )
    }

    pub fn aspect_ratio(&self) -> f64 {
        let b = self.span();
        b * b / self.projected_area()
    }

    /// Area-weighted center of the two halves, the left one y-mirrored.
    pub fn mean_aerodynamic_center(&self) -> Vector3<f64> {
        let (al, ar) = (self.left.projected_area(), self.right.projected_area());
        let mut cl = self.left.mean_aerodynamic_center();
        cl.y = -cl.y;
        let cr = self.right.mean_aerodynamic_center();
        (al * cl + ar * cr) / (al + ar)
    }
}
