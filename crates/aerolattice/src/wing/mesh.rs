//! Spanwise/chordwise panelling of lifting surfaces.
//!
//! Two meshes come out of the same grid:
//! - the bound-leg mesh uses straight twisted chords and carries the
//!   horseshoe quarter-chord lines and collocation points;
//! - the camber mesh follows each section's camber line and supplies the
//!   panel normals, so cambered sections are represented without modelling
//!   camber in the bound mesh.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::surface::{HalfWing, Wing};
use crate::errors::GeometryError;
use crate::geom::{cosine_spacing, lerp3, rotate2d, uniform_spacing, weighted, RigidTransform};

/// Sample spacing along a mesh direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spacing {
    Uniform,
    /// Clusters panels toward both ends of the direction.
    Cosine,
}

impl Spacing {
    fn samples(self, n: usize) -> Vec<f64> {
        match self {
            Spacing::Uniform => uniform_spacing(0.0, 1.0, n),
            Spacing::Cosine => cosine_spacing(0.0, 1.0, n),
        }
    }
}

/// Panelling options for one surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Spanwise panel counts: one entry per inter-section, or a single
    /// entry applied to all of them.
    pub spanwise_panels: Vec<usize>,
    pub chordwise_panels: usize,
    pub spanwise_spacing: Spacing,
    pub chordwise_spacing: Spacing,
    /// Placement of the meshed component (tail offsets etc.).
    pub placement: RigidTransform,
}

impl MeshConfig {
    pub fn new(spanwise_panels: Vec<usize>, chordwise_panels: usize) -> Self {
        Self {
            spanwise_panels,
            chordwise_panels,
            spanwise_spacing: Spacing::Cosine,
            chordwise_spacing: Spacing::Cosine,
            placement: RigidTransform::identity(),
        }
    }

    pub fn with_spacing(mut self, spanwise: Spacing, chordwise: Spacing) -> Self {
        self.spanwise_spacing = spanwise;
        self.chordwise_spacing = chordwise;
        self
    }

    pub fn with_placement(mut self, placement: RigidTransform) -> Self {
        self.placement = placement;
        self
    }

    fn resolve_span_counts(&self, segments: usize) -> Result<Vec<usize>, GeometryError> {
        let counts = if self.spanwise_panels.len() == 1 {
            vec![self.spanwise_panels[0]; segments]
        } else if self.spanwise_panels.len() == segments {
            self.spanwise_panels.clone()
        } else {
            return Err(GeometryError::LengthMismatch {
                what: "spanwise panel",
                expected: segments,
                got: self.spanwise_panels.len(),
            });
        };
        if counts.iter().any(|&c| c == 0) {
            return Err(GeometryError::InvalidPanelCount { what: "spanwise" });
        }
        if self.chordwise_panels == 0 {
            return Err(GeometryError::InvalidPanelCount { what: "chordwise" });
        }
        Ok(counts)
    }
}

/// A quadrilateral panel.
///
/// Corner convention: p1 forward-inboard (smaller y), p2 aft-inboard, p3
/// aft-outboard, p4 forward-outboard, normal pointing up for a standard
/// wing in level flight.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Panel3 {
    pub p1: Vector3<f64>,
    pub p2: Vector3<f64>,
    pub p3: Vector3<f64>,
    pub p4: Vector3<f64>,
}

impl Panel3 {
    /// Unit normal from the diagonal cross product.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        (self.p3 - self.p1).cross(&(self.p4 - self.p2)).normalize()
    }

    pub fn points(&self) -> [Vector3<f64>; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    pub fn transform(&self, t: &RigidTransform) -> Panel3 {
        Panel3 {
            p1: t.apply(self.p1),
            p2: t.apply(self.p2),
            p3: t.apply(self.p3),
            p4: t.apply(self.p4),
        }
    }

    pub fn inverse_transform(&self, t: &RigidTransform) -> Panel3 {
        Panel3 {
            p1: t.inverse_apply(self.p1),
            p2: t.inverse_apply(self.p2),
            p3: t.inverse_apply(self.p3),
            p4: t.inverse_apply(self.p4),
        }
    }
}

/// The two panel sets of a meshed surface, index-aligned.
#[derive(Clone, Debug, Default)]
pub struct SurfacePanels {
    pub horseshoe_panels: Vec<Panel3>,
    pub camber_panels: Vec<Panel3>,
}

impl SurfacePanels {
    pub fn len(&self) -> usize {
        self.horseshoe_panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.horseshoe_panels.is_empty()
    }

    pub fn transform(&self, t: &RigidTransform) -> SurfacePanels {
        SurfacePanels {
            horseshoe_panels: self.horseshoe_panels.iter().map(|p| p.transform(t)).collect(),
            camber_panels: self.camber_panels.iter().map(|p| p.transform(t)).collect(),
        }
    }
}

/// Mesh one half-wing (root at the origin, tip at +y).
pub fn panel_halfwing(hw: &HalfWing, cfg: &MeshConfig) -> Result<SurfacePanels, GeometryError> {
    let (bound, camber) = half_columns(hw, cfg, false)?;
    Ok(SurfacePanels {
        horseshoe_panels: panelize(&bound),
        camber_panels: panelize(&camber),
    }
    .transform(&cfg.placement))
}

/// Mesh a full wing: the left half y-mirrored and concatenated with the
/// right, panels ordered left tip → root → right tip.
pub fn panel_wing(wing: &Wing, cfg: &MeshConfig) -> Result<SurfacePanels, GeometryError> {
    let (lb, lc) = half_columns(&wing.left, cfg, true)?;
    let (rb, rc) = half_columns(&wing.right, cfg, false)?;
    let mut horseshoe_panels = panelize(&lb);
    horseshoe_panels.extend(panelize(&rb));
    let mut camber_panels = panelize(&lc);
    camber_panels.extend(panelize(&rc));
    Ok(SurfacePanels {
        horseshoe_panels,
        camber_panels,
    }
    .transform(&cfg.placement))
}

type Columns = Vec<Vec<Vector3<f64>>>;

/// Chordwise point columns at each spanwise station, ordered by ascending
/// y. Sections are interpolated linearly in leading edge, chord, twist,
/// and camber between adjacent stations.
fn half_columns(
    hw: &HalfWing,
    cfg: &MeshConfig,
    mirror: bool,
) -> Result<(Columns, Columns), GeometryError> {
    let segments = hw.spans().len();
    let span_counts = cfg.resolve_span_counts(segments)?;
    let ts = cfg.chordwise_spacing.samples(cfg.chordwise_panels + 1);

    let le = hw.leading_edge(mirror);
    let chords = hw.chords();
    let twists = hw.stored_twists();
    let cambers: Vec<Vec<f64>> = hw.foils().iter().map(|f| f.camber_at_fractions(&ts)).collect();

    let mut bound: Columns = Vec::new();
    let mut camber: Columns = Vec::new();
    for k in 0..segments {
        let mus = cfg.spanwise_spacing.samples(span_counts[k] + 1);
        for (idx, &mu) in mus.iter().enumerate() {
            if k > 0 && idx == 0 {
                continue; // station shared with the previous segment
            }
            let le_pt = lerp3(le[k], le[k + 1], mu);
            let chord = weighted(chords[k], chords[k + 1], mu);
            let twist = weighted(twists[k], twists[k + 1], mu);
            let mut col_b = Vec::with_capacity(ts.len());
            let mut col_c = Vec::with_capacity(ts.len());
            for (i, &t) in ts.iter().enumerate() {
                let cam = weighted(cambers[k][i], cambers[k + 1][i], mu);
                let flat = rotate2d(Vector2::new(t * chord, 0.0), twist);
                let curved = rotate2d(Vector2::new(t * chord, cam * chord), twist);
                col_b.push(le_pt + Vector3::new(flat.x, 0.0, flat.y));
                col_c.push(le_pt + Vector3::new(curved.x, 0.0, curved.y));
            }
            bound.push(col_b);
            camber.push(col_c);
        }
    }
    if mirror {
        bound.reverse();
        camber.reverse();
    }
    Ok((bound, camber))
}

fn panelize(cols: &Columns) -> Vec<Panel3> {
    let mut out = Vec::new();
    for j in 0..cols.len() - 1 {
        for i in 0..cols[j].len() - 1 {
            out.push(Panel3 {
                p1: cols[j][i],
                p2: cols[j][i + 1],
                p3: cols[j + 1][i + 1],
                p4: cols[j + 1][i],
            });
        }
    }
    out
}
