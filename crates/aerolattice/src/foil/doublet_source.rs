//! Constant-strength doublet-source panel method for airfoil sections.
//!
//! Formulation (Dirichlet/Morino)
//! - Panels are oriented segments around the Selig outline; each carries a
//!   doublet strength. Source strengths come straight from the boundary
//!   condition: with the interior perturbation potential held at zero, the
//!   normal-derivative jump fixes `sigma = -U · n̂` for this kernel
//!   orientation (interior doublet self-influence +0.5).
//! - The block system is `[D w; k^T 0] [mu; mu_w] = [-S sigma; 0]` with an
//!   equal-gradient Kutta row `mu_1 - mu_2 + mu_{N-1} - mu_N = 0` over the
//!   surface doublets; the wake strength couples through its influence
//!   column.
//! - The outer-surface potential is `phi_inf - mu`, so the tangential
//!   velocity is the freestream tangential component minus the arc-length
//!   derivative of the doublet strengths; `C_p = 1 - (v_t/V)^2`.

use nalgebra::{DMatrix, DVector, Vector2};
use serde::{Deserialize, Serialize};

use super::Airfoil;
use crate::errors::SolveError;

/// Wake length in chords. The surface potentials are insensitive to the
/// exact value once the wake end is far downstream.
const WAKE_CHORDS: f64 = 1.0e3;

/// Uniform 2D freestream: speed and angle of attack (radians).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Uniform2D {
    pub speed: f64,
    pub alpha: f64,
}

impl Uniform2D {
    pub fn new(speed: f64, alpha: f64) -> Self {
        Self { speed, alpha }
    }

    #[inline]
    pub fn velocity(&self) -> Vector2<f64> {
        self.speed * self.direction()
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.alpha.cos(), self.alpha.sin())
    }
}

/// An oriented surface segment with its local frame.
#[derive(Clone, Copy, Debug)]
struct Panel2 {
    start: Vector2<f64>,
    end: Vector2<f64>,
}

impl Panel2 {
    #[inline]
    fn len(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[inline]
    fn collocation(&self) -> Vector2<f64> {
        0.5 * (self.start + self.end)
    }

    #[inline]
    fn tangent(&self) -> Vector2<f64> {
        (self.end - self.start) / self.len()
    }

    /// Outward normal for a counterclockwise (Selig) traversal.
    #[inline]
    fn normal(&self) -> Vector2<f64> {
        let t = self.tangent();
        Vector2::new(t.y, -t.x)
    }

    /// Field point in panel coordinates (x along the panel, z along the
    /// outward normal, origin at the panel start).
    #[inline]
    fn local(&self, r: Vector2<f64>) -> (f64, f64) {
        let d = r - self.start;
        (d.dot(&self.tangent()), d.dot(&self.normal()))
    }

    /// Unit-strength constant-doublet potential at `r`.
    ///
    /// The branch of the panel angles puts the 0.5 self-influence on the
    /// interior side, matching the Dirichlet formulation.
    fn doublet_potential(&self, r: Vector2<f64>) -> f64 {
        let (x, z) = self.local(r);
        let t1 = z.atan2(x);
        let t2 = z.atan2(x - self.len());
        -(t2 - t1) / (2.0 * std::f64::consts::PI)
    }

    /// Unit-strength constant-source potential at `r`.
    fn source_potential(&self, r: Vector2<f64>) -> f64 {
        let (x, z) = self.local(r);
        let x2 = self.len();
        let r1_sq = x * x + z * z;
        let r2_sq = (x - x2) * (x - x2) + z * z;
        let t1 = z.atan2(x);
        let t2 = z.atan2(x - x2);
        let mut phi = 2.0 * z * (t2 - t1);
        if r1_sq > 1e-300 {
            phi += x * r1_sq.ln();
        }
        if r2_sq > 1e-300 {
            phi -= (x - x2) * r2_sq.ln();
        }
        phi / (4.0 * std::f64::consts::PI)
    }
}

/// Result of a 2D section solve.
#[derive(Clone, Debug)]
pub struct FoilCase {
    /// Doublet strength per surface panel.
    pub doublets: Vec<f64>,
    /// Wake doublet strength (potential jump across the wake).
    pub wake_strength: f64,
    /// Panel midpoints, for plotting pressure distributions.
    pub collocations: Vec<Vector2<f64>>,
    /// Pressure coefficient per panel.
    pub pressures: Vec<f64>,
    /// Lift coefficient from the wake strength (Kutta-Joukowski).
    pub cl: f64,
    /// Lift coefficient from the surface pressure integral.
    pub cl_pressure: f64,
    /// Moment coefficient about the leading edge from the pressure
    /// integral (positive nose-up).
    pub cm_pressure: f64,
}

/// Solve the section flow for an airfoil outline in Selig order.
///
/// The outline's points are used directly as panel nodes; resample the
/// airfoil first to control the panel count.
pub fn solve_foil_case(foil: &Airfoil, u: &Uniform2D) -> Result<FoilCase, SolveError> {
    if !(u.speed > 0.0) {
        return Err(SolveError::InvalidFreestream { speed: u.speed });
    }
    let panels = surface_panels(foil);
    let n = panels.len();
    if n < 4 {
        return Err(SolveError::TooFewPanels { count: n });
    }

    let chord = foil.chord();
    let wake = wake_panel(foil, u, chord);
    let u_vec = u.velocity();
    let sigmas: Vec<f64> = panels.iter().map(|p| -u_vec.dot(&p.normal())).collect();
    let collocations: Vec<Vector2<f64>> = panels.iter().map(|p| p.collocation()).collect();

    // Block system over [mu_1 .. mu_N, mu_w].
    let mut a = DMatrix::<f64>::zeros(n + 1, n + 1);
    let mut rhs = DVector::<f64>::zeros(n + 1);
    for i in 0..n {
        let c = collocations[i];
        for j in 0..n {
            a[(i, j)] = if i == j {
                0.5
            } else {
                panels[j].doublet_potential(c)
            };
        }
        a[(i, n)] = wake.doublet_potential(c);
        rhs[i] = -panels
            .iter()
            .zip(&sigmas)
            .map(|(p, s)| s * p.source_potential(c))
            .sum::<f64>();
    }
    a[(n, 0)] = 1.0;
    a[(n, 1)] = -1.0;
    a[(n, n - 2)] = 1.0;
    a[(n, n - 1)] = -1.0;

    let solution = a.lu().solve(&rhs).ok_or(SolveError::SingularSystem)?;
    if solution.iter().any(|v| !v.is_finite()) {
        return Err(SolveError::SingularSystem);
    }
    let doublets: Vec<f64> = solution.iter().take(n).copied().collect();
    let wake_strength = solution[n];

    // Arc length at panel midpoints, for the tangential derivative of mu.
    let mut arcs = Vec::with_capacity(n);
    let mut acc = 0.0;
    for p in &panels {
        arcs.push(acc + 0.5 * p.len());
        acc += p.len();
    }

    let mut pressures = Vec::with_capacity(n);
    for i in 0..n {
        let dmu = if i == 0 {
            (doublets[1] - doublets[0]) / (arcs[1] - arcs[0])
        } else if i == n - 1 {
            (doublets[n - 1] - doublets[n - 2]) / (arcs[n - 1] - arcs[n - 2])
        } else {
            (doublets[i + 1] - doublets[i - 1]) / (arcs[i + 1] - arcs[i - 1])
        };
        let v_t = u_vec.dot(&panels[i].tangent()) - dmu;
        pressures.push(1.0 - (v_t / u.speed) * (v_t / u.speed));
    }

    // Pressure integrals: per-panel force -Cp * l * n̂ (per dynamic
    // pressure); lift along (-sin a, cos a), moment about the leading edge.
    let le_x = foil
        .points
        .iter()
        .map(|p| p.x)
        .fold(f64::INFINITY, f64::min);
    let r_ref = Vector2::new(le_x, 0.0);
    let lift_dir = Vector2::new(-u.alpha.sin(), u.alpha.cos());
    let mut force = Vector2::zeros();
    let mut moment = 0.0;
    for (i, p) in panels.iter().enumerate() {
        let df = -pressures[i] * p.len() * p.normal();
        let arm = p.collocation() - r_ref;
        force += df;
        moment += arm.x * df.y - arm.y * df.x;
    }
    let cl_pressure = force.dot(&lift_dir) / chord;
    let cm_pressure = -moment / (chord * chord);

    let cl = 2.0 * wake_strength / (u.speed * chord);

    Ok(FoilCase {
        doublets,
        wake_strength,
        collocations,
        pressures,
        cl,
        cl_pressure,
        cm_pressure,
    })
}

fn surface_panels(foil: &Airfoil) -> Vec<Panel2> {
    foil.points
        .windows(2)
        .filter(|w| (w[1] - w[0]).norm() > 1e-12)
        .map(|w| Panel2 {
            start: w[0],
            end: w[1],
        })
        .collect()
}

/// Wake panel leaving the trailing edge along the freestream direction.
fn wake_panel(foil: &Airfoil, u: &Uniform2D, chord: f64) -> Panel2 {
    let first = foil.points[0];
    let last = foil.points[foil.points.len() - 1];
    let te = if (first - last).norm() < 1e-10 {
        first
    } else {
        0.5 * (first + last)
    };
    Panel2 {
        start: te,
        end: te + WAKE_CHORDS * chord * u.direction(),
    }
}
