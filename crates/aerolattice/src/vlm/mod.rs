//! Vortex-lattice solver driver and case results.
//!
//! `solve_case` is a pure computation: geometry in, coefficients out. All
//! working storage (influence matrix, right-hand side, circulations) lives
//! in the activation of the call and is released on return. Callers may
//! run disjoint cases concurrently.
//!
//! Sign conventions
//! - Freestream velocity `U = V (cosα cosβ, -sinβ, sinα cosβ)`; horseshoe
//!   trailing legs run downstream along `+Û`.
//! - Boundary condition `(v_induced + U + Ω×r) · n̂ = 0`; the same total
//!   velocity enters the Kutta-Joukowski force, so a positive-circulation
//!   bound leg (inboard → outboard) lifts upward at positive incidence.

mod assembly;
mod farfield;
mod nearfield;
mod stability;
mod streams;

pub use crate::errors::SolveError;
pub use nearfield::{body_to_stability, body_to_wind, total_velocity};
pub use stability::{solve_stability_case, Derivatives, StabilityResults};
pub use streams::streamlines;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::vortex::Horseshoe;
use crate::wing::{Panel3, SurfacePanels, Wing};

/// Freestream condition: speed, incidence angles (radians), and body-axis
/// angular rates.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Freestream {
    pub speed: f64,
    pub alpha: f64,
    pub beta: f64,
    pub omega: Vector3<f64>,
}

impl Freestream {
    pub fn new(speed: f64, alpha: f64, beta: f64) -> Self {
        Self {
            speed,
            alpha,
            beta,
            omega: Vector3::zeros(),
        }
    }

    pub fn with_omega(mut self, omega: Vector3<f64>) -> Self {
        self.omega = omega;
        self
    }

    /// Cartesian freestream velocity.
    #[inline]
    pub fn velocity(&self) -> Vector3<f64> {
        self.speed * self.direction()
    }

    /// Unit freestream direction (also the trailing-leg direction).
    #[inline]
    pub fn direction(&self) -> Vector3<f64> {
        let (sa, ca) = self.alpha.sin_cos();
        let (sb, cb) = self.beta.sin_cos();
        Vector3::new(ca * cb, -sb, sa * cb)
    }
}

/// Non-dimensionalization references: density, planform area, span, mean
/// aerodynamic chord, and the moment reference point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct References {
    pub density: f64,
    pub area: f64,
    pub span: f64,
    pub chord: f64,
    pub location: Vector3<f64>,
}

impl References {
    pub fn new(density: f64, area: f64, span: f64, chord: f64, location: Vector3<f64>) -> Self {
        Self {
            density,
            area,
            span,
            chord,
            location,
        }
    }

    /// References taken from a wing's planform, moments about `location`.
    pub fn for_wing(wing: &Wing, density: f64, location: Vector3<f64>) -> Self {
        Self {
            density,
            area: wing.projected_area(),
            span: wing.span(),
            chord: wing.mean_aerodynamic_chord(),
            location,
        }
    }

    #[inline]
    pub fn dynamic_pressure(&self, speed: f64) -> f64 {
        0.5 * self.density * speed * speed
    }
}

/// An ordered set of named components, each a meshed panel set.
#[derive(Clone, Debug, Default)]
pub struct Aircraft {
    components: Vec<(String, SurfacePanels)>,
}

impl Aircraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, name: impl Into<String>, panels: SurfacePanels) -> Self {
        self.components.push((name.into(), panels));
        self
    }

    pub fn components(&self) -> &[(String, SurfacePanels)] {
        &self.components
    }

    pub fn panel_count(&self) -> usize {
        self.components.iter().map(|(_, p)| p.len()).sum()
    }
}

/// Solver options.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct CaseOptions {
    /// Model only the +y half and add the y-mirrored influence to every
    /// matrix entry; references then describe the modelled half.
    pub symmetry: bool,
}

/// Coefficients and per-panel loads of one component (or the aggregate).
#[derive(Clone, Debug)]
pub struct ComponentResult {
    pub name: String,
    /// `[CD, CY, CL, Cl, Cm, Cn, p̄, q̄, r̄]`: wind-axis force
    /// coefficients, body-axis moment coefficients, non-dimensional rates.
    pub nearfield: [f64; 9],
    /// `[CD_i, CY, CL]` from the Trefftz plane.
    pub farfield: [f64; 3],
    /// Body-axis force coefficient vector per panel.
    pub force_coefficients: Vec<Vector3<f64>>,
    /// Body-axis moment coefficient vector per panel, about the reference
    /// point, scaled per axis by (span, chord, span).
    pub moment_coefficients: Vec<Vector3<f64>>,
    /// Dimensional body-axis totals.
    pub force: Vector3<f64>,
    pub moment: Vector3<f64>,
}

impl ComponentResult {
    pub fn drag_coefficient(&self) -> f64 {
        self.nearfield[0]
    }

    pub fn side_coefficient(&self) -> f64 {
        self.nearfield[1]
    }

    pub fn lift_coefficient(&self) -> f64 {
        self.nearfield[2]
    }
}

/// Everything a solve produces.
#[derive(Clone, Debug)]
pub struct CaseResults {
    /// Aggregate over all components.
    pub total: ComponentResult,
    pub components: Vec<ComponentResult>,
    pub horseshoe_panels: Vec<Panel3>,
    pub camber_normals: Vec<Vector3<f64>>,
    pub horseshoes: Vec<Horseshoe>,
    pub circulations: Vec<f64>,
    pub freestream: Freestream,
    pub references: References,
}

/// Solve a case with default options.
pub fn solve_case(
    aircraft: &Aircraft,
    freestream: &Freestream,
    references: &References,
) -> Result<CaseResults, SolveError> {
    solve_case_with(aircraft, freestream, references, CaseOptions::default())
}

/// Assemble the influence system, solve for circulations, and recover
/// near-field and Trefftz-plane loads per component.
pub fn solve_case_with(
    aircraft: &Aircraft,
    freestream: &Freestream,
    references: &References,
    options: CaseOptions,
) -> Result<CaseResults, SolveError> {
    if !(freestream.speed > 0.0) {
        return Err(SolveError::InvalidFreestream {
            speed: freestream.speed,
        });
    }
    if aircraft.panel_count() == 0 {
        return Err(SolveError::EmptyAircraft);
    }

    // Flatten components into one lattice, remembering per-component ranges.
    let mut horseshoe_panels: Vec<Panel3> = Vec::new();
    let mut camber_normals: Vec<Vector3<f64>> = Vec::new();
    let mut horseshoes: Vec<Horseshoe> = Vec::new();
    let mut collocations: Vec<Vector3<f64>> = Vec::new();
    let mut ranges: Vec<(String, Range<usize>)> = Vec::new();
    for (name, panels) in aircraft.components() {
        let start = horseshoes.len();
        let use_camber = panels.camber_panels.len() == panels.horseshoe_panels.len();
        for (i, hp) in panels.horseshoe_panels.iter().enumerate() {
            let (hs, collocation) = Horseshoe::from_panel(hp);
            horseshoes.push(hs);
            collocations.push(collocation);
            camber_normals.push(if use_camber {
                panels.camber_panels[i].normal()
            } else {
                hp.normal()
            });
            horseshoe_panels.push(*hp);
        }
        ranges.push((name.clone(), start..horseshoes.len()));
    }

    let u = freestream.velocity();
    let u_hat = freestream.direction();
    let aic = assembly::influence_matrix(
        &horseshoes,
        &collocations,
        &camber_normals,
        u_hat,
        options.symmetry,
    );
    let rhs = assembly::normal_velocity_rhs(&collocations, &camber_normals, u, freestream.omega);
    let circulations = assembly::solve_circulations(aic, rhs)?;

    // Under symmetry the mirrored half contributes to the induced field at
    // the force and Trefftz evaluation points.
    let (sources, source_gammas) = if options.symmetry {
        let mut hs = horseshoes.clone();
        hs.extend(horseshoes.iter().map(|h| h.mirror_y()));
        let mut gs = circulations.clone();
        gs.extend(circulations.iter().copied());
        (hs, gs)
    } else {
        (horseshoes.clone(), circulations.clone())
    };

    let forces = nearfield::panel_forces(
        &horseshoes,
        &circulations,
        &sources,
        &source_gammas,
        freestream,
        references.density,
    );
    let moments = nearfield::panel_moments(&horseshoes, &forces, references.location);

    let components: Vec<ComponentResult> = ranges
        .iter()
        .map(|(name, range)| {
            component_result(
                name.clone(),
                range.clone(),
                &forces,
                &moments,
                &horseshoes,
                &circulations,
                &sources,
                &source_gammas,
                freestream,
                references,
            )
        })
        .collect();
    let total = component_result(
        "Aircraft".to_string(),
        0..horseshoes.len(),
        &forces,
        &moments,
        &horseshoes,
        &circulations,
        &sources,
        &source_gammas,
        freestream,
        references,
    );

    Ok(CaseResults {
        total,
        components,
        horseshoe_panels,
        camber_normals,
        horseshoes,
        circulations,
        freestream: *freestream,
        references: *references,
    })
}

#[allow(clippy::too_many_arguments)]
fn component_result(
    name: String,
    range: Range<usize>,
    forces: &[Vector3<f64>],
    moments: &[Vector3<f64>],
    horseshoes: &[Horseshoe],
    circulations: &[f64],
    sources: &[Horseshoe],
    source_gammas: &[f64],
    freestream: &Freestream,
    references: &References,
) -> ComponentResult {
    let force: Vector3<f64> = forces[range.clone()].iter().sum();
    let moment: Vector3<f64> = moments[range.clone()].iter().sum();
    let nearfield = nearfield::nearfield_coefficients(force, moment, freestream, references);
    let farfield = farfield::trefftz_coefficients(
        &horseshoes[range.clone()],
        &circulations[range.clone()],
        sources,
        source_gammas,
        freestream,
        references,
    );
    let qs = references.dynamic_pressure(freestream.speed) * references.area;
    let scale = Vector3::new(
        qs * references.span,
        qs * references.chord,
        qs * references.span,
    );
    ComponentResult {
        name,
        nearfield,
        farfield,
        force_coefficients: forces[range.clone()].iter().map(|f| f / qs).collect(),
        moment_coefficients: moments[range]
            .iter()
            .map(|m| m.component_div(&scale))
            .collect(),
        force,
        moment,
    }
}

#[cfg(test)]
mod tests;
