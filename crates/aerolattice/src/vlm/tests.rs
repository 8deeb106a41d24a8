use super::*;
use crate::foil::Airfoil;
use crate::geom::RigidTransform;
use crate::wing::{panel_halfwing, panel_wing, HalfWing, MeshConfig, SurfacePanels, Wing};
use approx::assert_relative_eq;
use nalgebra::Vector3;

fn naca0012() -> Airfoil {
    Airfoil::naca4(0.0, 0.0, 0.12, 40, true)
}

/// Flat rectangular half-wing: unit chord, given half-span.
fn flat_half(half_span: f64) -> HalfWing {
    HalfWing::new(
        vec![naca0012(), naca0012()],
        vec![1.0, 1.0],
        vec![0.0, 0.0],
        vec![half_span],
        vec![0.0],
        vec![0.0],
    )
    .unwrap()
}

/// AR-10 rectangular wing with its references (moments about the origin).
fn ar10_case() -> (Aircraft, References) {
    let wing = Wing::symmetric(flat_half(5.0));
    let panels = panel_wing(&wing, &MeshConfig::new(vec![20], 5)).unwrap();
    let refs = References::for_wing(&wing, 1.225, Vector3::zeros());
    (Aircraft::new().with_component("Wing", panels), refs)
}

fn flat_panel() -> crate::wing::Panel3 {
    crate::wing::Panel3 {
        p1: Vector3::new(0.0, 0.0, 0.0),
        p2: Vector3::new(1.0, 0.0, 0.0),
        p3: Vector3::new(1.0, 1.0, 0.0),
        p4: Vector3::new(0.0, 1.0, 0.0),
    }
}

#[test]
fn single_panel_lifts_at_positive_incidence() {
    let panel = flat_panel();
    let panels = SurfacePanels {
        horseshoe_panels: vec![panel],
        camber_panels: vec![panel],
    };
    let aircraft = Aircraft::new().with_component("plate", panels);
    let fs = Freestream::new(10.0, 5.0_f64.to_radians(), 0.0);
    let refs = References::new(1.225, 1.0, 1.0, 1.0, Vector3::zeros());
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    assert!(res.circulations[0] > 0.0, "gamma {}", res.circulations[0]);
    assert!(res.total.lift_coefficient() > 0.0);
    assert!(res.total.drag_coefficient() > 0.0);

    // a missing camber mesh falls back to the bound-panel normals
    let no_camber = Aircraft::new().with_component(
        "plate",
        SurfacePanels {
            horseshoe_panels: vec![panel],
            camber_panels: vec![],
        },
    );
    let res2 = solve_case(&no_camber, &fs, &refs).unwrap();
    assert_relative_eq!(
        res.total.lift_coefficient(),
        res2.total.lift_coefficient(),
        epsilon = 1e-14
    );
}

#[test]
fn rectangular_wing_lift_slope_near_lifting_line() {
    let (aircraft, refs) = ar10_case();
    let alpha = 5.0_f64.to_radians();
    let fs = Freestream::new(10.0, alpha, 0.0);
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    let cl = res.total.lift_coefficient();
    let ar = refs.span * refs.span / refs.area;
    let lifting_line = 2.0 * std::f64::consts::PI * ar / (ar + 2.0) * alpha;
    assert_relative_eq!(cl, lifting_line, max_relative = 0.10);
    // Trefftz-plane lift agrees with the near field
    assert_relative_eq!(res.total.farfield[2], cl, max_relative = 0.05);
    // induced drag close to the elliptic estimate
    let cdi = res.total.farfield[0];
    let elliptic = cl * cl / (std::f64::consts::PI * ar);
    assert!(cdi > 0.0);
    assert_relative_eq!(cdi, elliptic, max_relative = 0.25);
}

#[test]
fn symmetric_flow_has_no_lateral_coefficients() {
    let (aircraft, refs) = ar10_case();
    let fs = Freestream::new(10.0, 4.0_f64.to_radians(), 0.0);
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    let [_, cy, _, cl_roll, _, cn, ..] = res.total.nearfield;
    assert!(cy.abs() < 1e-10, "CY {}", cy);
    assert!(cl_roll.abs() < 1e-10, "Cl {}", cl_roll);
    assert!(cn.abs() < 1e-10, "Cn {}", cn);
}

#[test]
fn panel_loads_sum_to_the_totals() {
    let (aircraft, refs) = ar10_case();
    let fs = Freestream::new(10.0, 3.0_f64.to_radians(), 2.0_f64.to_radians());
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    let qs = refs.dynamic_pressure(fs.speed) * refs.area;

    let cf_sum: Vector3<f64> = res.total.force_coefficients.iter().sum();
    let cf_wind = body_to_wind(cf_sum, fs.alpha, fs.beta);
    assert_relative_eq!(cf_wind.x, res.total.nearfield[0], epsilon = 1e-12);
    assert_relative_eq!(cf_wind.y, res.total.nearfield[1], epsilon = 1e-12);
    assert_relative_eq!(cf_wind.z, res.total.nearfield[2], epsilon = 1e-12);

    let cm_sum: Vector3<f64> = res.total.moment_coefficients.iter().sum();
    assert_relative_eq!(cm_sum.x, res.total.nearfield[3], epsilon = 1e-12);
    assert_relative_eq!(cm_sum.y, res.total.nearfield[4], epsilon = 1e-12);
    assert_relative_eq!(cm_sum.z, res.total.nearfield[5], epsilon = 1e-12);

    // near-field drag is the windward projection of the total force
    let cd = res.total.force.dot(&fs.direction()) / qs;
    assert_relative_eq!(cd, res.total.nearfield[0], epsilon = 1e-12);
}

#[test]
fn sideslip_produces_side_force() {
    let (aircraft, refs) = ar10_case();
    let fs = Freestream::new(10.0, 2.0_f64.to_radians(), 5.0_f64.to_radians());
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    assert!(res.total.nearfield[1].abs() > 1e-6);
}

#[test]
fn component_results_add_up() {
    let wing = Wing::symmetric(flat_half(5.0));
    let tail = Wing::symmetric(flat_half(1.5));
    let wing_panels = panel_wing(&wing, &MeshConfig::new(vec![12], 4)).unwrap();
    let tail_cfg = MeshConfig::new(vec![6], 3)
        .with_placement(RigidTransform::translation(Vector3::new(5.0, 0.0, 0.2)));
    let tail_panels = panel_wing(&tail, &tail_cfg).unwrap();
    let aircraft = Aircraft::new()
        .with_component("Wing", wing_panels)
        .with_component("Tail", tail_panels);
    let refs = References::for_wing(&wing, 1.225, Vector3::zeros());
    let fs = Freestream::new(10.0, 3.0_f64.to_radians(), 0.0);
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    assert_eq!(res.components.len(), 2);
    assert_eq!(res.components[0].name, "Wing");
    for k in 0..6 {
        let sum: f64 = res.components.iter().map(|c| c.nearfield[k]).sum();
        assert_relative_eq!(sum, res.total.nearfield[k], epsilon = 1e-12);
    }
    for k in 0..3 {
        let sum: f64 = res.components.iter().map(|c| c.farfield[k]).sum();
        assert_relative_eq!(sum, res.total.farfield[k], epsilon = 1e-12);
    }
    // the small tail in the wing's downwash contributes far less lift
    assert!(res.components[1].lift_coefficient() < res.components[0].lift_coefficient());
}

#[test]
fn stability_sweep_matches_linear_theory() {
    let (aircraft, refs) = ar10_case();
    let fs = Freestream::new(10.0, 2.0_f64.to_radians(), 0.0);
    let stab = solve_stability_case(&aircraft, &fs, &refs).unwrap();
    let ar = refs.span * refs.span / refs.area;
    let cl_alpha = stab.derivatives[(2, 0)];
    let lifting_line = 2.0 * std::f64::consts::PI * ar / (ar + 2.0);
    assert_relative_eq!(cl_alpha, lifting_line, max_relative = 0.10);
    // pitch stiffness about a point ahead of the aerodynamic center
    assert!(stab.derivatives[(4, 0)] < 0.0, "Cm_alpha {}", stab.derivatives[(4, 0)]);
    // roll and pitch damping
    assert!(stab.derivatives[(3, 2)] < 0.0, "Cl_p {}", stab.derivatives[(3, 2)]);
    assert!(stab.derivatives[(4, 3)] < 0.0, "Cm_q {}", stab.derivatives[(4, 3)]);
    // longitudinal/lateral decoupling for a planar symmetric wing
    assert!(stab.derivatives[(1, 0)].abs() < 1e-8, "CY_alpha");
    assert!(stab.derivatives[(2, 1)].abs() < 1e-8, "CL_beta");
}

#[test]
fn symmetry_option_reproduces_the_full_wing() {
    let half = flat_half(5.0);
    let full = Wing::symmetric(half.clone());
    let fs = Freestream::new(10.0, 4.0_f64.to_radians(), 0.0);

    let full_panels = panel_wing(&full, &MeshConfig::new(vec![16], 4)).unwrap();
    let full_refs = References::for_wing(&full, 1.225, Vector3::zeros());
    let full_res = solve_case(
        &Aircraft::new().with_component("Wing", full_panels),
        &fs,
        &full_refs,
    )
    .unwrap();

    let half_panels = panel_halfwing(&half, &MeshConfig::new(vec![16], 4)).unwrap();
    let half_refs = References::new(
        1.225,
        half.projected_area(),
        half.span(),
        half.mean_aerodynamic_chord(),
        Vector3::zeros(),
    );
    let half_res = solve_case_with(
        &Aircraft::new().with_component("HalfWing", half_panels),
        &fs,
        &half_refs,
        CaseOptions { symmetry: true },
    )
    .unwrap();

    assert_relative_eq!(
        half_res.total.lift_coefficient(),
        full_res.total.lift_coefficient(),
        max_relative = 1e-8
    );
    assert_relative_eq!(
        half_res.total.drag_coefficient(),
        full_res.total.drag_coefficient(),
        max_relative = 1e-6
    );
}

#[test]
fn rate_coefficients_echo_the_freestream() {
    let (aircraft, refs) = ar10_case();
    let fs = Freestream::new(10.0, 2.0_f64.to_radians(), 0.0)
        .with_omega(Vector3::new(0.3, 0.2, 0.1));
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    assert_relative_eq!(res.total.nearfield[6], 0.3 * refs.span / 20.0, epsilon = 1e-12);
    assert_relative_eq!(res.total.nearfield[7], 0.2 * refs.chord / 20.0, epsilon = 1e-12);
    assert_relative_eq!(res.total.nearfield[8], 0.1 * refs.span / 20.0, epsilon = 1e-12);
}

#[test]
fn streamline_asymptotes_to_the_freestream() {
    let (aircraft, refs) = ar10_case();
    let fs = Freestream::new(10.0, 1.0_f64.to_radians(), 0.0);
    let res = solve_case(&aircraft, &fs, &refs).unwrap();
    let b = refs.span;
    let seed = Vector3::new(0.0, 0.0, 1.5 * b);
    let num_steps = 200;
    let lines = streamlines(
        &fs,
        &[seed],
        &res.horseshoes,
        &res.circulations,
        8.0 * b,
        num_steps,
    );
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert_eq!(line.len(), num_steps + 1);
    let last_dir = (line[num_steps] - line[num_steps - 1]).normalize();
    assert!(
        (last_dir - fs.direction()).norm() < 1e-3,
        "direction error {}",
        (last_dir - fs.direction()).norm()
    );
}

#[test]
fn invalid_cases_are_rejected() {
    let (aircraft, refs) = ar10_case();
    assert!(matches!(
        solve_case(&aircraft, &Freestream::new(0.0, 0.0, 0.0), &refs),
        Err(SolveError::InvalidFreestream { .. })
    ));
    assert!(matches!(
        solve_case(&Aircraft::new(), &Freestream::new(10.0, 0.0, 0.0), &refs),
        Err(SolveError::EmptyAircraft)
    ));
    // two coincident panels give identical influence rows
    let panel = flat_panel();
    let degenerate = Aircraft::new().with_component(
        "plate",
        SurfacePanels {
            horseshoe_panels: vec![panel, panel],
            camber_panels: vec![panel, panel],
        },
    );
    assert!(matches!(
        solve_case(&degenerate, &Freestream::new(10.0, 0.1, 0.0), &refs),
        Err(SolveError::SingularSystem)
    ));
}
