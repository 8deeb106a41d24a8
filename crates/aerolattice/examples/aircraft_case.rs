//! Full-aircraft case: wing + horizontal tail + vertical fin.
//!
//! Purpose
//! - Exercise the whole pipeline end to end: section geometry, panelling
//!   with placements, the lattice solve, Trefftz recovery, and the
//!   stability-derivative sweep, with wall-clock timings for each stage.

use std::time::Instant;

use aerolattice::prelude::*;
use nalgebra::Vector3;

fn main() {
    let foil = Airfoil::naca4(0.0, 0.0, 0.12, 40, true);
    let cambered = Airfoil::naca4(0.02, 0.4, 0.12, 40, true);

    let wing = Wing::symmetric(
        HalfWing::new(
            vec![cambered.clone(), cambered.clone(), cambered],
            vec![1.0, 0.6, 0.2],
            vec![2.0_f64.to_radians(), 0.0, -0.2_f64.to_radians()],
            vec![5.0, 0.5],
            vec![5.0_f64.to_radians(); 2],
            vec![5.0_f64.to_radians(); 2],
        )
        .expect("wing geometry"),
    );
    let htail = Wing::symmetric(
        HalfWing::new(
            vec![foil.clone(), foil.clone()],
            vec![0.7, 0.42],
            vec![0.0, 0.0],
            vec![1.25],
            vec![0.0],
            vec![6.39_f64.to_radians()],
        )
        .expect("htail geometry"),
    );
    let vtail = HalfWing::new(
        vec![foil.clone(), foil],
        vec![0.7, 0.42],
        vec![0.0, 0.0],
        vec![1.0],
        vec![0.0],
        vec![7.97_f64.to_radians()],
    )
    .expect("vtail geometry");

    let mesh_start = Instant::now();
    let wing_panels = panel_wing(&wing, &MeshConfig::new(vec![20, 4], 6)).expect("wing mesh");
    let htail_panels = panel_wing(
        &htail,
        &MeshConfig::new(vec![8], 4).with_placement(RigidTransform::translation(Vector3::new(
            4.0, 0.0, 0.0,
        ))),
    )
    .expect("htail mesh");
    let vtail_panels = panel_halfwing(
        &vtail,
        &MeshConfig::new(vec![6], 4).with_placement(RigidTransform::new(
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::x(),
            std::f64::consts::FRAC_PI_2,
        )),
    )
    .expect("vtail mesh");
    let mesh_ms = mesh_start.elapsed().as_secs_f64() * 1e3;

    let aircraft = Aircraft::new()
        .with_component("Wing", wing_panels)
        .with_component("HTail", htail_panels)
        .with_component("VTail", vtail_panels);
    let freestream = Freestream::new(25.0, 3.0_f64.to_radians(), 0.0);
    let references = References::for_wing(&wing, 1.225, wing.mean_aerodynamic_center());

    println!(
        "aircraft: panels={} S={:.4} b={:.4} c̄={:.4}",
        aircraft.panel_count(),
        references.area,
        references.span,
        references.chord
    );
    println!("mesh_time_ms={mesh_ms:.3}");

    let solve_start = Instant::now();
    let case = solve_case(&aircraft, &freestream, &references).expect("case solve");
    let solve_ms = solve_start.elapsed().as_secs_f64() * 1e3;
    println!("solve_time_ms={solve_ms:.3}");

    for result in case.components.iter().chain(std::iter::once(&case.total)) {
        let [cd, cy, cl, cl_roll, cm, cn, ..] = result.nearfield;
        println!(
            "{:>8}: CD={cd:+.6} CY={cy:+.6} CL={cl:+.6} Cl={cl_roll:+.6} Cm={cm:+.6} Cn={cn:+.6}",
            result.name
        );
        println!(
            "{:>8}  trefftz: CDi={:+.6} CY={:+.6} CL={:+.6}",
            "", result.farfield[0], result.farfield[1], result.farfield[2]
        );
    }

    let stab_start = Instant::now();
    let stab = solve_stability_case(&aircraft, &freestream, &references).expect("stability sweep");
    let stab_ms = stab_start.elapsed().as_secs_f64() * 1e3;
    println!("stability_time_ms={stab_ms:.3}");
    println!("derivatives (rows CD CY CL Cl Cm Cn; cols α β p̄ q̄ r̄):");
    for row in 0..6 {
        let r: Vec<String> = (0..5)
            .map(|col| format!("{:+10.5}", stab.derivatives[(row, col)]))
            .collect();
        println!("  [{}]", r.join(" "));
    }

    // streamlines over the wing tip, traced two spans downstream
    let seeds = [
        Vector3::new(-0.5, 5.2, 0.1),
        Vector3::new(-0.5, -5.2, 0.1),
    ];
    let lines = streamlines(
        &freestream,
        &seeds,
        &case.horseshoes,
        &case.circulations,
        2.0 * references.span,
        100,
    );
    for (seed, line) in seeds.iter().zip(&lines) {
        let end = line[line.len() - 1];
        println!(
            "streamline from ({:+.2} {:+.2} {:+.2}) ends at ({:+.3} {:+.3} {:+.3})",
            seed.x, seed.y, seed.z, end.x, end.y, end.z
        );
    }
}
