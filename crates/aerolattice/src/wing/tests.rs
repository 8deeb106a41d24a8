use super::*;
use crate::foil::Airfoil;
use crate::geom::RigidTransform;
use approx::assert_relative_eq;
use nalgebra::Vector3;

fn naca0012() -> Airfoil {
    Airfoil::naca4(0.0, 0.0, 0.12, 40, true)
}

fn trapezoidal_half_wing() -> HalfWing {
    HalfWing::new(
        vec![naca0012(), naca0012(), naca0012()],
        vec![1.0, 0.6, 0.2],
        vec![2.0_f64.to_radians(), 0.0, -0.2_f64.to_radians()],
        vec![5.0, 0.5],
        vec![5.0_f64.to_radians(), 5.0_f64.to_radians()],
        vec![5.0_f64.to_radians(), 5.0_f64.to_radians()],
    )
    .unwrap()
}

fn rectangular_half_wing(chord: f64, span: f64) -> HalfWing {
    HalfWing::new(
        vec![naca0012(), naca0012()],
        vec![chord, chord],
        vec![0.0, 0.0],
        vec![span],
        vec![0.0],
        vec![0.0],
    )
    .unwrap()
}

#[test]
fn trapezoidal_half_wing_planform_quantities() {
    let wing = trapezoidal_half_wing();
    assert_relative_eq!(wing.span(), 5.5, epsilon = 1e-6);
    assert_relative_eq!(wing.projected_area(), 4.19939047, epsilon = 1e-6);
    assert_relative_eq!(wing.mean_aerodynamic_chord(), 0.79841269, epsilon = 1e-6);
    assert_relative_eq!(wing.aspect_ratio(), 7.20342634, epsilon = 1e-6);
    assert_relative_eq!(wing.taper_ratio(), 0.2, epsilon = 1e-12);
    let mac = wing.mean_aerodynamic_center();
    assert_relative_eq!(mac.y, 1.33432540, epsilon = 1e-6);
    assert_relative_eq!(mac.x, 0.31634152, epsilon = 1e-6);
    assert_relative_eq!(mac.z, 0.0, epsilon = 1e-12);
}

#[test]
fn planform_quantities_scale_with_chord() {
    let wing = trapezoidal_half_wing();
    let scaled = wing.scale_chords(2.0);
    assert_relative_eq!(scaled.span(), wing.span(), epsilon = 1e-12);
    assert_relative_eq!(
        scaled.projected_area(),
        2.0 * wing.projected_area(),
        epsilon = 1e-10
    );
    assert_relative_eq!(
        scaled.mean_aerodynamic_chord(),
        2.0 * wing.mean_aerodynamic_chord(),
        epsilon = 1e-10
    );
    assert_relative_eq!(
        scaled.aspect_ratio(),
        0.5 * wing.aspect_ratio(),
        epsilon = 1e-10
    );
}

#[test]
fn symmetric_wing_doubles_the_half() {
    let half = trapezoidal_half_wing();
    let wing = Wing::symmetric(half.clone());
    assert_relative_eq!(wing.span(), 2.0 * half.span(), epsilon = 1e-12);
    assert_relative_eq!(
        wing.projected_area(),
        2.0 * half.projected_area(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        wing.mean_aerodynamic_chord(),
        half.mean_aerodynamic_chord(),
        epsilon = 1e-12
    );
    let mac = wing.mean_aerodynamic_center();
    assert_relative_eq!(mac.y, 0.0, epsilon = 1e-12);
}

#[test]
fn leading_and_trailing_edges_of_a_rectangle() {
    let wing = rectangular_half_wing(0.5, 2.0);
    let le = wing.leading_edge(false);
    let te = wing.trailing_edge(false);
    assert_relative_eq!(le[0], Vector3::zeros(), epsilon = 1e-14);
    assert_relative_eq!(le[1], Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-14);
    assert_relative_eq!(te[0], Vector3::new(0.5, 0.0, 0.0), epsilon = 1e-14);
    assert_relative_eq!(te[1], Vector3::new(0.5, 2.0, 0.0), epsilon = 1e-14);
    // mirrored half flips y only
    let le_m = wing.leading_edge(true);
    assert_relative_eq!(le_m[1], Vector3::new(0.0, -2.0, 0.0), epsilon = 1e-14);
}

#[test]
fn positive_twist_drops_the_trailing_edge() {
    let wing = HalfWing::new(
        vec![naca0012(), naca0012()],
        vec![1.0, 1.0],
        vec![0.1, 0.1],
        vec![1.0],
        vec![0.0],
        vec![0.0],
    )
    .unwrap();
    let te = wing.trailing_edge(false);
    assert!(te[0].z < 0.0, "trailing edge z {}", te[0].z);
    assert_relative_eq!(te[0].z, -(0.1_f64.sin()), epsilon = 1e-12);
}

#[test]
fn construction_rejects_degenerate_sections() {
    let f = naca0012;
    assert!(matches!(
        HalfWing::new(vec![f()], vec![1.0], vec![0.0], vec![], vec![], vec![]),
        Err(GeometryError::TooFewSections { .. })
    ));
    assert!(matches!(
        HalfWing::new(
            vec![f(), f()],
            vec![1.0, 0.0],
            vec![0.0, 0.0],
            vec![1.0],
            vec![0.0],
            vec![0.0]
        ),
        Err(GeometryError::InvalidChord { index: 1, .. })
    ));
    assert!(matches!(
        HalfWing::new(
            vec![f(), f()],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![-1.0],
            vec![0.0],
            vec![0.0]
        ),
        Err(GeometryError::InvalidSpan { index: 0, .. })
    ));
    assert!(matches!(
        HalfWing::new(
            vec![f(), f()],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0],
            vec![0.0]
        ),
        Err(GeometryError::LengthMismatch { .. })
    ));
}

#[test]
fn uniform_mesh_of_a_rectangle() {
    let wing = rectangular_half_wing(1.0, 2.0);
    let cfg = MeshConfig::new(vec![4], 3).with_spacing(Spacing::Uniform, Spacing::Uniform);
    let panels = panel_halfwing(&wing, &cfg).unwrap();
    assert_eq!(panels.len(), 12);
    assert_eq!(panels.camber_panels.len(), 12);
    let first = panels.horseshoe_panels[0];
    assert_relative_eq!(first.p1, Vector3::zeros(), epsilon = 1e-12);
    assert_relative_eq!(first.p2, Vector3::new(1.0 / 3.0, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(
        first.p3,
        Vector3::new(1.0 / 3.0, 0.5, 0.0),
        epsilon = 1e-12
    );
    assert_relative_eq!(first.p4, Vector3::new(0.0, 0.5, 0.0), epsilon = 1e-12);
    for p in &panels.camber_panels {
        assert_relative_eq!(p.normal(), Vector3::z(), epsilon = 1e-9);
    }
}

#[test]
fn wing_mesh_mirrors_the_left_half() {
    let wing = Wing::symmetric(rectangular_half_wing(1.0, 2.0));
    let cfg = MeshConfig::new(vec![4], 2).with_spacing(Spacing::Cosine, Spacing::Uniform);
    let panels = panel_wing(&wing, &cfg).unwrap();
    assert_eq!(panels.len(), 16);
    // left strip j (tip-first) mirrors right strip 3-j; p1 maps to p4
    let per_half = 8;
    let nc = 2;
    for j in 0..4 {
        for i in 0..nc {
            let l = panels.horseshoe_panels[j * nc + i];
            let r = panels.horseshoe_panels[per_half + (3 - j) * nc + i];
            assert_relative_eq!(l.p1.x, r.p4.x, epsilon = 1e-12);
            assert_relative_eq!(l.p1.y, -r.p4.y, epsilon = 1e-12);
            assert_relative_eq!(l.p1.z, r.p4.z, epsilon = 1e-12);
        }
    }
    // all normals up
    for p in &panels.horseshoe_panels {
        assert!(p.normal().z > 0.99);
    }
}

#[test]
fn cambered_section_bends_only_the_camber_mesh() {
    let naca2412 = Airfoil::naca4(0.02, 0.4, 0.12, 50, true);
    let wing = HalfWing::new(
        vec![naca2412.clone(), naca2412],
        vec![1.0, 1.0],
        vec![0.0, 0.0],
        vec![3.0],
        vec![0.0],
        vec![0.0],
    )
    .unwrap();
    let cfg = MeshConfig::new(vec![3], 6);
    let panels = panel_halfwing(&wing, &cfg).unwrap();
    for p in &panels.horseshoe_panels {
        for q in p.points() {
            assert_relative_eq!(q.z, 0.0, epsilon = 1e-12);
        }
    }
    let max_camber_z = panels
        .camber_panels
        .iter()
        .flat_map(|p| p.points())
        .map(|q| q.z)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(max_camber_z > 0.01, "camber mesh stayed flat");
    for p in &panels.camber_panels {
        assert!(p.normal().z > 0.9);
    }
}

#[test]
fn rigid_transform_round_trips_a_mesh() {
    let wing = trapezoidal_half_wing();
    let cfg = MeshConfig::new(vec![5], 4);
    let panels = panel_halfwing(&wing, &cfg).unwrap();
    let t = RigidTransform::new(
        Vector3::new(4.0, 0.0, 0.6),
        Vector3::new(0.3, 1.0, -0.2),
        0.4,
    );
    for p in &panels.horseshoe_panels {
        let back = p.transform(&t).inverse_transform(&t);
        for (a, b) in p.points().iter().zip(back.points()) {
            assert_relative_eq!(*a, b, epsilon = 1e-10);
        }
    }
}

#[test]
fn placement_offsets_the_whole_mesh() {
    let wing = rectangular_half_wing(1.0, 1.0);
    let offset = Vector3::new(5.0, 0.0, 1.0);
    let cfg = MeshConfig::new(vec![2], 2)
        .with_placement(RigidTransform::translation(offset));
    let base = panel_halfwing(&wing, &MeshConfig::new(vec![2], 2)).unwrap();
    let moved = panel_halfwing(&wing, &cfg).unwrap();
    for (p, q) in base.horseshoe_panels.iter().zip(&moved.horseshoe_panels) {
        assert_relative_eq!(p.p1 + offset, q.p1, epsilon = 1e-12);
    }
}
