//! Curvature models driven by an `InterfaceState`.

use vof_config::{Dictionary, MemorySource};
use vof_core::units::m;
use vof_curvature::{InterfaceProperties, select};
use vof_interface::InterfaceState;
use vof_mesh::{SurfaceVectorField, Vector, VolScalarField, block_mesh};

const N: usize = 48;
const RADIUS: f64 = 0.3;

/// Half droplet sitting on the yMin wall, centred at x = 0.5.
fn sessile(yaml: &str) -> InterfaceState {
    let mesh = block_mesh([N, N, 1], [m(1.0), m(1.0), m(1.0 / N as f64)]).unwrap();
    let width = 1.5 / N as f64;
    let alpha = VolScalarField::from_fn(&mesh, |c| {
        let r = ((c.x - 0.5).powi(2) + c.y.powi(2)).sqrt();
        0.5 * (1.0 - ((r - RADIUS) / width).tanh())
    });
    let config = MemorySource::new(Dictionary::from_yaml_str(yaml).unwrap());
    InterfaceState::new(mesh, alpha, Box::new(config)).unwrap()
}

fn compute(state: &InterfaceState) -> (VolScalarField, SurfaceVectorField) {
    let model = select(state).unwrap();
    let mut k = VolScalarField::uniform(state.mesh(), 0.0);
    let mut n = SurfaceVectorField::uniform(state.mesh(), Vector::zeros());
    model.compute_curvature(&mut k, &mut n).unwrap();
    (k, n)
}

/// Wall faces whose owner cell lies inside the interface band.
fn wetted_faces(state: &InterfaceState) -> Vec<usize> {
    let wall = state.mesh().find_patch("yMin").unwrap();
    state
        .mesh()
        .patch_faces(wall)
        .iter()
        .enumerate()
        .filter(|(_, f)| (0.05..0.95).contains(&state.alpha().internal()[f.owner.idx()]))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn configured_contact_angle_is_imposed_on_wall() {
    let mut state = sessile("curvatureModel: standard\ncontactAngles:\n  yMin: 60\n");
    assert_eq!(state.load_contact_angles().unwrap(), 1);
    let (k, n) = compute(&state);
    assert!(k.is_finite());

    let wall = state.mesh().find_patch("yMin").unwrap();
    let wall_normal = -Vector::y();
    let faces = wetted_faces(&state);
    assert!(!faces.is_empty());
    for i in faces {
        let normal = n.boundary().patch(wall)[i];
        let cos = normal.dot(&wall_normal) / normal.norm();
        assert!((cos - 0.5).abs() < 1e-3, "face {i}: cos = {cos}");
    }
}

#[test]
fn without_contact_angles_wall_normals_follow_alpha() {
    let state = sessile("curvatureModel: standard\n");
    let (_, n) = compute(&state);
    let wall = state.mesh().find_patch("yMin").unwrap();
    // Droplet centred on the wall: the interface meets it at 90 degrees.
    for i in wetted_faces(&state) {
        let normal = n.boundary().patch(wall)[i];
        assert!(normal.y.abs() < 0.1 * normal.norm(), "face {i}: {normal:?}");
    }
}

/// Largest |K| over cells in the interface band.
fn band_max(state: &InterfaceState, k: &VolScalarField) -> f64 {
    state
        .alpha()
        .internal()
        .iter()
        .zip(k.internal())
        .filter(|(a, _)| (0.3..0.7).contains(*a))
        .fold(0.0_f64, |m, (_, v)| m.max(v.abs()))
}

#[test]
fn models_see_updated_alpha() {
    let mut state = sessile("curvatureModel: smoothed\n");
    let (k_before, _) = compute(&state);
    let curved = band_max(&state, &k_before);

    let flat = VolScalarField::from_fn(state.mesh(), |c| {
        0.5 * (1.0 - ((c.y - 0.5) * N as f64 / 1.5).tanh())
    });
    state.set_alpha(flat).unwrap();
    let (k_after, _) = compute(&state);
    let planar = band_max(&state, &k_after);

    assert!(curved > 1.0, "curved band max |K| = {curved}");
    assert!(planar < 0.1 * curved, "planar band max |K| = {planar}");
}
