//! Explicit finite-volume calculus.
//!
//! Gauss-theorem operators on cell-centred fields. Per-cell gathers run in
//! parallel over the cell→face adjacency; results are deterministic since
//! each cell sums its own faces in face order.

use rayon::prelude::*;
use vof_core::Real;

use crate::error::MeshResult;
use crate::field::{
    FieldValue, SurfaceField, SurfaceScalarField, SurfaceVectorField, VolField, VolScalarField,
    VolVectorField,
};
use crate::mesh::{Face, Mesh};

/// Linear-interpolation weight of the owner value on an internal face.
pub fn linear_weight(mesh: &Mesh, face: &Face) -> Real {
    let Some(nb) = face.neighbour else {
        return 1.0;
    };
    let d_own = (face.centre - mesh.cells()[face.owner.idx()].centre).norm();
    let d_nb = (mesh.cells()[nb.idx()].centre - face.centre).norm();
    let sum = d_own + d_nb;
    if sum > 0.0 { d_nb / sum } else { 0.5 }
}

/// Interpolate a cell field to faces. Boundary faces take the field's
/// boundary values.
pub fn interpolate<T: FieldValue>(mesh: &Mesh, vf: &VolField<T>) -> MeshResult<SurfaceField<T>> {
    vf.ensure_matches(mesh, "interpolate input")?;
    let values = vf.internal();
    let mut out = SurfaceField::uniform(mesh, T::zero());
    out.internal_mut()
        .par_iter_mut()
        .zip(mesh.internal_faces().par_iter())
        .for_each(|(slot, face)| {
            let own = values[face.owner.idx()];
            *slot = match face.neighbour {
                Some(nb) => {
                    let w = linear_weight(mesh, face);
                    own * w + values[nb.idx()] * (1.0 - w)
                }
                None => own,
            };
        });
    for patch in mesh.patches() {
        out.boundary_mut()
            .patch_mut(patch.id)
            .copy_from_slice(vf.boundary().patch(patch.id));
    }
    Ok(out)
}

/// Gauss gradient: `(1/V) Σ Sf φf`.
pub fn grad(mesh: &Mesh, vf: &VolScalarField) -> MeshResult<VolVectorField> {
    let phi_f = interpolate(mesh, vf)?;
    let internal = surface_sum(mesh, |face| {
        face.area * phi_f.at(mesh, face.id.idx()).unwrap_or(0.0)
    });
    VolField::from_internal(mesh, internal)
}

/// Gauss divergence of a face flux: `(1/V) Σ φf`.
pub fn div(mesh: &Mesh, flux: &SurfaceScalarField) -> MeshResult<VolScalarField> {
    flux.ensure_matches(mesh, "divergence input")?;
    let internal = surface_sum(mesh, |face| flux.at(mesh, face.id.idx()).unwrap_or(0.0));
    VolField::from_internal(mesh, internal)
}

/// Project a face vector field onto the face area vectors: `v · Sf`.
pub fn flux(mesh: &Mesh, vf: &SurfaceVectorField) -> MeshResult<SurfaceScalarField> {
    vf.ensure_matches(mesh, "flux input")?;
    let values: Vec<Real> = mesh
        .faces()
        .iter()
        .map(|f| vf.at(mesh, f.id.idx()).map_or(0.0, |v| v.dot(&f.area)))
        .collect();
    SurfaceField::from_faces(mesh, &values)
}

/// Area-weighted average of face values onto cells.
pub fn face_average(mesh: &Mesh, sf: &SurfaceScalarField) -> MeshResult<VolScalarField> {
    sf.ensure_matches(mesh, "average input")?;
    let internal: Vec<Real> = mesh
        .cells()
        .par_iter()
        .map(|cell| {
            let (weighted, total) =
                mesh.cell_faces(cell.id)
                    .iter()
                    .fold((0.0, 0.0), |(weighted, total), fid| {
                        let face = &mesh.faces()[fid.idx()];
                        let mag = face.mag_area();
                        let value = sf.at(mesh, fid.idx()).unwrap_or(0.0);
                        (weighted + mag * value, total + mag)
                    });
            if total > 0.0 { weighted / total } else { 0.0 }
        })
        .collect();
    VolField::from_internal(mesh, internal)
}

/// Sum antisymmetric face terms into each cell and divide by its volume.
///
/// `face_term` is evaluated from the owner's side; the neighbour receives it
/// with the opposite sign.
fn surface_sum<T, F>(mesh: &Mesh, face_term: F) -> Vec<T>
where
    T: FieldValue,
    F: Fn(&Face) -> T + Sync,
{
    mesh.cells()
        .par_iter()
        .map(|cell| {
            let sum = mesh
                .cell_faces(cell.id)
                .iter()
                .fold(T::zero(), |acc, fid| {
                    let face = &mesh.faces()[fid.idx()];
                    let term = face_term(face);
                    if face.owner == cell.id {
                        acc + term
                    } else {
                        acc + term * -1.0
                    }
                });
            sum * (1.0 / cell.volume)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::block_mesh;
    use crate::mesh::Vector;
    use proptest::prelude::*;
    use vof_core::units::m;

    fn mesh() -> Mesh {
        block_mesh([4, 4, 1], [m(1.0), m(1.0), m(0.25)]).unwrap()
    }

    #[test]
    fn interpolate_linear_is_exact_on_uniform_grid() {
        let mesh = mesh();
        let vf = VolScalarField::from_fn(&mesh, |c| 2.0 * c.x + c.y);
        let sf = interpolate(&mesh, &vf).unwrap();
        for (face, value) in mesh.internal_faces().iter().zip(sf.internal()) {
            let expected = 2.0 * face.centre.x + face.centre.y;
            assert!((value - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn gradient_of_linear_field_in_interior_cells() {
        let mesh = mesh();
        let vf = VolScalarField::from_fn(&mesh, |c| 3.0 * c.x - c.y);
        let g = grad(&mesh, &vf).unwrap();
        for (cell, gv) in mesh.cells().iter().zip(g.internal()) {
            let interior = cell.centre.x > 0.25 && cell.centre.x < 0.75
                && cell.centre.y > 0.25 && cell.centre.y < 0.75;
            if interior {
                assert!((gv.x - 3.0).abs() < 1e-10, "gx = {}", gv.x);
                assert!((gv.y + 1.0).abs() < 1e-10, "gy = {}", gv.y);
                assert!(gv.z.abs() < 1e-10);
            }
        }
    }

    #[test]
    fn divergence_of_uniform_vector_flux_vanishes() {
        let mesh = mesh();
        let v = SurfaceVectorField::uniform(&mesh, Vector::new(1.0, -2.0, 0.5));
        let phi = flux(&mesh, &v).unwrap();
        let d = div(&mesh, &phi).unwrap();
        assert!(d.internal().iter().all(|x| x.abs() < 1e-10));
    }

    #[test]
    fn face_average_of_uniform_is_uniform() {
        let mesh = mesh();
        let sf = SurfaceScalarField::uniform(&mesh, 0.7);
        let avg = face_average(&mesh, &sf).unwrap();
        assert!(avg.internal().iter().all(|x| (x - 0.7).abs() < 1e-14));
    }

    #[test]
    fn mismatched_field_is_rejected() {
        let mesh = mesh();
        let other = block_mesh([2, 2, 1], [m(1.0), m(1.0), m(0.25)]).unwrap();
        let vf = VolScalarField::uniform(&other, 1.0);
        assert!(grad(&mesh, &vf).is_err());
    }

    proptest! {
        #[test]
        fn interpolation_stays_between_neighbours(
            values in proptest::collection::vec(-1.0e3..1.0e3f64, 16)
        ) {
            let mesh = mesh();
            let vf = VolScalarField::from_internal(&mesh, values).unwrap();
            let sf = interpolate(&mesh, &vf).unwrap();
            for (face, v) in mesh.internal_faces().iter().zip(sf.internal()) {
                let a = vf.internal()[face.owner.idx()];
                let b = face.neighbour.map_or(a, |nb| vf.internal()[nb.idx()]);
                prop_assert!(*v >= a.min(b) - 1e-9 && *v <= a.max(b) + 1e-9);
            }
        }
    }
}
