//! Uniform Cartesian block meshes.

use vof_core::{Length, VofError};

use crate::builder::MeshBuilder;
use crate::error::MeshResult;
use crate::mesh::{Mesh, Vector};

/// Patch names created by [`block_mesh`], in patch-id order.
pub const BLOCK_PATCHES: [&str; 6] = ["xMin", "xMax", "yMin", "yMax", "zMin", "zMax"];

/// Build a uniform `nx × ny × nz` block spanning `[0, Lx] × [0, Ly] × [0, Lz]`.
///
/// Every block side becomes its own patch (see [`BLOCK_PATCHES`]). A 2-D case
/// is simply `nz == 1`: with zero-gradient boundary values the `zMin`/`zMax`
/// contributions cancel.
pub fn block_mesh(cells: [usize; 3], extent: [Length; 3]) -> MeshResult<Mesh> {
    let [nx, ny, nz] = cells;
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(VofError::InvalidArg {
            what: "block cell counts must be positive",
        }
        .into());
    }
    let dx = extent[0].value / nx as f64;
    let dy = extent[1].value / ny as f64;
    let dz = extent[2].value / nz as f64;
    if !(dx > 0.0 && dy > 0.0 && dz > 0.0) {
        return Err(VofError::InvalidArg {
            what: "block extent must be positive",
        }
        .into());
    }

    let mut builder = MeshBuilder::new();
    let index = |i: usize, j: usize, k: usize| i + nx * (j + ny * k);
    let mut ids = Vec::with_capacity(nx * ny * nz);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                ids.push(builder.add_cell(cell_centre(i, j, k, [dx, dy, dz]), dx * dy * dz)?);
            }
        }
    }
    let patches = BLOCK_PATCHES
        .iter()
        .map(|n| builder.add_patch(*n))
        .collect::<MeshResult<Vec<_>>>()?;

    let (ax, ay, az) = (dy * dz, dx * dz, dx * dy);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let own = ids[index(i, j, k)];
                let c = cell_centre(i, j, k, [dx, dy, dz]);

                // +x / +y / +z neighbours (or the max-side patch)
                let fx = c + Vector::new(0.5 * dx, 0.0, 0.0);
                let sx = Vector::new(ax, 0.0, 0.0);
                if i + 1 < nx {
                    builder.add_internal_face(own, ids[index(i + 1, j, k)], fx, sx);
                } else {
                    builder.add_boundary_face(patches[1], own, fx, sx);
                }
                let fy = c + Vector::new(0.0, 0.5 * dy, 0.0);
                let sy = Vector::new(0.0, ay, 0.0);
                if j + 1 < ny {
                    builder.add_internal_face(own, ids[index(i, j + 1, k)], fy, sy);
                } else {
                    builder.add_boundary_face(patches[3], own, fy, sy);
                }
                let fz = c + Vector::new(0.0, 0.0, 0.5 * dz);
                let sz = Vector::new(0.0, 0.0, az);
                if k + 1 < nz {
                    builder.add_internal_face(own, ids[index(i, j, k + 1)], fz, sz);
                } else {
                    builder.add_boundary_face(patches[5], own, fz, sz);
                }

                // min-side patches
                if i == 0 {
                    builder.add_boundary_face(patches[0], own, c - Vector::new(0.5 * dx, 0.0, 0.0), -sx);
                }
                if j == 0 {
                    builder.add_boundary_face(patches[2], own, c - Vector::new(0.0, 0.5 * dy, 0.0), -sy);
                }
                if k == 0 {
                    builder.add_boundary_face(patches[4], own, c - Vector::new(0.0, 0.0, 0.5 * dz), -sz);
                }
            }
        }
    }

    builder.build()
}

fn cell_centre(i: usize, j: usize, k: usize, d: [f64; 3]) -> Vector {
    Vector::new(
        (i as f64 + 0.5) * d[0],
        (j as f64 + 0.5) * d[1],
        (k as f64 + 0.5) * d[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vof_core::units::m;

    #[test]
    fn face_counts_for_small_block() {
        let mesh = block_mesh([3, 2, 1], [m(3.0), m(2.0), m(1.0)]).unwrap();
        assert_eq!(mesh.n_cells(), 6);
        // x-internal: 2*2, y-internal: 3*1
        assert_eq!(mesh.n_internal_faces(), 7);
        let sizes = mesh.patch_sizes();
        assert_eq!(sizes, vec![2, 2, 3, 3, 6, 6]);
        assert!((mesh.total_volume() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn every_cell_is_closed() {
        let mesh = block_mesh([2, 2, 2], [m(1.0), m(1.0), m(1.0)]).unwrap();
        for cell in mesh.cells() {
            let mut sum = Vector::zeros();
            for face_id in mesh.cell_faces(cell.id) {
                let face = &mesh.faces()[face_id.idx()];
                if face.owner == cell.id {
                    sum += face.area;
                } else {
                    sum -= face.area;
                }
            }
            assert!(sum.norm() < 1e-12, "cell {} not closed", cell.id);
        }
    }

    #[test]
    fn zero_cells_rejected() {
        assert!(block_mesh([0, 1, 1], [m(1.0), m(1.0), m(1.0)]).is_err());
    }
}
