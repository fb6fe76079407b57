//! Incremental mesh builder.

use vof_core::{CellId, FaceId, Id, PatchId, Real, ensure_finite};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Cell, Face, FaceSlot, Mesh, Patch, Vector};
use crate::validate;

#[derive(Debug, Clone)]
pub(crate) struct PendingFace {
    pub owner: CellId,
    pub neighbour: Option<CellId>,
    pub centre: Vector,
    pub area: Vector,
}

/// Builder for constructing a mesh incrementally.
///
/// Faces may be added in any order; `build()` validates everything and lays
/// the faces out internal-first, then patch by patch.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    cells: Vec<Cell>,
    internal: Vec<PendingFace>,
    boundary: Vec<(PatchId, PendingFace)>,
    patch_names: Vec<String>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell and return its ID.
    pub fn add_cell(&mut self, centre: Vector, volume: Real) -> MeshResult<CellId> {
        let id = next_id(self.cells.len(), "cells")?;
        self.cells.push(Cell { id, centre, volume });
        Ok(id)
    }

    /// Add a boundary patch and return its ID.
    pub fn add_patch(&mut self, name: impl Into<String>) -> MeshResult<PatchId> {
        let id = next_id(self.patch_names.len(), "patches")?;
        self.patch_names.push(name.into());
        Ok(id)
    }

    /// Add a face shared by two cells. `area` points from `owner` to `neighbour`.
    pub fn add_internal_face(
        &mut self,
        owner: CellId,
        neighbour: CellId,
        centre: Vector,
        area: Vector,
    ) {
        self.internal.push(PendingFace {
            owner,
            neighbour: Some(neighbour),
            centre,
            area,
        });
    }

    /// Add a boundary face on `patch`. `area` points out of the domain.
    pub fn add_boundary_face(&mut self, patch: PatchId, owner: CellId, centre: Vector, area: Vector) {
        self.boundary.push((
            patch,
            PendingFace {
                owner,
                neighbour: None,
                centre,
                area,
            },
        ));
    }

    /// Build and validate the mesh.
    pub fn build(self) -> MeshResult<Mesh> {
        validate::validate_cells(&self.cells)?;
        validate::validate_patch_names(&self.patch_names)?;
        for (patch, _) in &self.boundary {
            validate::validate_patch_ref(*patch, self.patch_names.len())?;
        }

        // Internal faces first, then boundary faces grouped by patch (stable).
        let mut ordered: Vec<PendingFace> = self.internal;
        let n_internal_faces = ordered.len();
        let mut patches = Vec::with_capacity(self.patch_names.len());
        let mut face_slots: Vec<FaceSlot> = (0..n_internal_faces).map(FaceSlot::Internal).collect();

        for (patch_idx, name) in self.patch_names.into_iter().enumerate() {
            let start = ordered.len();
            let mut local = 0;
            for (patch, face) in &self.boundary {
                if patch.idx() == patch_idx {
                    ordered.push(face.clone());
                    face_slots.push(FaceSlot::Boundary {
                        patch: patch_idx,
                        local,
                    });
                    local += 1;
                }
            }
            patches.push(Patch {
                id: next_id(patch_idx, "patches")?,
                name,
                start,
                size: local,
            });
        }

        let mut faces = Vec::with_capacity(ordered.len());
        for (i, pending) in ordered.into_iter().enumerate() {
            validate::validate_face(i, &pending, self.cells.len())?;
            ensure_finite(pending.centre.norm(), "face centre")?;
            faces.push(Face {
                id: next_id(i, "faces")?,
                owner: pending.owner,
                neighbour: pending.neighbour,
                centre: pending.centre,
                area: pending.area,
            });
        }

        let (cell_face_offsets, cell_faces) = Self::build_adjacency(self.cells.len(), &faces);

        Ok(Mesh {
            cells: self.cells,
            faces,
            n_internal_faces,
            patches,
            face_slots,
            cell_face_offsets,
            cell_faces,
        })
    }

    /// Build compact adjacency lists: for each cell, collect its faces.
    fn build_adjacency(n_cells: usize, faces: &[Face]) -> (Vec<usize>, Vec<FaceId>) {
        let mut per_cell: Vec<Vec<FaceId>> = vec![Vec::new(); n_cells];
        for face in faces {
            per_cell[face.owner.idx()].push(face.id);
            if let Some(nb) = face.neighbour {
                per_cell[nb.idx()].push(face.id);
            }
        }

        let mut offsets = Vec::with_capacity(n_cells + 1);
        let mut flat = Vec::new();
        offsets.push(0);
        for mut list in per_cell {
            list.sort_by_key(|f| f.index());
            flat.extend_from_slice(&list);
            offsets.push(flat.len());
        }
        (offsets, flat)
    }
}

/// ID for the entity stored at `index`.
fn next_id(index: usize, what: &'static str) -> MeshResult<Id> {
    Id::try_from_usize(index).ok_or(MeshError::TooLarge { what, count: index })
}
