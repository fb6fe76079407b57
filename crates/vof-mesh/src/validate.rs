//! Mesh validation logic.

use std::collections::HashSet;

use vof_core::PatchId;

use crate::builder::PendingFace;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Cell;

/// Cells must exist and enclose a positive, finite volume.
pub(crate) fn validate_cells(cells: &[Cell]) -> MeshResult<()> {
    if cells.is_empty() {
        return Err(MeshError::Empty);
    }
    for (i, cell) in cells.iter().enumerate() {
        if !cell.volume.is_finite() || cell.volume <= 0.0 {
            return Err(MeshError::NonPositiveVolume {
                cell: i,
                volume: cell.volume,
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_patch_names(names: &[String]) -> MeshResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(MeshError::DuplicatePatch { name: name.clone() });
        }
    }
    Ok(())
}

pub(crate) fn validate_patch_ref(patch: PatchId, n_patches: usize) -> MeshResult<()> {
    if patch.idx() >= n_patches {
        return Err(MeshError::InvalidPatchRef { patch: patch.idx() });
    }
    Ok(())
}

/// Owner/neighbour must reference existing, distinct cells; the area vector
/// must be finite and non-zero.
pub(crate) fn validate_face(index: usize, face: &PendingFace, n_cells: usize) -> MeshResult<()> {
    if face.owner.idx() >= n_cells {
        return Err(MeshError::InvalidCellRef {
            face: index,
            cell: face.owner.idx(),
        });
    }
    if let Some(nb) = face.neighbour {
        if nb.idx() >= n_cells {
            return Err(MeshError::InvalidCellRef {
                face: index,
                cell: nb.idx(),
            });
        }
        if nb == face.owner {
            return Err(MeshError::SelfNeighbour { face: index });
        }
    }
    let mag = face.area.norm();
    if !mag.is_finite() || mag <= 0.0 {
        return Err(MeshError::DegenerateFace { face: index });
    }
    Ok(())
}
