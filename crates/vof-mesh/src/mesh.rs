//! Core mesh data structures.

use vof_core::{CellId, FaceId, PatchId, Real};

/// Geometric vector type used for positions, area vectors and gradients.
pub type Vector = nalgebra::Vector3<Real>;

/// A control volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: CellId,
    pub centre: Vector,
    pub volume: Real,
}

/// A face between two cells, or between a cell and the domain boundary.
///
/// The area vector points out of the owner cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub id: FaceId,
    pub owner: CellId,
    pub neighbour: Option<CellId>,
    pub centre: Vector,
    pub area: Vector,
}

impl Face {
    /// Face area magnitude |Sf|.
    pub fn mag_area(&self) -> Real {
        self.area.norm()
    }

    /// Outward unit normal (w.r.t. the owner).
    pub fn unit_normal(&self) -> Vector {
        self.area / self.mag_area()
    }

    pub fn is_boundary(&self) -> bool {
        self.neighbour.is_none()
    }
}

/// A named group of contiguous boundary faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub id: PatchId,
    pub name: String,
    /// Global index of the first face of this patch.
    pub start: usize,
    pub size: usize,
}

impl Patch {
    pub fn face_range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.size
    }
}

/// Where a face's value lives inside a surface field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceSlot {
    Internal(usize),
    Boundary { patch: usize, local: usize },
}

/// The mesh: a validated, immutable collection of cells, faces and patches.
///
/// Stores compact cell→face adjacency (offsets + flat list) so per-cell
/// gathers can run independently.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub(crate) cells: Vec<Cell>,
    pub(crate) faces: Vec<Face>,
    pub(crate) n_internal_faces: usize,
    pub(crate) patches: Vec<Patch>,
    pub(crate) face_slots: Vec<FaceSlot>,

    /// Cell i's faces are in cell_faces[cell_face_offsets[i]..cell_face_offsets[i+1]].
    pub(crate) cell_face_offsets: Vec<usize>,
    pub(crate) cell_faces: Vec<FaceId>,
}

impl Mesh {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    /// All faces: internal first, then boundary faces by patch.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn n_internal_faces(&self) -> usize {
        self.n_internal_faces
    }

    pub fn internal_faces(&self) -> &[Face] {
        &self.faces[..self.n_internal_faces]
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn patch(&self, id: PatchId) -> Option<&Patch> {
        self.patches.get(id.idx())
    }

    /// Find a patch by name.
    pub fn find_patch(&self, name: &str) -> Option<PatchId> {
        self.patches.iter().find(|p| p.name == name).map(|p| p.id)
    }

    /// Boundary faces belonging to a patch (empty for an unknown id).
    pub fn patch_faces(&self, id: PatchId) -> &[Face] {
        match self.patch(id) {
            Some(patch) => &self.faces[patch.face_range()],
            None => &[],
        }
    }

    pub fn face_slot(&self, face: usize) -> Option<FaceSlot> {
        self.face_slots.get(face).copied()
    }

    /// Faces bounding a cell, sorted by face index.
    pub fn cell_faces(&self, cell: CellId) -> &[FaceId] {
        let idx = cell.idx();
        if idx >= self.cells.len() {
            return &[];
        }
        let start = self.cell_face_offsets[idx];
        let end = self.cell_face_offsets[idx + 1];
        &self.cell_faces[start..end]
    }

    pub fn total_volume(&self) -> Real {
        self.cells.iter().map(|c| c.volume).sum()
    }

    pub fn mean_cell_volume(&self) -> Real {
        self.total_volume() / self.cells.len() as Real
    }

    /// Number of values per patch, in patch order.
    pub fn patch_sizes(&self) -> Vec<usize> {
        self.patches.iter().map(|p| p.size).collect()
    }
}
