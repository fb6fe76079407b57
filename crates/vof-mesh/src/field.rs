//! Cell- and face-centred fields.

use std::fmt::Debug;
use std::ops::{Add, Mul};

use vof_core::{PatchId, Real};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{FaceSlot, Mesh, Vector};

/// Values a field can hold.
pub trait FieldValue:
    Copy + Debug + PartialEq + Send + Sync + Add<Output = Self> + Mul<Real, Output = Self>
{
    fn zero() -> Self;

    fn is_finite_value(&self) -> bool;
}

impl FieldValue for Real {
    fn zero() -> Self {
        0.0
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl FieldValue for Vector {
    fn zero() -> Self {
        Vector::zeros()
    }

    fn is_finite_value(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }
}

/// Boundary values of a field, one slice per patch in patch order.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchValues<T> {
    patches: Vec<Vec<T>>,
}

impl<T: FieldValue> PatchValues<T> {
    pub fn uniform(mesh: &Mesh, value: T) -> Self {
        Self {
            patches: mesh.patch_sizes().into_iter().map(|n| vec![value; n]).collect(),
        }
    }

    /// Boundary values equal to the adjacent owner-cell values.
    pub fn zero_gradient(mesh: &Mesh, internal: &[T]) -> Self {
        let patches = mesh
            .patches()
            .iter()
            .map(|p| {
                mesh.patch_faces(p.id)
                    .iter()
                    .map(|f| internal[f.owner.idx()])
                    .collect()
            })
            .collect();
        Self { patches }
    }

    /// Number of patches.
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn patch(&self, id: PatchId) -> &[T] {
        self.patches.get(id.idx()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn patch_mut(&mut self, id: PatchId) -> &mut [T] {
        self.patches
            .get_mut(id.idx())
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.patches.iter().map(Vec::as_slice)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.patches.iter().flatten()
    }

    pub fn matches_mesh(&self, mesh: &Mesh) -> bool {
        self.patches.len() == mesh.patches().len()
            && self
                .patches
                .iter()
                .zip(mesh.patches())
                .all(|(vals, p)| vals.len() == p.size)
    }
}

/// Cell-centred field with boundary values.
#[derive(Debug, Clone, PartialEq)]
pub struct VolField<T> {
    internal: Vec<T>,
    boundary: PatchValues<T>,
}

pub type VolScalarField = VolField<Real>;
pub type VolVectorField = VolField<Vector>;

impl<T: FieldValue> VolField<T> {
    pub fn uniform(mesh: &Mesh, value: T) -> Self {
        Self {
            internal: vec![value; mesh.n_cells()],
            boundary: PatchValues::uniform(mesh, value),
        }
    }

    /// Wrap cell values; boundary values follow the adjacent cells.
    pub fn from_internal(mesh: &Mesh, internal: Vec<T>) -> MeshResult<Self> {
        if internal.len() != mesh.n_cells() {
            return Err(MeshError::FieldSize {
                what: "cell values",
                expected: mesh.n_cells(),
                actual: internal.len(),
            });
        }
        let boundary = PatchValues::zero_gradient(mesh, &internal);
        Ok(Self { internal, boundary })
    }

    /// Fill every cell from a function of the cell centre.
    pub fn from_fn(mesh: &Mesh, f: impl Fn(&Vector) -> T) -> Self {
        let internal: Vec<T> = mesh.cells().iter().map(|c| f(&c.centre)).collect();
        let boundary = PatchValues::zero_gradient(mesh, &internal);
        Self { internal, boundary }
    }

    pub fn internal(&self) -> &[T] {
        &self.internal
    }

    pub fn internal_mut(&mut self) -> &mut [T] {
        &mut self.internal
    }

    pub fn boundary(&self) -> &PatchValues<T> {
        &self.boundary
    }

    pub fn boundary_mut(&mut self) -> &mut PatchValues<T> {
        &mut self.boundary
    }

    /// Reset boundary values to the adjacent cell values.
    pub fn correct_boundary(&mut self, mesh: &Mesh) {
        self.boundary = PatchValues::zero_gradient(mesh, &self.internal);
    }

    pub fn matches_mesh(&self, mesh: &Mesh) -> bool {
        self.internal.len() == mesh.n_cells() && self.boundary.matches_mesh(mesh)
    }

    pub fn ensure_matches(&self, mesh: &Mesh, what: &'static str) -> MeshResult<()> {
        if self.matches_mesh(mesh) {
            return Ok(());
        }
        Err(MeshError::FieldSize {
            what,
            expected: mesh.n_cells(),
            actual: self.internal.len(),
        })
    }

    /// True when every cell and boundary value is finite.
    pub fn is_finite(&self) -> bool {
        self.internal.iter().all(T::is_finite_value)
            && self.boundary.values().all(T::is_finite_value)
    }
}

/// Face-centred field: internal faces plus per-patch boundary faces.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceField<T> {
    internal: Vec<T>,
    boundary: PatchValues<T>,
}

pub type SurfaceScalarField = SurfaceField<Real>;
pub type SurfaceVectorField = SurfaceField<Vector>;

impl<T: FieldValue> SurfaceField<T> {
    pub fn uniform(mesh: &Mesh, value: T) -> Self {
        Self {
            internal: vec![value; mesh.n_internal_faces()],
            boundary: PatchValues::uniform(mesh, value),
        }
    }

    /// Build from one value per mesh face (global face order).
    pub fn from_faces(mesh: &Mesh, values: &[T]) -> MeshResult<Self> {
        if values.len() != mesh.faces().len() {
            return Err(MeshError::FieldSize {
                what: "face values",
                expected: mesh.faces().len(),
                actual: values.len(),
            });
        }
        let n_int = mesh.n_internal_faces();
        let boundary = PatchValues {
            patches: mesh
                .patches()
                .iter()
                .map(|p| values[p.face_range()].to_vec())
                .collect(),
        };
        Ok(Self {
            internal: values[..n_int].to_vec(),
            boundary,
        })
    }

    pub fn internal(&self) -> &[T] {
        &self.internal
    }

    pub fn internal_mut(&mut self) -> &mut [T] {
        &mut self.internal
    }

    pub fn boundary(&self) -> &PatchValues<T> {
        &self.boundary
    }

    pub fn boundary_mut(&mut self) -> &mut PatchValues<T> {
        &mut self.boundary
    }

    /// Value on a face given its global index.
    pub fn at(&self, mesh: &Mesh, face: usize) -> Option<T> {
        match mesh.face_slot(face)? {
            FaceSlot::Internal(i) => self.internal.get(i).copied(),
            FaceSlot::Boundary { patch, local } => {
                self.boundary.patches.get(patch)?.get(local).copied()
            }
        }
    }

    pub fn matches_mesh(&self, mesh: &Mesh) -> bool {
        self.internal.len() == mesh.n_internal_faces() && self.boundary.matches_mesh(mesh)
    }

    pub fn ensure_matches(&self, mesh: &Mesh, what: &'static str) -> MeshResult<()> {
        if self.matches_mesh(mesh) {
            return Ok(());
        }
        Err(MeshError::FieldSize {
            what,
            expected: mesh.n_internal_faces(),
            actual: self.internal.len(),
        })
    }

    pub fn is_finite(&self) -> bool {
        self.internal.iter().all(T::is_finite_value)
            && self.boundary.values().all(T::is_finite_value)
    }

    /// Apply `f` to every face value (internal and boundary).
    pub fn map<U: FieldValue>(&self, f: impl Fn(T) -> U) -> SurfaceField<U> {
        SurfaceField {
            internal: self.internal.iter().map(|v| f(*v)).collect(),
            boundary: PatchValues {
                patches: self
                    .boundary
                    .patches
                    .iter()
                    .map(|p| p.iter().map(|v| f(*v)).collect())
                    .collect(),
            },
        }
    }
}
