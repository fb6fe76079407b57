//! Mesh-specific error types.

use thiserror::Error;
use vof_core::VofError;

pub type MeshResult<T> = Result<T, MeshError>;

/// Mesh construction, validation and field-shape errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("Mesh has no cells")]
    Empty,

    #[error("Face {face} refers to non-existent cell {cell}")]
    InvalidCellRef { face: usize, cell: usize },

    #[error("Face {face} has the same owner and neighbour")]
    SelfNeighbour { face: usize },

    #[error("Cell {cell} has non-positive volume {volume}")]
    NonPositiveVolume { cell: usize, volume: f64 },

    #[error("Face {face} has a degenerate area vector")]
    DegenerateFace { face: usize },

    #[error("Reference to non-existent patch {patch}")]
    InvalidPatchRef { patch: usize },

    #[error("Patch name '{name}' is used twice")]
    DuplicatePatch { name: String },

    #[error("Too many {what}: index {count} does not fit a 32-bit id")]
    TooLarge { what: &'static str, count: usize },

    #[error("Field {what} does not match mesh: expected {expected} values, got {actual}")]
    FieldSize {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Core(#[from] VofError),
}

impl From<MeshError> for VofError {
    fn from(err: MeshError) -> Self {
        match err {
            MeshError::FieldSize {
                what,
                expected,
                actual,
            } => VofError::SizeMismatch {
                what,
                expected,
                actual,
            },
            MeshError::Core(inner) => inner,
            _ => VofError::Invariant {
                what: "invalid mesh",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MeshError::InvalidCellRef { face: 3, cell: 99 };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("99"));
    }

    #[test]
    fn field_size_maps_to_size_mismatch() {
        let err = MeshError::FieldSize {
            what: "alpha",
            expected: 4,
            actual: 3,
        };
        let core: VofError = err.into();
        assert!(matches!(core, VofError::SizeMismatch { expected: 4, .. }));
    }
}
