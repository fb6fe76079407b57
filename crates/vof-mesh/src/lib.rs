//! vof-mesh: finite-volume mesh and field layer.
//!
//! Provides:
//! - Cell/face/patch mesh with owner/neighbour addressing
//! - Incremental mesh builder with validation, plus a Cartesian block generator
//! - Cell-centred (`VolField`) and face-centred (`SurfaceField`) fields with
//!   per-patch boundary values
//! - Explicit calculus (`fvc`): Gauss gradient, linear interpolation,
//!   divergence, face flux and face averaging
//!
//! Faces are stored internal faces first, then boundary faces grouped
//! contiguously by patch.
//!
//! # Example
//!
//! ```
//! use vof_core::units::m;
//! use vof_mesh::{block_mesh, fvc, VolScalarField};
//!
//! let mesh = block_mesh([4, 4, 1], [m(1.0), m(1.0), m(0.25)]).unwrap();
//! let alpha = VolScalarField::uniform(&mesh, 1.0);
//! let grad = fvc::grad(&mesh, &alpha).unwrap();
//! assert!(grad.internal().iter().all(|g| g.norm() < 1e-12));
//! ```

pub mod block;
pub mod builder;
pub mod error;
pub mod field;
pub mod fvc;
pub mod mesh;
pub(crate) mod validate;

pub use block::block_mesh;
pub use builder::MeshBuilder;
pub use error::{MeshError, MeshResult};
pub use field::{
    FieldValue, PatchValues, SurfaceField, SurfaceScalarField, SurfaceVectorField, VolField,
    VolScalarField, VolVectorField,
};
pub use mesh::{Cell, Face, FaceSlot, Mesh, Patch, Vector};
