//! vof-curvature: pluggable interface-curvature models for VOF solvers.
//!
//! A curvature model turns the phase-indicator field `alpha` into a cell
//! curvature field `K` and a face-interpolated interface normal, the inputs of
//! the surface-tension force. Models are selected at runtime by name:
//!
//! - [`CurvatureModel`] is the capability every model implements
//! - [`CurvatureModelBase`] holds the state every model shares (name, borrowed
//!   interface properties, `<type>Coeffs` sub-dictionary) and the narrow
//!   accessors models use to reach alpha, delta-N and the contact-angle
//!   correction
//! - [`registry`] maps type names to constructors; built-in models are always
//!   present and other crates add theirs with [`register_curvature_model!`]
//!
//! # Example
//!
//! ```ignore
//! let model = vof_curvature::create("smoothed", &interface)?;
//! model.compute_curvature(&mut k, &mut n_hat_f)?;
//! ```

pub mod base;
pub mod error;
pub mod interface;
pub mod model;
pub mod models;
pub mod registry;

pub use base::{COEFFS_SUFFIX, CurvatureModelBase, coeffs_key};
pub use error::{CurvatureError, CurvatureResult, RegistryError};
pub use interface::InterfaceProperties;
pub use model::CurvatureModel;
pub use models::{SmoothedCurvature, SmoothingCoeffs, StandardCurvature};
pub use registry::{
    CurvatureModelCtor, CurvatureModelReg, CurvatureModelRegistry, MODEL_KEY, create,
    create_named, model_types, select,
};

#[doc(hidden)]
pub use inventory;

/// Register a curvature model with the process-wide registry.
///
/// `ctor` must be a function usable as a [`CurvatureModelCtor`]:
///
/// ```ignore
/// fn construct<'a>(
///     name: &str,
///     interface: &'a dyn InterfaceProperties,
///     model_type: &str,
/// ) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> { ... }
///
/// register_curvature_model!("myModel", construct);
/// ```
///
/// Registering a type name twice aborts the process the first time the
/// registry is accessed.
#[macro_export]
macro_rules! register_curvature_model {
    ($model_type:expr, $ctor:path) => {
        $crate::inventory::submit! {
            $crate::CurvatureModelReg::new($model_type, $ctor)
        }
    };
}
