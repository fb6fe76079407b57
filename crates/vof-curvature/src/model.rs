//! The curvature model capability.

use vof_config::Dictionary;
use vof_mesh::{SurfaceVectorField, VolScalarField};

use crate::base::CurvatureModelBase;
use crate::error::CurvatureResult;

/// A runtime-selectable interface-curvature model.
///
/// Implementations embed a [`CurvatureModelBase`] and expose it through
/// [`CurvatureModel::base`]; identity and coefficient accessors come for free.
pub trait CurvatureModel {
    /// Shared state (name, interface properties, coefficients).
    fn base(&self) -> &CurvatureModelBase<'_>;

    /// Fill `k` (cell curvature) and `n_hat_f` (face unit normals) in place.
    ///
    /// On success both outputs are fully overwritten, internal and boundary
    /// values alike. On error neither output has been touched.
    fn compute_curvature(
        &self,
        k: &mut VolScalarField,
        n_hat_f: &mut SurfaceVectorField,
    ) -> CurvatureResult<()>;

    /// Re-read this model's coefficients from the configuration root.
    ///
    /// Returns whether a `<type>Coeffs` sub-dictionary was found. A missing
    /// sub-dictionary is not an error; the model falls back to its defaults.
    fn reconfigure(&mut self) -> CurvatureResult<bool>;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn model_type(&self) -> &str {
        self.base().model_type()
    }

    /// Coefficient sub-dictionary currently in effect.
    fn coeffs(&self) -> &Dictionary {
        self.base().coeffs()
    }
}
