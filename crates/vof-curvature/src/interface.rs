//! What curvature models need from the owning interface-properties object.

use vof_config::ConfigSource;
use vof_core::Real;
use vof_mesh::{Mesh, PatchValues, Vector, VolScalarField};

/// Phase-properties collaborator shared by every curvature model of a case.
///
/// Models only ever hold a shared reference, so an implementation must
/// outlive every model built against it. Nothing here is mutated by models.
pub trait InterfaceProperties {
    /// Mesh the fields live on.
    fn mesh(&self) -> &Mesh;

    /// Phase indicator, valued in [0, 1].
    fn alpha(&self) -> &VolScalarField;

    /// Stabilisation added to |∇α| when normalising [1/m].
    fn delta_n(&self) -> Real;

    /// Rotate boundary face normals to honour the prescribed wall contact
    /// angles. `grad_alpha_f` holds the boundary values of the interpolated
    /// alpha gradient.
    fn correct_contact_angle(
        &self,
        n_hat: &mut PatchValues<Vector>,
        grad_alpha_f: &PatchValues<Vector>,
    );

    /// Where the model-wide configuration root is read from.
    fn config(&self) -> &dyn ConfigSource;
}
