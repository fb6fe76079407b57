//! Classic VOF interface curvature: `K = -∇·(n̂f · Sf)` with
//! `n̂f = ∇αf / (|∇αf| + δN)`.

use vof_mesh::{SurfaceVectorField, VolScalarField, fvc};

use crate::base::CurvatureModelBase;
use crate::error::CurvatureResult;
use crate::interface::InterfaceProperties;
use crate::model::CurvatureModel;

pub const TYPE_NAME: &str = "standard";

/// Curvature straight from the unsmoothed phase indicator.
#[derive(Debug)]
pub struct StandardCurvature<'a> {
    base: CurvatureModelBase<'a>,
}

impl<'a> StandardCurvature<'a> {
    pub fn new(
        name: &str,
        interface: &'a dyn InterfaceProperties,
        model_type: &str,
    ) -> CurvatureResult<Self> {
        Ok(Self {
            base: CurvatureModelBase::new(name, interface, model_type)?,
        })
    }
}

pub(crate) fn construct<'a>(
    name: &str,
    interface: &'a dyn InterfaceProperties,
    model_type: &str,
) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
    Ok(Box::new(StandardCurvature::new(name, interface, model_type)?))
}

impl CurvatureModel for StandardCurvature<'_> {
    fn base(&self) -> &CurvatureModelBase<'_> {
        &self.base
    }

    fn compute_curvature(
        &self,
        k: &mut VolScalarField,
        n_hat_f: &mut SurfaceVectorField,
    ) -> CurvatureResult<()> {
        let (new_k, new_n) = interface_curvature(&self.base, self.base.alpha())?;
        check_outputs(&self.base, k, n_hat_f)?;
        *k = new_k;
        *n_hat_f = new_n;
        Ok(())
    }

    fn reconfigure(&mut self) -> CurvatureResult<bool> {
        let model_type = self.base.model_type().to_string();
        self.base.reconfigure(&model_type)
    }
}

/// Outputs must be shaped for the interface mesh before anything is written.
pub(crate) fn check_outputs(
    base: &CurvatureModelBase<'_>,
    k: &VolScalarField,
    n_hat_f: &SurfaceVectorField,
) -> CurvatureResult<()> {
    let mesh = base.mesh();
    k.ensure_matches(mesh, "curvature output")?;
    n_hat_f.ensure_matches(mesh, "face normal output")?;
    Ok(())
}

/// Face unit normals and cell curvature of `alpha`.
///
/// Shared by every model that differs only in how alpha is prepared.
pub(crate) fn interface_curvature(
    base: &CurvatureModelBase<'_>,
    alpha: &VolScalarField,
) -> CurvatureResult<(VolScalarField, SurfaceVectorField)> {
    let mesh = base.mesh();
    let delta_n = base.delta_n();

    let grad_alpha = fvc::grad(mesh, alpha)?;
    let grad_alpha_f = fvc::interpolate(mesh, &grad_alpha)?;

    let mut n_hat_fv = grad_alpha_f.map(|g| g / (g.norm() + delta_n));
    base.correct_contact_angle(n_hat_fv.boundary_mut(), grad_alpha_f.boundary());

    let n_hat_flux = fvc::flux(mesh, &n_hat_fv)?;
    let mut k = fvc::div(mesh, &n_hat_flux)?;
    for value in k.internal_mut() {
        *value = -*value;
    }
    k.correct_boundary(mesh);

    Ok((k, n_hat_fv))
}
