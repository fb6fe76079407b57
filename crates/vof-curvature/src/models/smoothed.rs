//! Curvature from a smoothed phase indicator.
//!
//! Alpha is relaxed towards the area-weighted average of its face
//! interpolates `nSmooth` times before the standard normal/curvature
//! evaluation:
//!
//! `α ← c α + (1 − c) ⟨α_f⟩`
//!
//! Coefficients (`smoothedCoeffs`):
//! - `nSmooth`: number of smoothing sweeps (default 2)
//! - `cSmooth`: weight kept on the unsmoothed value, in [0, 1] (default 0.5)

use vof_config::Dictionary;
use vof_core::{Real, ensure_unit_interval};
use vof_mesh::{SurfaceVectorField, VolScalarField, fvc};

use crate::base::CurvatureModelBase;
use crate::error::{CurvatureError, CurvatureResult};
use crate::interface::InterfaceProperties;
use crate::model::CurvatureModel;
use crate::models::standard::{check_outputs, interface_curvature};

pub const TYPE_NAME: &str = "smoothed";

/// Smoothing parameters read from `smoothedCoeffs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingCoeffs {
    pub n_smooth: u32,
    pub c_smooth: Real,
}

impl Default for SmoothingCoeffs {
    fn default() -> Self {
        Self {
            n_smooth: 2,
            c_smooth: 0.5,
        }
    }
}

impl SmoothingCoeffs {
    /// Read from a `smoothedCoeffs` dictionary; absent entries keep their
    /// defaults.
    pub fn from_dict(coeffs: &Dictionary, model: &str) -> CurvatureResult<Self> {
        let defaults = Self::default();
        let n_smooth = coeffs.lookup_or("nSmooth", defaults.n_smooth)?;
        let c_smooth = coeffs.lookup_or("cSmooth", defaults.c_smooth)?;
        let c_smooth =
            ensure_unit_interval(c_smooth, "cSmooth").map_err(|e| CurvatureError::InvalidCoeff {
                model: model.to_string(),
                key: "cSmooth",
                message: e.to_string(),
            })?;
        Ok(Self { n_smooth, c_smooth })
    }
}

/// Standard curvature evaluated on a smoothed alpha.
#[derive(Debug)]
pub struct SmoothedCurvature<'a> {
    base: CurvatureModelBase<'a>,
    smoothing: SmoothingCoeffs,
}

impl<'a> SmoothedCurvature<'a> {
    pub fn new(
        name: &str,
        interface: &'a dyn InterfaceProperties,
        model_type: &str,
    ) -> CurvatureResult<Self> {
        let base = CurvatureModelBase::new(name, interface, model_type)?;
        let smoothing = SmoothingCoeffs::from_dict(base.coeffs(), base.name())?;
        Ok(Self { base, smoothing })
    }

    pub fn smoothing(&self) -> SmoothingCoeffs {
        self.smoothing
    }

    /// Apply the configured smoothing sweeps to the interface's alpha.
    pub fn smoothed_alpha(&self) -> CurvatureResult<VolScalarField> {
        let mesh = self.base.mesh();
        let SmoothingCoeffs { n_smooth, c_smooth } = self.smoothing;
        let mut alpha = self.base.alpha().clone();
        for _ in 0..n_smooth {
            let alpha_f = fvc::interpolate(mesh, &alpha)?;
            let average = fvc::face_average(mesh, &alpha_f)?;
            for (value, avg) in alpha.internal_mut().iter_mut().zip(average.internal()) {
                *value = c_smooth * *value + (1.0 - c_smooth) * avg;
            }
            alpha.correct_boundary(mesh);
        }
        Ok(alpha)
    }
}

pub(crate) fn construct<'a>(
    name: &str,
    interface: &'a dyn InterfaceProperties,
    model_type: &str,
) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
    Ok(Box::new(SmoothedCurvature::new(name, interface, model_type)?))
}

impl CurvatureModel for SmoothedCurvature<'_> {
    fn base(&self) -> &CurvatureModelBase<'_> {
        &self.base
    }

    fn compute_curvature(
        &self,
        k: &mut VolScalarField,
        n_hat_f: &mut SurfaceVectorField,
    ) -> CurvatureResult<()> {
        let alpha = self.smoothed_alpha()?;
        let (new_k, new_n) = interface_curvature(&self.base, &alpha)?;
        check_outputs(&self.base, k, n_hat_f)?;
        *k = new_k;
        *n_hat_f = new_n;
        Ok(())
    }

    /// On an invalid coefficient the previous coefficients stay in effect
    /// and the error is returned.
    fn reconfigure(&mut self) -> CurvatureResult<bool> {
        let model_type = self.base.model_type().to_string();
        let name = self.base.name().to_string();
        let (found, smoothing) = self
            .base
            .reconfigure_with(&model_type, |coeffs| SmoothingCoeffs::from_dict(coeffs, &name))?;
        if smoothing != self.smoothing {
            tracing::info!(
                model = %name,
                n_smooth = smoothing.n_smooth,
                c_smooth = smoothing.c_smooth,
                "smoothing coefficients changed"
            );
        }
        self.smoothing = smoothing;
        Ok(found)
    }
}
