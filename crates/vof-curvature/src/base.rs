//! State and behaviour shared by every curvature model.

use std::fmt;

use serde::de::DeserializeOwned;
use vof_config::Dictionary;
use vof_core::Real;
use vof_mesh::{Mesh, PatchValues, Vector, VolScalarField};

use crate::error::CurvatureResult;
use crate::interface::InterfaceProperties;

/// Suffix appended to a model type name to form its coefficient key.
pub const COEFFS_SUFFIX: &str = "Coeffs";

/// Key of the coefficient sub-dictionary for `model_type`, e.g. `smoothedCoeffs`.
pub fn coeffs_key(model_type: &str) -> String {
    format!("{model_type}{COEFFS_SUFFIX}")
}

/// Shared part of every curvature model.
///
/// Holds the model name, a borrowed reference to the interface properties
/// (which must outlive the model) and the current coefficient
/// sub-dictionary. Models reach the interface only through the accessors
/// below.
pub struct CurvatureModelBase<'a> {
    name: String,
    model_type: String,
    interface: &'a dyn InterfaceProperties,
    coeffs: Dictionary,
}

impl<'a> CurvatureModelBase<'a> {
    /// Create the base and perform the initial coefficient read.
    pub fn new(
        name: &str,
        interface: &'a dyn InterfaceProperties,
        model_type: &str,
    ) -> CurvatureResult<Self> {
        let mut base = Self {
            name: name.to_string(),
            model_type: model_type.to_string(),
            interface,
            coeffs: Dictionary::new(),
        };
        base.reconfigure(model_type)?;
        Ok(base)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    pub fn coeffs(&self) -> &Dictionary {
        &self.coeffs
    }

    /// Replace the coefficients with `<model_type>Coeffs` from the current
    /// configuration root.
    ///
    /// Returns `Ok(false)` and installs an empty dictionary when the entry is
    /// absent. Failures to load the root itself are returned unchanged.
    pub fn reconfigure(&mut self, model_type: &str) -> CurvatureResult<bool> {
        self.reconfigure_with(model_type, |_| Ok(()))
            .map(|(found, ())| found)
    }

    /// Like [`reconfigure`](Self::reconfigure), but `parse` must accept the
    /// fetched coefficients before they replace the current ones. On any
    /// error the previous coefficients stay in place.
    pub fn reconfigure_with<T>(
        &mut self,
        model_type: &str,
        parse: impl FnOnce(&Dictionary) -> CurvatureResult<T>,
    ) -> CurvatureResult<(bool, T)> {
        let (found, coeffs) = self.fetch_coeffs(model_type)?;
        let parsed = parse(&coeffs)?;
        self.coeffs = coeffs;
        Ok((found, parsed))
    }

    /// Read `<model_type>Coeffs` without installing it.
    pub fn fetch_coeffs(&self, model_type: &str) -> CurvatureResult<(bool, Dictionary)> {
        let key = coeffs_key(model_type);
        let root = self.interface.config().load()?;
        let fetched = root.sub_dict(&key)?;
        let found = fetched.is_some();
        tracing::debug!(
            model = %self.name,
            key = %key,
            found,
            source = %self.interface.config().describe(),
            "read curvature model coefficients"
        );
        Ok((found, fetched.unwrap_or_default()))
    }

    /// Typed coefficient lookup with a default for absent entries.
    pub fn coeff_or<T: DeserializeOwned>(&self, key: &str, default: T) -> CurvatureResult<T> {
        Ok(self.coeffs.lookup_or(key, default)?)
    }

    pub fn mesh(&self) -> &'a Mesh {
        self.interface.mesh()
    }

    /// Phase indicator of the interface properties.
    pub fn alpha(&self) -> &'a VolScalarField {
        self.interface.alpha()
    }

    pub fn delta_n(&self) -> Real {
        self.interface.delta_n()
    }

    /// Forward to the interface's wall contact-angle correction.
    pub fn correct_contact_angle(
        &self,
        n_hat: &mut PatchValues<Vector>,
        grad_alpha_f: &PatchValues<Vector>,
    ) {
        self.interface.correct_contact_angle(n_hat, grad_alpha_f);
    }
}

impl fmt::Debug for CurvatureModelBase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurvatureModelBase")
            .field("name", &self.name)
            .field("model_type", &self.model_type)
            .field("coeffs", &self.coeffs)
            .finish_non_exhaustive()
    }
}
