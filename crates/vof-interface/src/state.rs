//! Interface properties owned by a case.

use std::collections::BTreeMap;
use std::fmt;

use vof_config::ConfigSource;
use vof_core::{PatchId, Real};
use vof_curvature::InterfaceProperties;
use vof_mesh::{Mesh, PatchValues, Vector, VolScalarField};

use crate::contact::{CONTACT_ANGLES_KEY, ContactAngle};
use crate::error::{InterfaceError, InterfaceResult};

/// Scale of the normal stabilisation relative to the inverse cell size.
const DELTA_N_SCALE: Real = 1e-8;

/// Mesh, phase indicator and configuration of one two-phase interface.
///
/// Curvature models borrow this for their whole lifetime; alpha may be
/// replaced between model evaluations through [`InterfaceState::set_alpha`].
pub struct InterfaceState {
    mesh: Mesh,
    alpha: VolScalarField,
    config: Box<dyn ConfigSource>,
    contact_angles: BTreeMap<PatchId, ContactAngle>,
    delta_n: Real,
}

impl InterfaceState {
    pub fn new(
        mesh: Mesh,
        alpha: VolScalarField,
        config: Box<dyn ConfigSource>,
    ) -> InterfaceResult<Self> {
        alpha.ensure_matches(&mesh, "alpha")?;
        let delta_n = DELTA_N_SCALE / mesh.mean_cell_volume().cbrt();
        Ok(Self {
            mesh,
            alpha,
            config,
            contact_angles: BTreeMap::new(),
            delta_n,
        })
    }

    /// Prescribe a constant contact angle on the named wall patch.
    pub fn with_contact_angle(mut self, patch: &str, degrees: Real) -> InterfaceResult<Self> {
        self.set_contact_angle(patch, degrees)?;
        Ok(self)
    }

    pub fn set_contact_angle(&mut self, patch: &str, degrees: Real) -> InterfaceResult<()> {
        let id = self
            .mesh
            .find_patch(patch)
            .ok_or_else(|| InterfaceError::UnknownPatch {
                name: patch.to_string(),
            })?;
        let angle =
            ContactAngle::from_degrees(degrees).ok_or_else(|| InterfaceError::InvalidContactAngle {
                patch: patch.to_string(),
                degrees,
            })?;
        self.contact_angles.insert(id, angle);
        Ok(())
    }

    /// Read `contactAngles: { <patch>: <degrees>, ... }` from the
    /// configuration root, replacing any angles set before. Returns the
    /// number of wetted patches.
    pub fn load_contact_angles(&mut self) -> InterfaceResult<usize> {
        let root = self.config.load()?;
        let angles = root.optional_sub_dict(CONTACT_ANGLES_KEY)?;
        self.contact_angles.clear();
        for patch in angles.keys() {
            let degrees: Real = angles.lookup(patch)?;
            self.set_contact_angle(patch, degrees)?;
        }
        tracing::debug!(
            patches = self.contact_angles.len(),
            source = %self.config.describe(),
            "loaded contact angles"
        );
        Ok(self.contact_angles.len())
    }

    pub fn contact_angle(&self, patch: PatchId) -> Option<ContactAngle> {
        self.contact_angles.get(&patch).copied()
    }

    /// Replace the phase indicator. The old field is kept on error.
    pub fn set_alpha(&mut self, mut alpha: VolScalarField) -> InterfaceResult<()> {
        alpha.ensure_matches(&self.mesh, "alpha")?;
        alpha.correct_boundary(&self.mesh);
        self.alpha = alpha;
        Ok(())
    }

    /// Volume of the phase `alpha = 1`.
    pub fn phase_volume(&self) -> Real {
        self.alpha
            .internal()
            .iter()
            .zip(self.mesh.cells())
            .map(|(a, c)| a * c.volume)
            .sum()
    }
}

impl InterfaceProperties for InterfaceState {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn alpha(&self) -> &VolScalarField {
        &self.alpha
    }

    fn delta_n(&self) -> Real {
        self.delta_n
    }

    fn correct_contact_angle(
        &self,
        n_hat: &mut PatchValues<Vector>,
        _grad_alpha_f: &PatchValues<Vector>,
    ) {
        for (&patch, angle) in &self.contact_angles {
            let skipped = angle.correct(
                self.mesh.patch_faces(patch),
                n_hat.patch_mut(patch),
                self.delta_n,
            );
            if skipped > 0 {
                let name = self.mesh.patch(patch).map_or("?", |p| p.name.as_str());
                tracing::warn!(
                    patch = name,
                    skipped,
                    "contact angle not applied where the interface normal is aligned with the wall"
                );
            }
        }
    }

    fn config(&self) -> &dyn ConfigSource {
        self.config.as_ref()
    }
}

impl fmt::Debug for InterfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceState")
            .field("cells", &self.mesh.n_cells())
            .field("config", &self.config.describe())
            .field("contact_angles", &self.contact_angles)
            .field("delta_n", &self.delta_n)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vof_config::{Dictionary, MemorySource};
    use vof_core::units::m;
    use vof_mesh::block_mesh;

    fn state(yaml: &str) -> InterfaceState {
        let mesh = block_mesh([4, 4, 1], [m(1.0), m(1.0), m(0.25)]).unwrap();
        let alpha = VolScalarField::from_fn(&mesh, |c| if c.y < 0.5 { 1.0 } else { 0.0 });
        let config = MemorySource::new(Dictionary::from_yaml_str(yaml).unwrap());
        InterfaceState::new(mesh, alpha, Box::new(config)).unwrap()
    }

    #[test]
    fn delta_n_scales_with_cell_size() {
        let s = state("");
        let expected = 1e-8 / (0.25_f64 * 0.25 * 0.25).cbrt();
        assert!((s.delta_n() - expected).abs() < 1e-20);
    }

    #[test]
    fn contact_angle_requires_known_patch() {
        let err = state("").with_contact_angle("walls", 90.0).unwrap_err();
        assert!(matches!(err, InterfaceError::UnknownPatch { name } if name == "walls"));

        let err = state("").with_contact_angle("yMin", 200.0).unwrap_err();
        assert!(matches!(err, InterfaceError::InvalidContactAngle { .. }));
    }

    #[test]
    fn contact_angles_from_config() {
        let mut s = state("contactAngles:\n  yMin: 60\n  yMax: 120.0\n");
        assert_eq!(s.load_contact_angles().unwrap(), 2);
        let y_min = s.mesh().find_patch("yMin").unwrap();
        assert!((s.contact_angle(y_min).unwrap().degrees() - 60.0).abs() < 1e-12);
        assert!(s.contact_angle(s.mesh().find_patch("xMin").unwrap()).is_none());
    }

    #[test]
    fn no_contact_angles_configured() {
        let mut s = state("curvatureModel: standard\n");
        assert_eq!(s.load_contact_angles().unwrap(), 0);
    }

    #[test]
    fn set_alpha_checks_size() {
        let mut s = state("");
        let before = s.phase_volume();
        let other = block_mesh([2, 2, 1], [m(1.0), m(1.0), m(1.0)]).unwrap();
        assert!(s.set_alpha(VolScalarField::uniform(&other, 1.0)).is_err());
        assert_eq!(s.phase_volume(), before);

        let full = VolScalarField::uniform(s.mesh(), 1.0);
        s.set_alpha(full).unwrap();
        assert!((s.phase_volume() - 0.25).abs() < 1e-12);
    }
}
