//! Shared interface-properties double for curvature model tests.

#![allow(dead_code)]

use vof_config::{ConfigSource, Dictionary, MemorySource};
use vof_core::Real;
use vof_core::units::m;
use vof_curvature::InterfaceProperties;
use vof_mesh::{Mesh, PatchValues, SurfaceVectorField, Vector, VolScalarField, block_mesh};

/// A 2-D droplet of radius `radius` centred in the unit square, with a
/// tanh profile `width` cells wide. Configuration is held in memory and may
/// be swapped between calls.
pub struct Droplet {
    pub mesh: Mesh,
    pub alpha: VolScalarField,
    pub config: MemorySource,
    pub radius: Real,
}

impl Droplet {
    pub fn new(n: usize, radius: Real, yaml: &str) -> Self {
        let mesh = block_mesh([n, n, 1], [m(1.0), m(1.0), m(1.0 / n as f64)]).unwrap();
        let width = 1.5 / n as f64;
        let alpha = VolScalarField::from_fn(&mesh, |c| {
            let r = ((c.x - 0.5).powi(2) + (c.y - 0.5).powi(2)).sqrt();
            0.5 * (1.0 - ((r - radius) / width).tanh())
        });
        Self {
            mesh,
            alpha,
            config: MemorySource::new(dict(yaml)),
            radius,
        }
    }

    /// Small droplet for tests that do not check accuracy.
    pub fn small(yaml: &str) -> Self {
        Self::new(16, 0.3, yaml)
    }

    pub fn set_config(&self, yaml: &str) {
        self.config.replace(dict(yaml));
    }

    /// Output fields sized for this mesh, pre-filled with NaN.
    pub fn outputs(&self) -> (VolScalarField, SurfaceVectorField) {
        (
            VolScalarField::uniform(&self.mesh, Real::NAN),
            SurfaceVectorField::uniform(&self.mesh, Vector::repeat(Real::NAN)),
        )
    }

    /// Mean curvature over cells in the interface band.
    pub fn band_mean(&self, k: &VolScalarField) -> Real {
        let (sum, count) = self
            .alpha
            .internal()
            .iter()
            .zip(k.internal())
            .filter(|(a, _)| (0.3..0.7).contains(*a))
            .fold((0.0, 0usize), |(s, c), (_, kv)| (s + kv, c + 1));
        assert!(count > 0, "no cells in the interface band");
        sum / count as f64
    }
}

impl InterfaceProperties for Droplet {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn alpha(&self) -> &VolScalarField {
        &self.alpha
    }

    fn delta_n(&self) -> Real {
        1e-8 / (self.mesh.mean_cell_volume()).cbrt()
    }

    fn correct_contact_angle(&self, _: &mut PatchValues<Vector>, _: &PatchValues<Vector>) {}

    fn config(&self) -> &dyn ConfigSource {
        &self.config
    }
}

pub fn dict(yaml: &str) -> Dictionary {
    Dictionary::from_yaml_str(yaml).unwrap()
}
