//! Constant wall contact angles.
//!
//! The interface normal on a wall face is rotated, within the plane spanned
//! by itself and the wall normal `nf`, until it makes the prescribed angle θ
//! with the wall:
//!
//! ```text
//! a12 = n̂·nf   b1 = cos θ   b2 = cos(acos a12 − θ)   det = 1 − a12²
//! n̂ ← ((b1 − a12 b2)/det) nf + ((b2 − a12 b1)/det) n̂
//! ```

use vof_core::Real;
use vof_mesh::{Face, Vector};

/// Top-level configuration entry mapping patch names to angles in degrees.
pub const CONTACT_ANGLES_KEY: &str = "contactAngles";

/// Faces whose normal is this close to the wall normal are left alone.
const ALIGNED_TOL: Real = 1e-12;

/// Equilibrium contact angle of a wall patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactAngle {
    theta: Real,
}

impl ContactAngle {
    /// `None` outside [0, 180] degrees or for non-finite input.
    pub fn from_degrees(degrees: Real) -> Option<Self> {
        (degrees.is_finite() && (0.0..=180.0).contains(&degrees)).then(|| Self {
            theta: degrees.to_radians(),
        })
    }

    pub fn radians(&self) -> Real {
        self.theta
    }

    pub fn degrees(&self) -> Real {
        self.theta.to_degrees()
    }

    /// Correct the normals of one patch in place. Returns the number of
    /// faces left unchanged because the normal was parallel to the wall
    /// normal.
    pub fn correct(&self, faces: &[Face], n_hat: &mut [Vector], delta_n: Real) -> usize {
        let cos_theta = self.theta.cos();
        let mut skipped = 0;
        for (face, n) in faces.iter().zip(n_hat.iter_mut()) {
            let nf = face.unit_normal();
            let a12 = n.dot(&nf).clamp(-1.0, 1.0);
            let det = 1.0 - a12 * a12;
            if det < ALIGNED_TOL {
                skipped += 1;
                continue;
            }
            let b1 = cos_theta;
            let b2 = (a12.acos() - self.theta).cos();
            let a = (b1 - a12 * b2) / det;
            let b = (b2 - a12 * b1) / det;
            let rotated = nf * a + *n * b;
            *n = rotated / (rotated.norm() + delta_n);
        }
        skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vof_core::{CellId, FaceId};

    fn wall(normal: Vector) -> Face {
        Face {
            id: FaceId::from_index(0),
            owner: CellId::from_index(0),
            neighbour: None,
            centre: Vector::zeros(),
            area: normal,
        }
    }

    #[test]
    fn rejects_out_of_range_angles() {
        assert!(ContactAngle::from_degrees(-1.0).is_none());
        assert!(ContactAngle::from_degrees(181.0).is_none());
        assert!(ContactAngle::from_degrees(Real::NAN).is_none());
        let angle = ContactAngle::from_degrees(45.0).unwrap();
        assert!((angle.degrees() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn right_angle_keeps_wall_parallel_normal() {
        let faces = [wall(-Vector::y())];
        let mut n = [Vector::x()];
        let skipped = ContactAngle::from_degrees(90.0)
            .unwrap()
            .correct(&faces, &mut n, 1e-8);
        assert_eq!(skipped, 0);
        assert!((n[0] - Vector::x()).norm() < 1e-6);
    }

    #[test]
    fn prescribed_angle_is_imposed() {
        let faces = [wall(-Vector::y())];
        let tilted = Vector::new(1.0, -1.0, 0.0).normalize();
        for degrees in [0.0, 30.0, 60.0, 120.0] {
            let angle = ContactAngle::from_degrees(degrees).unwrap();
            let mut n = [tilted];
            angle.correct(&faces, &mut n, 1e-8);
            let cos = n[0].dot(&-Vector::y());
            assert!(
                (cos - angle.radians().cos()).abs() < 1e-6,
                "{degrees} deg: cos = {cos}"
            );
            assert!(n[0].z.abs() < 1e-12);
        }
    }

    #[test]
    fn aligned_normal_is_skipped() {
        let faces = [wall(Vector::z() * 2.0)];
        let mut n = [Vector::z()];
        let skipped = ContactAngle::from_degrees(30.0)
            .unwrap()
            .correct(&faces, &mut n, 1e-8);
        assert_eq!(skipped, 1);
        assert_eq!(n[0], Vector::z());
    }
}
