use crate::VofError;

/// Floating point type used throughout the workspace
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, VofError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VofError::NonFinite { what, value: v })
    }
}

/// Check that a fraction lies in the closed unit interval.
pub fn ensure_unit_interval(v: Real, what: &'static str) -> Result<Real, VofError> {
    let v = ensure_finite(v, what)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(VofError::InvalidArg { what })
    }
}
