//! Built-in curvature models.

pub mod smoothed;
pub mod standard;

pub use smoothed::{SmoothedCurvature, SmoothingCoeffs};
pub use standard::StandardCurvature;

use crate::registry::CurvatureModelCtor;

/// Models present in every registry built with
/// [`CurvatureModelRegistry::with_builtins`](crate::CurvatureModelRegistry::with_builtins).
pub fn builtins() -> Vec<(&'static str, CurvatureModelCtor)> {
    vec![
        (standard::TYPE_NAME, standard::construct as CurvatureModelCtor),
        (smoothed::TYPE_NAME, smoothed::construct as CurvatureModelCtor),
    ]
}
