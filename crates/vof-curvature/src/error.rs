//! Error types for curvature model selection and evaluation.

use thiserror::Error;
use vof_config::ConfigError;
use vof_core::VofError;
use vof_mesh::MeshError;

pub type CurvatureResult<T> = Result<T, CurvatureError>;

/// Errors surfaced by model construction, reconfiguration and evaluation.
#[derive(Error, Debug)]
pub enum CurvatureError {
    /// The requested type name is not registered.
    #[error(
        "Unknown curvature model type '{requested}'. Valid curvature model types are: {}",
        .known.join(", ")
    )]
    UnknownModel {
        requested: String,
        known: Vec<String>,
    },

    /// Loading or reading the configuration root failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A coefficient was readable but outside its valid range.
    #[error("Invalid coefficient '{key}' for curvature model '{model}': {message}")]
    InvalidCoeff {
        model: String,
        key: &'static str,
        message: String,
    },
}

impl From<VofError> for CurvatureError {
    fn from(err: VofError) -> Self {
        CurvatureError::Mesh(MeshError::Core(err))
    }
}

/// Errors raised while populating a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate curvature model registration for type '{model_type}'")]
    Duplicate { model_type: String },
}
