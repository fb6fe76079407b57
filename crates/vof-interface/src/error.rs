use thiserror::Error;
use vof_config::ConfigError;
use vof_mesh::MeshError;

pub type InterfaceResult<T> = Result<T, InterfaceError>;

#[derive(Error, Debug)]
pub enum InterfaceError {
    #[error("No boundary patch named '{name}'")]
    UnknownPatch { name: String },

    #[error("Contact angle for patch '{patch}' must lie in [0, 180] degrees, got {degrees}")]
    InvalidContactAngle { patch: String, degrees: f64 },

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
