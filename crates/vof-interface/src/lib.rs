//! vof-interface: two-phase interface properties for curvature models.
//!
//! [`InterfaceState`] owns the mesh, the phase indicator and the
//! configuration source of a case and implements
//! [`vof_curvature::InterfaceProperties`] on top of them, including the
//! constant wall contact-angle correction in [`contact`].

pub mod contact;
pub mod error;
pub mod state;

pub use contact::{CONTACT_ANGLES_KEY, ContactAngle};
pub use error::{InterfaceError, InterfaceResult};
pub use state::InterfaceState;
