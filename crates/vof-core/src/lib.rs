//! vof-core: stable foundation for the VOF interface workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + finiteness and range checks)
//! - ids (compact IDs for cells, faces and patches)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{VofError, VofResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
