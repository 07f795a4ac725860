//! Narrow-phase collision detection: overlap predicates, contact
//! manifolds and raycasts for axis-aligned boxes and circles.

mod shapes;
pub use shapes::{Aabb, Circle, Ray, Shape};

pub mod shape_shape;
pub use shape_shape::{contact_check, Contact};

pub mod query;
pub use query::CastHit;

/// Tolerance a consumer should leave between shapes when integrating
/// manifolds into movement, so that resting contact does not read as
/// penetration again on the next frame.
///
/// Contact generation reports raw geometric depth; applying this margin
/// is the mover's job. It is a plain constant rather than hidden state
/// so tests and game code can substitute their own value.
pub const SKIN_WIDTH: f64 = 0.001;
