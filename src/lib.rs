//! Narrow-phase 2D collision detection for a small game engine:
//! boolean overlap tests, contact manifolds for resolving penetration,
//! and parametric raycasts against axis-aligned boxes and circles.
//!
//! Every shape is plain value data owned by the caller and every test is
//! a pure function, so anything here is safe to call from any thread on
//! independent values.

pub mod collision;
pub use collision::{
    contact_check, query, shape_shape, Aabb, CastHit, Circle, Contact, Ray, Shape, SKIN_WIDTH,
};

pub mod math;
pub use math::{uv, Unit, Vec2};
