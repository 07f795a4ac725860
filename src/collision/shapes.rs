//! Plain value types for the shapes the collision module understands.

use crate::math::Vec2;

/// How far from unit length a ray direction can be before construction
/// renormalizes it.
const UNIT_LENGTH_EPS: f64 = 1e-9;

/// An axis-aligned box stored as its low and high corners.
///
/// [`Aabb::new`] guarantees `min <= max` componentwise.
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from its center and half its size.
    pub fn new(center: Vec2, halfsize: Vec2) -> Self {
        Aabb {
            min: center - halfsize,
            max: center + halfsize,
        }
    }

    /// Full extent of the box, `max - min`.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Move the box in place. The box is caller-owned plain data;
    /// nothing else observes the mutation.
    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }
}

/// A circle. Radius 0 degenerates to a point and every test keeps
/// working; negative radii are the caller's problem.
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Move the circle in place.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}

/// A ray starting at `start` and travelling along `dir` for at most
/// `length` units.
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub start: Vec2,
    /// Unit direction, or zero for a degenerate ray.
    pub dir: Vec2,
    /// Maximum travel distance. Never negative.
    pub length: f64,
}

impl Ray {
    /// Create a ray, normalizing `dir` if it isn't unit length already.
    ///
    /// A zero `dir` is kept as-is and marks the ray degenerate; every
    /// cast against such a ray misses. A negative `length` clamps to 0.
    pub fn new(start: Vec2, dir: Vec2, length: f64) -> Self {
        let mag_sq = dir.mag_sq();
        let dir = if mag_sq != 0.0 && (mag_sq - 1.0).abs() > UNIT_LENGTH_EPS {
            dir / mag_sq.sqrt()
        } else {
            dir
        };
        Ray {
            start,
            dir,
            length: length.max(0.0),
        }
    }

    /// Whether construction was given a zero direction.
    pub fn is_degenerate(&self) -> bool {
        self.dir == Vec2::zero()
    }

    /// The point `t` units along the ray.
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.start + t * self.dir
    }
}

/// A shape tagged with its kind at runtime, for code that tests
/// arbitrary pairs out of a heterogeneous entity list.
///
/// This replaces a manual tag-plus-pointer pair; a shape can't disagree
/// with its tag.
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Aabb(Aabb),
    Circle(Circle),
    Ray(Ray),
}

impl Shape {
    /// Move the shape in place, whatever its kind.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Aabb(aabb) => aabb.translate(delta),
            Shape::Circle(circle) => circle.translate(delta),
            Shape::Ray(ray) => ray.start += delta,
        }
    }
}

impl From<Aabb> for Shape {
    fn from(aabb: Aabb) -> Self {
        Shape::Aabb(aabb)
    }
}
impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
impl From<Ray> for Shape {
    fn from(ray: Ray) -> Self {
        Shape::Ray(ray)
    }
}
