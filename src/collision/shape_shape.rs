//! Contact manifold generation for overlapping shape pairs.

use super::{Aabb, Circle, Shape};
use crate::math::{Unit, Vec2};

/// Below this squared distance two circle centers count as the same
/// point and the penetration axis falls back to x.
const COINCIDENT_EPS_SQ: f64 = 1e-12;

/// An intersection between two shapes.
///
/// The normal points from the second shape toward the first, so
/// translating the first shape by `depth * *normal` resolves the
/// overlap.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// World-space point of contact.
    pub point: Vec2,
    /// Unit separation direction, facing away from the second shape.
    pub normal: Unit<Vec2>,
    /// Penetration depth, always positive. A pair that does not overlap
    /// produces no contact at all.
    pub depth: f64,
}

/// Checks two runtime-tagged shapes for intersection.
///
/// The entry point for callers that don't know shape kinds at compile
/// time. Rays don't generate contacts: any pair involving one reports no
/// collision, the same answer as genuine non-overlap. Cast rays with
/// [`query::ray_shape`][super::query::ray_shape] instead.
pub fn contact_check(s1: &Shape, s2: &Shape) -> Option<Contact> {
    match (s1, s2) {
        (Shape::Aabb(a), Shape::Aabb(b)) => aabb_aabb(a, b),
        (Shape::Aabb(a), Shape::Circle(b)) => aabb_circle(a, b),
        (Shape::Circle(a), Shape::Aabb(b)) => circle_aabb(a, b),
        (Shape::Circle(a), Shape::Circle(b)) => circle_circle(a, b),
        (Shape::Ray(_), _) | (_, Shape::Ray(_)) => None,
    }
}

/// Mirror a contact so the roles of the two shapes swap.
fn flip(c: Contact) -> Contact {
    Contact {
        point: c.point + c.depth * *c.normal,
        normal: -c.normal,
        depth: c.depth,
    }
}

//
// AABB <-> AABB
//

/// Contact between two aabbs, resolved along the axis of least overlap.
///
/// Equal overlap on both axes resolves along x, and zero center
/// separation on the chosen axis resolves toward positive; both keep
/// simultaneous overlaps deterministic. The contact point is the center
/// of the overlap region.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> Option<Contact> {
    let overlap_min = Vec2::new(a.min.x.max(b.min.x), a.min.y.max(b.min.y));
    let overlap_max = Vec2::new(a.max.x.min(b.max.x), a.max.y.min(b.max.y));
    let overlap = overlap_max - overlap_min;
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }

    let center_delta = a.center() - b.center();
    let point = (overlap_min + overlap_max) / 2.0;
    let (normal, depth) = if overlap.x <= overlap.y {
        let sign = if center_delta.x < 0.0 { -1.0 } else { 1.0 };
        (Unit::new_unchecked(Vec2::new(sign, 0.0)), overlap.x)
    } else {
        let sign = if center_delta.y < 0.0 { -1.0 } else { 1.0 };
        (Unit::new_unchecked(Vec2::new(0.0, sign)), overlap.y)
    };

    Some(Contact { point, normal, depth })
}

//
// CIRCLE <-> CIRCLE
//

pub fn circle_circle(a: &Circle, b: &Circle) -> Option<Contact> {
    let delta = a.center - b.center;
    let dist_sq = delta.mag_sq();
    let r_sum = a.radius + b.radius;

    let normal = if dist_sq < COINCIDENT_EPS_SQ {
        // same position, consider penetration to be on the x axis
        Unit::unit_x()
    } else if dist_sq < r_sum * r_sum {
        Unit::new_normalize(delta)
    } else {
        return None;
    };

    Some(Contact {
        point: b.center + b.radius * *normal,
        normal,
        depth: r_sum - dist_sq.sqrt(),
    })
}

//
// AABB <-> CIRCLE
//

/// Contact between an aabb and a circle; the box is the shape that
/// resolves.
pub fn aabb_circle(a: &Aabb, b: &Circle) -> Option<Contact> {
    let closest = Vec2::new(
        b.center.x.clamp(a.min.x, a.max.x),
        b.center.y.clamp(a.min.y, a.max.y),
    );
    let delta = b.center - closest;
    let dist_sq = delta.mag_sq();

    if dist_sq > 0.0 {
        // center outside the box; overlap iff the closest point is
        // within the radius
        if dist_sq >= b.radius * b.radius {
            return None;
        }
        return Some(Contact {
            point: closest,
            normal: Unit::new_normalize(-delta),
            depth: b.radius - dist_sq.sqrt(),
        });
    }

    // center inside the box: push out through the nearest face.
    // ties resolve along x, zero offset toward positive, as in aabb_aabb
    let center_delta = b.center - a.center();
    let half = a.size() / 2.0;
    let face_dist = half - Vec2::new(center_delta.x.abs(), center_delta.y.abs());
    let (normal, depth, point) = if face_dist.x <= face_dist.y {
        let sign = if center_delta.x < 0.0 { -1.0 } else { 1.0 };
        (
            Unit::new_unchecked(Vec2::new(-sign, 0.0)),
            face_dist.x + b.radius,
            Vec2::new(if sign > 0.0 { a.max.x } else { a.min.x }, b.center.y),
        )
    } else {
        let sign = if center_delta.y < 0.0 { -1.0 } else { 1.0 };
        (
            Unit::new_unchecked(Vec2::new(0.0, -sign)),
            face_dist.y + b.radius,
            Vec2::new(b.center.x, if sign > 0.0 { a.max.y } else { a.min.y }),
        )
    };

    Some(Contact { point, normal, depth })
}

/// Contact between a circle and an aabb; the circle is the shape that
/// resolves.
///
/// Same computation as [`aabb_circle`] with the contact flipped to keep
/// the normal pointing from the second argument toward the first.
pub fn circle_aabb(a: &Circle, b: &Aabb) -> Option<Contact> {
    aabb_circle(b, a).map(flip)
}
