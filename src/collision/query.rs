//! Intersection queries for points, rays, etc. vs. shapes.
//!
//! The boolean predicates compare squared distances so the yes/no path
//! never takes a square root.

use super::{Aabb, Circle, Ray, Shape};
use crate::math::{Unit, Vec2};

/// Below this magnitude a ray direction component counts as parallel to
/// that axis's slab.
const PARALLEL_EPS: f64 = 1e-12;

/// Check whether two aabbs overlap. Touching edges count.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}

/// Check whether a point lies within an aabb, bounds included.
pub fn point_aabb(point: Vec2, aabb: &Aabb) -> bool {
    point.x >= aabb.min.x && point.x <= aabb.max.x && point.y >= aabb.min.y && point.y <= aabb.max.y
}

/// Check whether an aabb and a circle overlap, by clamping the circle
/// center into the box to find the closest point on it.
pub fn aabb_circle(aabb: &Aabb, circle: &Circle) -> bool {
    let closest = Vec2::new(
        circle.center.x.clamp(aabb.min.x, aabb.max.x),
        circle.center.y.clamp(aabb.min.y, aabb.max.y),
    );
    (circle.center - closest).mag_sq() <= circle.radius * circle.radius
}

/// Check whether a point lies within a circle.
pub fn point_circle(point: Vec2, circle: &Circle) -> bool {
    (point - circle.center).mag_sq() <= circle.radius * circle.radius
}

/// Check whether two circles overlap.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let r_sum = a.radius + b.radius;
    (a.center - b.center).mag_sq() <= r_sum * r_sum
}

/// A hit found by a raycast.
#[derive(Clone, Copy, Debug)]
pub struct CastHit {
    /// Distance along the ray at which the hit occurred, within
    /// `[0, ray.length]`.
    pub t: f64,
    /// World-space location of the hit.
    pub point: Vec2,
    /// Unit surface normal at the hit.
    pub normal: Unit<Vec2>,
}

/// Cast a ray against an aabb using the slab method.
///
/// Only entry points reached travelling forward count: a start point
/// already inside the box (or past it) is a miss, as is a degenerate
/// ray. The hit normal is the outward normal of whichever slab boundary
/// the ray entered through.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<CastHit> {
    if ray.is_degenerate() {
        return None;
    }

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;
    // which axis the entry plane was on, and from which side
    let mut entry_axis = 0;
    let mut entry_sign = 0.0;

    for axis in 0..2 {
        let (start, dir, lo, hi) = match axis {
            0 => (ray.start.x, ray.dir.x, aabb.min.x, aabb.max.x),
            _ => (ray.start.y, ray.dir.y, aabb.min.y, aabb.max.y),
        };
        if dir.abs() < PARALLEL_EPS {
            // parallel to this slab: inside it for the whole ray or not at all
            if start < lo || start > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir;
        let (t_near, t_far) = if inv >= 0.0 {
            ((lo - start) * inv, (hi - start) * inv)
        } else {
            ((hi - start) * inv, (lo - start) * inv)
        };
        if t_near > t_min {
            t_min = t_near;
            entry_axis = axis;
            entry_sign = -dir.signum();
        }
        t_max = t_max.min(t_far);
    }

    if t_min > t_max || t_min < 0.0 || t_min > ray.length {
        return None;
    }

    let normal = if entry_axis == 0 {
        Unit::new_unchecked(Vec2::new(entry_sign, 0.0))
    } else {
        Unit::new_unchecked(Vec2::new(0.0, entry_sign))
    };
    Some(CastHit {
        t: t_min,
        point: ray.point_at(t_min),
        normal,
    })
}

/// Cast a ray against a circle by solving for the points where the ray
/// meets the circle's boundary.
///
/// Takes the smaller non-negative root within the ray's length; a start
/// point inside the circle hits the boundary on the way out.
pub fn ray_circle(ray: &Ray, circle: &Circle) -> Option<CastHit> {
    if ray.is_degenerate() {
        return None;
    }

    // dir is unit length, so the quadratic's leading coefficient is 1
    let to_start = ray.start - circle.center;
    let b = 2.0 * to_start.dot(ray.dir);
    let c = to_start.mag_sq() - circle.radius * circle.radius;
    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_in = (-b - sqrt_d) / 2.0;
    let t_out = (-b + sqrt_d) / 2.0;
    let t = if t_in >= 0.0 {
        t_in
    } else if t_out >= 0.0 {
        t_out
    } else {
        return None;
    };
    if t > ray.length {
        return None;
    }

    let point = ray.point_at(t);
    Some(CastHit {
        t,
        point,
        normal: Unit::new_normalize(point - circle.center),
    })
}

/// Cast a ray against a runtime-tagged shape.
///
/// Ray targets have no meaningful hit and always miss.
pub fn ray_shape(ray: &Ray, shape: &Shape) -> Option<CastHit> {
    match shape {
        Shape::Aabb(aabb) => ray_aabb(ray, aabb),
        Shape::Circle(circle) => ray_circle(ray, circle),
        Shape::Ray(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn point_predicates_include_bounds() {
        let aabb = Aabb::new(Vec2::zero(), Vec2::new(1.0, 1.0));
        assert!(point_aabb(Vec2::zero(), &aabb));
        assert!(point_aabb(Vec2::new(1.0, 1.0), &aabb));
        assert!(point_aabb(Vec2::new(-1.0, 0.5), &aabb));
        assert!(!point_aabb(Vec2::new(1.1, 0.0), &aabb));

        let circle = Circle::new(Vec2::new(2.0, 0.0), 1.0);
        assert!(point_circle(Vec2::new(3.0, 0.0), &circle));
        assert!(!point_circle(Vec2::new(3.1, 0.0), &circle));
    }

    #[test]
    fn zero_radius_degenerates_to_a_point() {
        let center = Vec2::new(4.0, -2.0);
        let point = Circle::new(center, 0.0);
        assert!(point_circle(center, &point));
        assert!(!point_circle(center + Vec2::new(1e-6, 0.0), &point));

        // the same formulas drive the pair predicates
        let other = Circle::new(center + Vec2::new(0.5, 0.0), 0.5);
        assert!(circle_circle(&point, &other));
    }

    #[test]
    fn ray_aabb_hits_the_near_face() {
        let ray = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0), 10.0);
        let aabb = Aabb::new(Vec2::zero(), Vec2::new(1.0, 1.0));

        let hit = ray_aabb(&ray, &aabb).expect("ray points at the box");
        assert!(approx(hit.t, 4.0));
        assert!(approx(hit.point.x, -1.0));
        assert!(approx(hit.point.y, 0.0));
        assert!(approx(hit.normal.x, -1.0));
        assert!(approx(hit.normal.y, 0.0));
    }

    #[test]
    fn ray_aabb_respects_length_and_direction() {
        let aabb = Aabb::new(Vec2::zero(), Vec2::new(1.0, 1.0));

        // too short to reach
        let short = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0), 3.0);
        assert!(ray_aabb(&short, &aabb).is_none());

        // pointing away: the hit would be behind the start
        let away = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(-1.0, 0.0), 10.0);
        assert!(ray_aabb(&away, &aabb).is_none());

        // starting inside the box counts as behind as well
        let inside = Ray::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 10.0);
        assert!(ray_aabb(&inside, &aabb).is_none());
    }

    #[test]
    fn ray_aabb_parallel_slabs() {
        let aabb = Aabb::new(Vec2::zero(), Vec2::new(1.0, 1.0));

        // parallel to the x slabs and outside them: no amount of travel hits
        let outside = Ray::new(Vec2::new(-5.0, 2.0), Vec2::new(1.0, 0.0), 100.0);
        assert!(ray_aabb(&outside, &aabb).is_none());

        // parallel but inside the slab: the other axis decides
        let inside = Ray::new(Vec2::new(0.5, -4.0), Vec2::new(0.0, 1.0), 10.0);
        let hit = ray_aabb(&inside, &aabb).expect("travels up into the box");
        assert!(approx(hit.t, 3.0));
        assert!(approx(hit.normal.x, 0.0));
        assert!(approx(hit.normal.y, -1.0));
    }

    #[test]
    fn ray_circle_hit_and_normal() {
        let ray = Ray::new(Vec2::zero(), Vec2::new(1.0, 0.0), 10.0);
        let circle = Circle::new(Vec2::new(5.0, 0.0), 1.0);

        let hit = ray_circle(&ray, &circle).expect("ray points at the circle");
        assert!(approx(hit.t, 4.0));
        assert!(approx(hit.point.x, 4.0));
        assert!(approx(hit.point.y, 0.0));
        assert!(approx(hit.normal.x, -1.0));

        // tangent distance: grazes at exactly one point
        let graze = Ray::new(Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0), 10.0);
        let hit = ray_circle(&graze, &circle).expect("tangent ray touches");
        assert!(approx(hit.t, 5.0));

        // a miss above the tangent line
        let miss = Ray::new(Vec2::new(0.0, 1.5), Vec2::new(1.0, 0.0), 10.0);
        assert!(ray_circle(&miss, &circle).is_none());
    }

    #[test]
    fn ray_circle_bounds() {
        let circle = Circle::new(Vec2::new(5.0, 0.0), 1.0);

        // in range only past t = 4
        let short = Ray::new(Vec2::zero(), Vec2::new(1.0, 0.0), 3.5);
        assert!(ray_circle(&short, &circle).is_none());

        // both roots behind the start
        let behind = Ray::new(Vec2::new(10.0, 0.0), Vec2::new(1.0, 0.0), 10.0);
        assert!(ray_circle(&behind, &circle).is_none());

        // starting inside hits the boundary on the way out
        let from_center = Ray::new(Vec2::new(5.0, 0.0), Vec2::new(1.0, 0.0), 10.0);
        let hit = ray_circle(&from_center, &circle).expect("exits the circle");
        assert!(approx(hit.t, 1.0));
        assert!(approx(hit.point.x, 6.0));
        assert!(approx(hit.normal.x, 1.0));
    }

    #[test]
    fn degenerate_rays_never_hit() {
        let degenerate = Ray::new(Vec2::new(-5.0, 0.0), Vec2::zero(), 10.0);
        let aabb = Aabb::new(Vec2::zero(), Vec2::new(1.0, 1.0));
        let circle = Circle::new(Vec2::zero(), 1.0);

        assert!(ray_aabb(&degenerate, &aabb).is_none());
        assert!(ray_circle(&degenerate, &circle).is_none());
        assert!(ray_shape(&degenerate, &Shape::from(aabb)).is_none());
    }

    #[test]
    fn ray_shape_dispatch() {
        let ray = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0), 10.0);

        let aabb = Shape::from(Aabb::new(Vec2::zero(), Vec2::new(1.0, 1.0)));
        let hit = ray_shape(&ray, &aabb).expect("same as ray_aabb");
        assert!(approx(hit.t, 4.0));

        let circle = Shape::from(Circle::new(Vec2::new(5.0, 0.0), 1.0));
        let hit = ray_shape(&ray, &circle).expect("same as ray_circle");
        assert!(approx(hit.t, 9.0));

        // ray targets are not supported, same sentinel as a miss
        let other = Shape::from(Ray::new(Vec2::zero(), Vec2::unit_y(), 1.0));
        assert!(ray_shape(&ray, &other).is_none());
    }
}
