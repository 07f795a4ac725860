//! A tiny console sandbox: a heterogeneous pile of entities falls into a
//! walled pit, overlaps are resolved through contact manifolds in entity
//! index order, and at the end a ray picks whatever sits under a cursor.
//!
//! Run with `cargo run --example sandbox`.

use flintframe::{contact_check, query, Circle, Ray, Shape, Vec2, SKIN_WIDTH};
use itertools::izip;
use rand::{Rng, SeedableRng};

/// Static level geometry, in the same shape vocabulary as the entities.
#[derive(serde::Deserialize)]
struct Scene {
    walls: Vec<Shape>,
    spawn_min: Vec2,
    spawn_max: Vec2,
}

const LEVEL: &str = "(
    walls: [
        Aabb((min: (x: -10.0, y: -6.0), max: (x: 10.0, y: -5.0))),
        Aabb((min: (x: -11.0, y: -6.0), max: (x: -10.0, y: 6.0))),
        Aabb((min: (x: 10.0, y: -6.0), max: (x: 11.0, y: 6.0))),
    ],
    spawn_min: (x: -8.0, y: 0.0),
    spawn_max: (x: 8.0, y: 5.0),
)";

const DT: f64 = 1.0 / 60.0;
const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);
const FRAMES: usize = 300;

fn main() {
    let scene: Scene = ron::de::from_str(LEVEL).expect("malformed level data");
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    // parallel arrays of entity state, updated in index order every
    // frame so runs are reproducible
    let mut shapes: Vec<Shape> = (0..12)
        .map(|i| {
            let pos = Vec2::new(
                rng.gen_range(scene.spawn_min.x..scene.spawn_max.x),
                rng.gen_range(scene.spawn_min.y..scene.spawn_max.y),
            );
            if i % 2 == 0 {
                Shape::from(flintframe::Aabb::new(pos, Vec2::new(0.5, 0.5)))
            } else {
                Shape::from(Circle::new(pos, rng.gen_range(0.25..0.6)))
            }
        })
        .collect();
    let mut velocities: Vec<Vec2> = vec![Vec2::zero(); shapes.len()];

    for frame in 0..FRAMES {
        for (shape, vel) in izip!(&mut shapes, &mut velocities) {
            *vel += GRAVITY * DT;
            shape.translate(*vel * DT);
        }

        // entities against the level, then against each other.
        // the first shape of each pair is the one that resolves
        for i in 0..shapes.len() {
            for wall in &scene.walls {
                if let Some(contact) = contact_check(&shapes[i], wall) {
                    shapes[i].translate((contact.depth + SKIN_WIDTH) * *contact.normal);
                    velocities[i] = slide(velocities[i], *contact.normal);
                }
            }
            for j in (i + 1)..shapes.len() {
                if let Some(contact) = contact_check(&shapes[i], &shapes[j]) {
                    shapes[i].translate((contact.depth + SKIN_WIDTH) * *contact.normal);
                    velocities[i] = slide(velocities[i], *contact.normal);
                }
            }
        }

        if frame % 100 == 99 {
            let moving = velocities.iter().filter(|v| v.mag_sq() > 1e-4).count();
            let total = shapes.len();
            println!("frame {:3}: {moving} of {total} entities still moving", frame + 1);
        }
    }

    // cast straight down from a "cursor" above the pile and report the
    // nearest entity under it
    let cursor = Ray::new(Vec2::new(0.0, 10.0), Vec2::new(0.0, -1.0), 20.0);
    let picked = shapes
        .iter()
        .enumerate()
        .filter_map(|(i, shape)| query::ray_shape(&cursor, shape).map(|hit| (i, hit)))
        .min_by(|(_, h1), (_, h2)| h1.t.total_cmp(&h2.t));

    match picked {
        Some((i, hit)) => println!(
            "picked entity {} at ({:.2}, {:.2}), {:.2} units down the ray",
            i, hit.point.x, hit.point.y, hit.t
        ),
        None => println!("nothing under the cursor"),
    }
}

/// Remove the part of a velocity that drives into a contact, keeping
/// the part sliding along it.
fn slide(vel: Vec2, normal: Vec2) -> Vec2 {
    let into = vel.dot(normal);
    if into < 0.0 {
        vel - into * normal
    } else {
        vel
    }
}
