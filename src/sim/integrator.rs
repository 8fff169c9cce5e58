//! Single-body integration and boundary response
//!
//! One call advances one body by `world.time_step`:
//! gravity, position, floor, water, walls, then squash/stretch.
//! Later boundary checks read the position already corrected by earlier ones.

use glam::Vec3;

use super::body::Body;
use super::jitter::Jitter;
use super::world::{Cosmetics, World};
use crate::normalize_angle;

/// Advance a body by one fixed step
pub fn update(body: &mut Body, world: &World, jitter: &mut impl Jitter) {
    let dt = world.time_step;

    // Semi-implicit Euler: velocity first, then position with the new velocity
    body.velocity.y -= world.gravity * dt;
    body.position += body.velocity * dt;

    bounce_floor(body, world, jitter);

    if world.damping_zone.contains(body.position.x) {
        body.velocity *= world.damping_zone.factor;
    }

    bounce_walls(body, world);

    body.visual_scale = squash_stretch(body.velocity.y, &world.cosmetics);
}

fn bounce_floor(body: &mut Body, world: &World, jitter: &mut impl Jitter) {
    if body.bottom() >= world.floor_y {
        return;
    }

    body.position.y = world.floor_y + body.radius();
    body.velocity.y = -body.velocity.y * body.restitution();

    let c = &world.cosmetics;
    body.rotation.x = normalize_angle(body.rotation.x + jitter.symmetric(c.floor_wobble));
    body.rotation.z = normalize_angle(body.rotation.z + jitter.symmetric(c.floor_wobble));

    body.velocity.x += jitter.symmetric(c.floor_kick);
    body.velocity.z += jitter.symmetric(c.floor_kick);
}

fn bounce_walls(body: &mut Body, world: &World) {
    let bound = world.wall_bound;
    let restitution = body.restitution();

    if body.position.x.abs() > bound {
        body.velocity.x *= -restitution;
        body.position.x = bound.copysign(body.position.x);
    }
    if body.position.z.abs() > bound {
        body.velocity.z *= -restitution;
        body.position.z = bound.copysign(body.position.z);
    }
}

/// Squash/stretch scale for a given vertical speed: `(squash, stretch, squash)`
///
/// Stretch grows with speed up to `max_stretch`; squash shrinks down to
/// `min_squash`. Read by the renderer only.
#[inline]
pub fn squash_stretch(velocity_y: f32, cosmetics: &Cosmetics) -> Vec3 {
    let speed = velocity_y.abs();
    let stretch = (1.0 + speed * cosmetics.stretch_rate).min(cosmetics.max_stretch);
    let squash = (1.0 - speed * cosmetics.stretch_rate).max(cosmetics.min_squash);
    Vec3::new(squash, stretch, squash)
}
