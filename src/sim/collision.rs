//! Sphere-sphere collision detection and response
//!
//! Every unordered pair is checked once per call. Overlapping pairs are
//! pushed apart along the contact normal in inverse proportion to mass, then
//! exchange an impulse if they are still approaching. No contact state is
//! kept between calls.

use glam::Vec3;

use super::body::Body;
use super::jitter::Jitter;
use super::world::World;
use crate::normalize_angle;

/// Overlap between two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first body's centre toward the second
    pub normal: Vec3,
    /// How far the spheres interpenetrate (`r_a + r_b - dist`)
    pub penetration: f32,
}

/// Check whether two spheres overlap
///
/// Coincident centres have no defined direction; `+Y` is used so the pair
/// still separates.
pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    let diff = b.position - a.position;
    let min_dist = a.radius() + b.radius();
    let dist_sq = diff.length_squared();

    if dist_sq >= min_dist * min_dist {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > 1e-6 { diff / dist } else { Vec3::Y };

    Some(Contact {
        normal,
        penetration: min_dist - dist,
    })
}

/// Resolve every overlapping pair in `bodies`
///
/// Pairs are visited in index order and see corrections made by earlier pairs.
/// Returns the number of contacts found.
pub fn resolve(bodies: &mut [Body], world: &World, jitter: &mut impl Jitter) -> usize {
    let mut contacts = 0;

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if let Some(contact) = detect(a, b) {
                resolve_pair(a, b, &contact, world, jitter);
                contacts += 1;
            }
        }
    }

    contacts
}

/// Resolve one contact between `a` and `b`
pub fn resolve_pair(
    a: &mut Body,
    b: &mut Body,
    contact: &Contact,
    world: &World,
    jitter: &mut impl Jitter,
) {
    let (mass_a, mass_b) = (a.mass(), b.mass());
    let total_mass = mass_a + mass_b;
    let inv_mass_sum = 1.0 / mass_a + 1.0 / mass_b;

    if !(total_mass > 0.0 && total_mass.is_finite() && inv_mass_sum.is_finite()) {
        log::warn!(
            "Skipping contact with degenerate masses ({}, {})",
            mass_a,
            mass_b
        );
        return;
    }

    let normal = contact.normal;

    // Heavier body moves less
    let correction = normal * contact.penetration;
    a.position -= correction * (mass_b / total_mass);
    b.position += correction * (mass_a / total_mass);

    let vel_along_normal = (b.velocity - a.velocity).dot(normal);
    if vel_along_normal > 0.0 {
        // Already separating
        return;
    }

    let e = a.restitution().min(b.restitution());
    let j = -(1.0 + e) * vel_along_normal / inv_mass_sum;
    let impulse = normal * j;
    a.velocity -= impulse / mass_a;
    b.velocity += impulse / mass_b;

    log::trace!(
        "Contact: depth={:.3} v_n={:.3} impulse={:.3}",
        contact.penetration,
        vel_along_normal,
        j
    );

    let c = &world.cosmetics;
    a.rotation.y = normalize_angle(a.rotation.y + jitter.symmetric(c.collision_spin));
    b.rotation.y = normalize_angle(b.rotation.y + jitter.symmetric(c.collision_spin));

    // Equal and opposite impulse in the xz-plane, so momentum is untouched
    let reduced_mass = 1.0 / inv_mass_sum;
    let nudge = Vec3::new(
        jitter.symmetric(c.collision_nudge),
        0.0,
        jitter.symmetric(c.collision_nudge),
    ) * reduced_mass;
    a.velocity += nudge / mass_a;
    b.velocity -= nudge / mass_b;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::jitter::Still;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn body(radius: f32, pos: Vec3, vel: Vec3, restitution: f32) -> Body {
        Body::new(radius, pos, vel, restitution).unwrap()
    }

    fn total_momentum(bodies: &[Body]) -> Vec3 {
        bodies.iter().map(Body::momentum).sum()
    }

    #[test]
    fn test_detect_miss_and_hit() {
        let a = body(5.0, Vec3::ZERO, Vec3::ZERO, 1.0);
        let far = body(5.0, Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        assert!(detect(&a, &far).is_none());

        let near = body(5.0, Vec3::new(9.0, 0.0, 0.0), Vec3::ZERO, 1.0);
        let contact = detect(&a, &near).unwrap();
        assert!((contact.penetration - 1.0).abs() < 1e-6);
        assert!((contact.normal - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_detect_coincident_centres() {
        let a = body(1.0, Vec3::ONE, Vec3::ZERO, 1.0);
        let b = body(2.0, Vec3::ONE, Vec3::ZERO, 1.0);
        let contact = detect(&a, &b).unwrap();
        assert_eq!(contact.normal, Vec3::Y);
        assert!((contact.penetration - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_head_on_equal_mass_elastic() {
        let world = World::default();
        let mut bodies = vec![
            body(5.0, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 1.0),
            body(5.0, Vec3::new(9.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0), 1.0),
        ];

        let contacts = resolve(&mut bodies, &world, &mut Still);

        assert_eq!(contacts, 1);
        assert!((bodies[0].velocity - Vec3::new(-2.0, 0.0, 0.0)).length() < 1e-5);
        assert!((bodies[1].velocity - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
        // Equal masses split the 1.0 overlap evenly
        assert!((bodies[0].position.x - (-0.5)).abs() < 1e-5);
        assert!((bodies[1].position.x - 9.5).abs() < 1e-5);
    }

    #[test]
    fn test_heavier_body_moves_less() {
        let world = World::default();
        let mut bodies = vec![
            body(4.0, Vec3::ZERO, Vec3::ZERO, 0.5),
            body(2.0, Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 0.5),
        ];

        resolve(&mut bodies, &world, &mut Still);

        // overlap = 1, masses 64 and 8
        assert!((bodies[0].position.x - (-8.0 / 72.0)).abs() < 1e-5);
        assert!((bodies[1].position.x - (5.0 + 64.0 / 72.0)).abs() < 1e-5);
        let gap = (bodies[1].position - bodies[0].position).length();
        assert!(gap >= 6.0 - 1e-4);
    }

    #[test]
    fn test_separating_pair_keeps_velocity() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let va = Vec3::new(-1.0, 0.5, 0.0);
        let vb = Vec3::new(3.0, 0.0, -0.25);
        let mut bodies = vec![
            body(3.0, Vec3::ZERO, va, 0.9),
            body(3.0, Vec3::new(4.0, 0.0, 0.0), vb, 0.9),
        ];

        resolve(&mut bodies, &world, &mut rng);

        assert_eq!(bodies[0].velocity, va);
        assert_eq!(bodies[1].velocity, vb);
        assert_eq!(bodies[0].rotation, Vec3::ZERO);
        // Positional correction still applies
        let gap = (bodies[1].position - bodies[0].position).length();
        assert!(gap >= 6.0 - 1e-4);
    }

    #[test]
    fn test_restitution_uses_minimum() {
        let world = World::default();
        let mut bodies = vec![
            body(1.0, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.5),
            body(1.0, Vec3::new(1.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), 1.0),
        ];

        resolve(&mut bodies, &world, &mut Still);

        let rel = (bodies[1].velocity - bodies[0].velocity).x;
        assert!((rel - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_jitter_preserves_momentum_and_bounds_spin() {
        let world = World::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut bodies = vec![
            body(3.0, Vec3::ZERO, Vec3::new(1.0, -2.0, 0.5), 0.8),
            body(2.0, Vec3::new(4.0, 0.5, 0.0), Vec3::new(-3.0, 1.0, 0.0), 0.6),
        ];
        let before = total_momentum(&bodies);

        resolve(&mut bodies, &world, &mut rng);

        let after = total_momentum(&bodies);
        assert!((after - before).length() < 1e-3);
        for b in &bodies {
            assert!(b.rotation.y.abs() <= world.cosmetics.collision_spin);
            assert_eq!(b.rotation.x, 0.0);
        }
    }

    #[test]
    fn test_resolve_handles_empty_and_single() {
        let world = World::default();
        let mut none: Vec<Body> = Vec::new();
        assert_eq!(resolve(&mut none, &world, &mut Still), 0);

        let mut one = vec![body(1.0, Vec3::ZERO, Vec3::X, 1.0)];
        assert_eq!(resolve(&mut one, &world, &mut Still), 0);
        assert_eq!(one[0].velocity, Vec3::X);
    }

    fn vec3(range: f32) -> impl Strategy<Value = Vec3> {
        (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_pair_conserves_momentum_and_damps_normal_speed(
            ra in 0.5f32..5.0,
            rb in 0.5f32..5.0,
            ea in 0.1f32..=1.0,
            eb in 0.1f32..=1.0,
            offset in vec3(3.0),
            va in vec3(20.0),
            vb in vec3(20.0),
        ) {
            let world = World::default();
            let mut a = body(ra, Vec3::ZERO, va, ea);
            let mut b = body(rb, offset, vb, eb);

            let Some(contact) = detect(&a, &b) else {
                return Ok(());
            };
            let before = a.momentum() + b.momentum();
            let pre_normal = (b.velocity - a.velocity).dot(contact.normal);

            resolve_pair(&mut a, &mut b, &contact, &world, &mut Still);

            let after = a.momentum() + b.momentum();
            let scale = 1.0 + before.length() + a.mass() * va.length() + b.mass() * vb.length();
            prop_assert!((after - before).length() <= 1e-4 * scale);

            let post_normal = (b.velocity - a.velocity).dot(contact.normal);
            if pre_normal <= 0.0 {
                let e = ea.min(eb);
                prop_assert!((post_normal - (-e * pre_normal)).abs() <= 1e-3 * (1.0 + pre_normal.abs()));
            } else {
                prop_assert_eq!(a.velocity, va);
                prop_assert_eq!(b.velocity, vb);
            }

            // No residual overlap along the normal
            let gap = (b.position - a.position).length();
            prop_assert!(gap >= ra + rb - 1e-3);
        }
    }
}
