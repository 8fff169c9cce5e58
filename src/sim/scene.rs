//! Scene: the live body set plus its world and RNG
//!
//! Owns body creation and removal. Each `step` integrates every body and
//! then resolves contacts across the whole set.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::world::World;
use super::{collision, integrator};
use crate::error::{BodyError, ConfigError};
use crate::render::BodyInstance;
use crate::settings::Settings;

/// All bodies in play and the state needed to advance them
#[derive(Debug, Clone)]
pub struct Scene {
    settings: Settings,
    bodies: Vec<Body>,
    rng: Pcg32,
    frame: u64,
}

impl Scene {
    /// Validate settings and spawn `settings.body_count` random bodies
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut scene = Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            bodies: Vec::with_capacity(settings.body_count),
            settings,
            frame: 0,
        };
        scene.set_body_count(scene.settings.body_count)?;

        log::info!(
            "Scene created: seed={}, bodies={}, wall_bound={}, floor_y={}",
            scene.settings.seed,
            scene.bodies.len(),
            scene.settings.world.wall_bound,
            scene.settings.world.floor_y
        );

        Ok(scene)
    }

    /// Build a scene around an explicit body list (no random spawning)
    pub fn with_bodies(settings: Settings, bodies: Vec<Body>) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            bodies,
            settings,
            frame: 0,
        })
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.settings.world
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for collaborators that move bodies between frames (dragging)
    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Frames stepped so far
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame: integrate every body, then resolve all contacts
    ///
    /// Returns the number of contacts resolved.
    pub fn step(&mut self) -> usize {
        let world = self.settings.world;

        for body in &mut self.bodies {
            integrator::update(body, &world, &mut self.rng);
        }
        let contacts = collision::resolve(&mut self.bodies, &world, &mut self.rng);

        self.frame += 1;
        contacts
    }

    /// Grow or shrink the body set; removal drops the newest bodies first
    pub fn set_body_count(&mut self, count: usize) -> Result<(), BodyError> {
        let before = self.bodies.len();
        if count < before {
            self.bodies.truncate(count);
        } else {
            self.bodies.reserve(count - before);
            while self.bodies.len() < count {
                let body = self.spawn_body()?;
                self.bodies.push(body);
            }
        }
        self.settings.body_count = count;

        if count != before {
            log::debug!("Body count {} -> {}", before, count);
        }
        Ok(())
    }

    /// Create a random body inside the box, above the floor
    ///
    /// Does not add it to the scene.
    pub fn spawn_body(&mut self) -> Result<Body, BodyError> {
        let s = &self.settings;
        let world = &s.world;

        let radius = sample(&mut self.rng, s.min_radius, s.max_radius);
        let restitution = sample(&mut self.rng, s.min_restitution, s.max_restitution);

        let lateral = (world.wall_bound - radius).max(0.0);
        let position = Vec3::new(
            sample(&mut self.rng, -lateral, lateral),
            world.floor_y + radius + sample(&mut self.rng, 0.0, s.spawn_height),
            sample(&mut self.rng, -lateral, lateral),
        );
        let speed = s.max_spawn_speed;
        let velocity = Vec3::new(
            sample(&mut self.rng, -speed, speed),
            0.0,
            sample(&mut self.rng, -speed, speed),
        );
        let color = random_color(&mut self.rng);

        Ok(Body::new(radius, position, velocity, restitution)?.with_color(color))
    }

    /// Sum of mass-weighted velocities
    pub fn momentum(&self) -> Vec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Per-body render records, in body order
    pub fn instances(&self) -> Vec<BodyInstance> {
        self.bodies.iter().map(BodyInstance::from_body).collect()
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty
fn sample(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Saturated color from a random hue
fn random_color(rng: &mut Pcg32) -> [f32; 3] {
    let hue = rng.random::<f32>() * 6.0;
    let x = 1.0 - (hue % 2.0 - 1.0).abs();
    match hue as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    }
}
