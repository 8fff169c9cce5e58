//! Ballpit - bouncing spheres in a walled box with a water zone
//!
//! Core modules:
//! - `sim`: Simulation core (integration, boundaries, pairwise collisions, scene)
//! - `render`: Per-body instance records read back by the drawing layer
//! - `settings`: Data-driven scene configuration
//! - `error`: Construction and configuration errors

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{BodyError, ConfigError};
pub use render::BodyInstance;
pub use settings::Settings;

/// Scene configuration defaults
pub mod consts {
    /// Simulation step per animation frame (coarse, tolerated by the bounded box)
    pub const TIME_STEP: f32 = 0.25;
    /// Downward acceleration
    pub const GRAVITY: f32 = 9.8;

    /// World bounds
    pub const FLOOR_Y: f32 = -10.0;
    pub const WALL_BOUND: f32 = 50.0;

    /// Water region along x, [min, max)
    pub const WATER_MIN_X: f32 = 20.0;
    pub const WATER_MAX_X: f32 = 500.0;
    /// Velocity multiplier applied each frame inside the water region
    pub const WATER_DAMPING: f32 = 0.8;

    /// Body defaults
    pub const BODY_COUNT: usize = 20;
    pub const MIN_RADIUS: f32 = 2.0;
    pub const MAX_RADIUS: f32 = 6.0;
    pub const MIN_RESTITUTION: f32 = 0.6;
    pub const MAX_RESTITUTION: f32 = 0.9;
    /// Spawn height range above the floor
    pub const SPAWN_HEIGHT: f32 = 40.0;
    pub const MAX_SPAWN_SPEED: f32 = 4.0;

    /// Cosmetic perturbations (no physical feedback)
    pub const FLOOR_KICK: f32 = 1.0;
    pub const FLOOR_WOBBLE: f32 = 0.2;
    pub const COLLISION_SPIN: f32 = 0.2;
    pub const COLLISION_NUDGE: f32 = 0.1;

    /// Squash and stretch
    pub const STRETCH_RATE: f32 = 0.05;
    pub const MAX_STRETCH: f32 = 1.3;
    pub const MIN_SQUASH: f32 = 0.8;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}
