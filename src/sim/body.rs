//! Simulated sphere
//!
//! Radius, mass and restitution are fixed at construction; position and
//! velocity are mutated every frame by the integrator and the resolver.

use glam::Vec3;
use serde::Serialize;

use crate::error::BodyError;

/// A bouncing sphere
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    radius: f32,
    mass: f32,
    restitution: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Accumulated Euler angles, cosmetic only
    pub rotation: Vec3,
    /// Squash/stretch factors derived from vertical speed, cosmetic only
    pub visual_scale: Vec3,
    /// Linear RGB
    pub color: [f32; 3],
}

impl Body {
    /// Create a body, rejecting radius/restitution values the physics can't use
    pub fn new(
        radius: f32,
        position: Vec3,
        velocity: Vec3,
        restitution: f32,
    ) -> Result<Self, BodyError> {
        let Some(mass) = mass_for_radius(radius) else {
            return Err(BodyError::InvalidRadius(radius));
        };
        if !(restitution > 0.0 && restitution <= 1.0) {
            return Err(BodyError::InvalidRestitution(restitution));
        }

        Ok(Self {
            radius,
            mass,
            restitution,
            position,
            velocity,
            rotation: Vec3::ZERO,
            visual_scale: Vec3::ONE,
            color: [1.0, 1.0, 1.0],
        })
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Volume-proportional mass, `radius^3`
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    #[inline]
    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Lowest point of the sphere
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.radius
    }
}

/// `radius^3`, or `None` when the radius or the mass it implies leaves normal
/// f32 range (zero, subnormal or infinite mass)
pub fn mass_for_radius(radius: f32) -> Option<f32> {
    if !(radius.is_finite() && radius > 0.0) {
        return None;
    }
    let mass = radius.powi(3);
    (mass.is_finite() && mass >= f32::MIN_POSITIVE).then_some(mass)
}
