//! Static environment shared by every body
//!
//! Passed explicitly into the integrator and resolver so tests and parallel
//! scenes can run with different parameters.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Region along x where velocity is attenuated each frame (water)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DampingZone {
    /// Inclusive lower x bound
    pub min_x: f32,
    /// Exclusive upper x bound
    pub max_x: f32,
    /// Velocity multiplier applied once per update while inside
    pub factor: f32,
}

impl Default for DampingZone {
    fn default() -> Self {
        Self {
            min_x: WATER_MIN_X,
            max_x: WATER_MAX_X,
            factor: WATER_DAMPING,
        }
    }
}

impl DampingZone {
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.min_x && x < self.max_x
    }
}

/// Presentation-only constants (random wobble, kicks, squash and stretch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cosmetics {
    /// Half-range of the lateral velocity kick on floor bounce
    pub floor_kick: f32,
    /// Half-range of the x/z rotation wobble on floor bounce (radians)
    pub floor_wobble: f32,
    /// Half-range of the y rotation added on body-body contact (radians)
    pub collision_spin: f32,
    /// Half-range of the lateral nudge velocity on body-body contact
    pub collision_nudge: f32,
    /// Scale change per unit of vertical speed
    pub stretch_rate: f32,
    pub max_stretch: f32,
    pub min_squash: f32,
}

impl Default for Cosmetics {
    fn default() -> Self {
        Self {
            floor_kick: FLOOR_KICK,
            floor_wobble: FLOOR_WOBBLE,
            collision_spin: COLLISION_SPIN,
            collision_nudge: COLLISION_NUDGE,
            stretch_rate: STRETCH_RATE,
            max_stretch: MAX_STRETCH,
            min_squash: MIN_SQUASH,
        }
    }
}

impl Cosmetics {
    /// All randomness and squash/stretch disabled
    #[cfg(test)]
    pub(crate) fn none() -> Self {
        Self {
            floor_kick: 0.0,
            floor_wobble: 0.0,
            collision_spin: 0.0,
            collision_nudge: 0.0,
            stretch_rate: 0.0,
            max_stretch: 1.0,
            min_squash: 1.0,
        }
    }
}

/// World bounds and simulation constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    /// Height of the floor plane
    pub floor_y: f32,
    /// Bodies bounce when |x| or |z| exceeds this
    pub wall_bound: f32,
    pub damping_zone: DampingZone,
    pub gravity: f32,
    /// Fixed step applied per update
    pub time_step: f32,
    pub cosmetics: Cosmetics,
}

impl Default for World {
    fn default() -> Self {
        Self {
            floor_y: FLOOR_Y,
            wall_bound: WALL_BOUND,
            damping_zone: DampingZone::default(),
            gravity: GRAVITY,
            time_step: TIME_STEP,
            cosmetics: Cosmetics::default(),
        }
    }
}

impl World {
    /// Check every constant the integrator and resolver rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.floor_y.is_finite() {
            return Err(ConfigError::invalid("floor_y", "must be finite"));
        }
        if !(self.wall_bound.is_finite() && self.wall_bound > 0.0) {
            return Err(ConfigError::invalid(
                "wall_bound",
                format!("must be positive, got {}", self.wall_bound),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::invalid("gravity", "must be finite"));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::invalid(
                "time_step",
                format!("must be positive, got {}", self.time_step),
            ));
        }

        let zone = &self.damping_zone;
        if !(zone.min_x < zone.max_x) {
            return Err(ConfigError::invalid(
                "damping_zone",
                format!("empty interval [{}, {})", zone.min_x, zone.max_x),
            ));
        }
        if !(zone.factor > 0.0 && zone.factor <= 1.0) {
            return Err(ConfigError::invalid(
                "damping_zone.factor",
                format!("must be in (0, 1], got {}", zone.factor),
            ));
        }

        let c = &self.cosmetics;
        let ranges = [
            ("cosmetics.floor_kick", c.floor_kick),
            ("cosmetics.floor_wobble", c.floor_wobble),
            ("cosmetics.collision_spin", c.collision_spin),
            ("cosmetics.collision_nudge", c.collision_nudge),
            ("cosmetics.stretch_rate", c.stretch_rate),
        ];
        for (field, value) in ranges {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be non-negative, got {value}"),
                ));
            }
        }
        if !(c.max_stretch.is_finite() && c.max_stretch >= 1.0) {
            return Err(ConfigError::invalid(
                "cosmetics.max_stretch",
                format!("must be >= 1, got {}", c.max_stretch),
            ));
        }
        if !(c.min_squash > 0.0 && c.min_squash <= 1.0) {
            return Err(ConfigError::invalid(
                "cosmetics.min_squash",
                format!("must be in (0, 1], got {}", c.min_squash),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world_is_valid() {
        assert!(World::default().validate().is_ok());
    }

    #[test]
    fn test_damping_zone_half_open() {
        let zone = DampingZone {
            min_x: 20.0,
            max_x: 30.0,
            factor: 0.8,
        };
        assert!(zone.contains(20.0));
        assert!(zone.contains(29.9));
        assert!(!zone.contains(30.0));
        assert!(!zone.contains(19.9));
    }

    #[test]
    fn test_rejects_bad_time_step() {
        let world = World {
            time_step: 0.0,
            ..Default::default()
        };
        let err = world.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "time_step", .. }));
    }

    #[test]
    fn test_rejects_empty_damping_zone() {
        let world = World {
            damping_zone: DampingZone {
                min_x: 10.0,
                max_x: 10.0,
                factor: 0.5,
            },
            ..Default::default()
        };
        assert!(world.validate().is_err());
    }

    #[test]
    fn test_no_cosmetics_is_valid() {
        let world = World {
            cosmetics: Cosmetics::none(),
            ..Default::default()
        };
        assert!(world.validate().is_ok());
    }

    #[test]
    fn test_rejects_squash_above_one() {
        let mut world = World::default();
        world.cosmetics.min_squash = 1.5;
        assert!(world.validate().is_err());
    }
}
