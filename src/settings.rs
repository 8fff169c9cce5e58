//! Scene settings
//!
//! Loaded from JSON; any missing field falls back to `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::World;
use crate::sim::body::mass_for_radius;

/// Scene construction parameters plus the world they run in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for spawning and cosmetic jitter
    pub seed: u64,
    /// Number of live bodies
    pub body_count: usize,

    // === Spawn ranges ===
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_restitution: f32,
    pub max_restitution: f32,
    /// Spawn height range above the floor
    pub spawn_height: f32,
    /// Max horizontal speed per axis at spawn
    pub max_spawn_speed: f32,

    pub world: World,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            body_count: BODY_COUNT,

            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_restitution: MIN_RESTITUTION,
            max_restitution: MAX_RESTITUTION,
            spawn_height: SPAWN_HEIGHT,
            max_spawn_speed: MAX_SPAWN_SPEED,

            world: World::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;

        if mass_for_radius(self.min_radius).is_none() {
            return Err(ConfigError::invalid(
                "min_radius",
                format!("must be positive with a finite mass, got {}", self.min_radius),
            ));
        }
        if mass_for_radius(self.max_radius).is_none() {
            return Err(ConfigError::invalid(
                "max_radius",
                format!("must be positive with a finite mass, got {}", self.max_radius),
            ));
        }
        if self.max_radius < self.min_radius {
            return Err(ConfigError::invalid(
                "max_radius",
                format!("must be >= min_radius, got {}", self.max_radius),
            ));
        }
        if !(self.min_restitution > 0.0 && self.min_restitution <= 1.0) {
            return Err(ConfigError::invalid(
                "min_restitution",
                format!("must be in (0, 1], got {}", self.min_restitution),
            ));
        }
        if !(self.max_restitution >= self.min_restitution && self.max_restitution <= 1.0) {
            return Err(ConfigError::invalid(
                "max_restitution",
                format!("must be in [min_restitution, 1], got {}", self.max_restitution),
            ));
        }
        if !(self.spawn_height.is_finite() && self.spawn_height >= 0.0) {
            return Err(ConfigError::invalid("spawn_height", "must be non-negative"));
        }
        if !(self.max_spawn_speed.is_finite() && self.max_spawn_speed >= 0.0) {
            return Err(ConfigError::invalid("max_spawn_speed", "must be non-negative"));
        }

        Ok(())
    }
}
