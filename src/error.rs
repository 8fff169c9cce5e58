//! Errors raised while building bodies or loading scene configuration.
//!
//! The per-frame simulation itself never fails; everything here is caught
//! before a body or world reaches it.

use thiserror::Error;

/// A body record that would break the radius/restitution invariants.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("restitution must be in (0, 1], got {0}")]
    InvalidRestitution(f32),
}

/// Errors from loading or validating scene settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds a value the simulation cannot run with.
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Body(#[from] BodyError),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
