//! Random source for cosmetic perturbations
//!
//! Wobble, kicks and nudges never feed back into the deterministic parts of
//! the physics, so they go through this trait and tests can swap in `Still`.

use rand::Rng;
use rand_pcg::Pcg32;

/// Bounded symmetric random samples
pub trait Jitter {
    /// Uniform sample in `[-half_range, half_range)`, or 0 when the range is empty
    fn symmetric(&mut self, half_range: f32) -> f32;
}

impl Jitter for Pcg32 {
    fn symmetric(&mut self, half_range: f32) -> f32 {
        if half_range > 0.0 && half_range.is_finite() {
            self.random_range(-half_range..half_range)
        } else {
            0.0
        }
    }
}

/// Jitter that always returns zero
#[derive(Debug, Clone, Copy, Default)]
pub struct Still;

impl Jitter for Still {
    fn symmetric(&mut self, _half_range: f32) -> f32 {
        0.0
    }
}
