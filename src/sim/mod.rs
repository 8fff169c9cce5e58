//! Simulation module
//!
//! All physics lives here. Per frame:
//! - `integrator::update` on every body (order-insensitive)
//! - `collision::resolve` once over the whole set
//!
//! Cosmetic randomness goes through `Jitter`; nothing here renders.

pub mod body;
pub mod collision;
pub mod integrator;
pub mod jitter;
pub mod scene;
pub mod world;

pub use body::Body;
pub use collision::{Contact, detect, resolve, resolve_pair};
pub use integrator::{squash_stretch, update};
pub use jitter::{Jitter, Still};
pub use scene::Scene;
pub use world::{Cosmetics, DampingZone, World};
