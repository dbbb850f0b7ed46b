//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by collection index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod error;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{BulletHit, circle_overlap, collect_bullet_hits, ship_overlaps};
pub use error::ConfigError;
pub use motion::{heading_vector, step_prograde, step_retrograde, wrap_axis, wrap_position};
pub use state::{Asteroid, AsteroidTier, Bullet, GamePhase, Ship, World, WorldConfig};
pub use tick::{TickInput, tick};
