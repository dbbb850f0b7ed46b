//! Astro Rocks - A classic wraparound asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, all motion constants are per-tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 1400.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Ship visual radius; also the wraparound radius
    pub const SHIP_RADIUS: f32 = 15.0;
    /// Ship hit circle, smaller than the drawn triangle
    pub const SHIP_COLLISION_RADIUS: f32 = 11.0;
    /// Thrust acceleration (pixels/tick²)
    pub const SHIP_THRUST: f32 = 0.1;
    /// Velocity damping factor applied every tick
    pub const SHIP_DAMPING: f32 = 0.99;
    /// Turn rate while a rotate key is held (radians/tick)
    pub const SHIP_TURN_RATE: f32 = 0.0573;

    /// Bullet travel speed (pixels/tick)
    pub const BULLET_SPEED: f32 = 5.0;
    /// Bullet hit and wraparound radius
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Rendered bullet quad edge (pixels)
    pub const BULLET_SIZE: f32 = 4.0;
    /// Ticks before an unspent bullet is culled
    pub const BULLET_LIFETIME: u32 = 300;

    /// Asteroid drift speed, same for every tier (pixels/tick)
    pub const ASTEROID_SPEED: f32 = 1.0;
    /// Asteroids seeded into a fresh field
    pub const INITIAL_ASTEROIDS: usize = 8;
    /// Child spawn offset from the parent center on a split (pixels)
    pub const SPLIT_OFFSET: f32 = 5.0;

    /// Points per destroyed asteroid, any tier
    pub const ASTEROID_SCORE: u64 = 20;
    pub const STARTING_LIVES: u8 = 3;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
