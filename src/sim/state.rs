//! Game state and core simulation types
//!
//! Everything the simulation owns lives here. The whole world snapshots
//! through serde for debugging and determinism checks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::motion::{self, heading_vector};
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal. Asteroids and in-flight bullets keep moving
    GameOver,
}

/// Play field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl WorldConfig {
    /// Reject fields the wraparound rule cannot work in
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = self.width.is_finite() && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let min = 2.0 * AsteroidTier::Large.radius();
        if self.width < min || self.height < min {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
                min,
            });
        }
        Ok(())
    }

    /// Field extents as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Field center; the ship starts and respawns here
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Accumulated drift velocity; integration subtracts it
    pub vel: Vec2,
    /// Heading (radians)
    pub heading: f32,
    /// Thrust key held this tick
    pub thrusting: bool,
    /// Cleared for good once lives run out
    pub alive: bool,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            thrusting: false,
            alive: true,
        }
    }

    /// Nose position, on the retrograde side of the heading
    pub fn nose(&self) -> Vec2 {
        self.pos - polar_to_cartesian(SHIP_RADIUS, self.heading)
    }

    /// Turn one tick's worth in the given direction (+1 right, -1 left)
    pub fn steer(&mut self, dir: f32) {
        self.heading = normalize_angle(self.heading + SHIP_TURN_RATE * dir);
    }

    /// One tick of ship motion: thrust, wrap, damp, retrograde step
    ///
    /// The wrap runs before the position step, so a fast ship can sit
    /// slightly out of range until the next tick snaps it back.
    pub fn integrate(&mut self, bounds: Vec2) {
        if self.thrusting {
            self.vel += heading_vector(self.heading) * SHIP_THRUST;
        }
        self.pos = motion::wrap_position(self.pos, SHIP_RADIUS, bounds);
        self.vel *= SHIP_DAMPING;
        self.pos = motion::step_retrograde(self.pos, self.vel);
    }

    /// Send the ship back to the respawn point with no drift
    ///
    /// Heading survives a respawn; only position and velocity reset.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }
}

/// A fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Frozen at the ship's heading when fired
    pub heading: f32,
    /// Ticks since spawn
    pub age: u32,
    pub alive: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            heading,
            age: 0,
            alive: true,
        }
    }

    /// One tick of travel plus the wraparound snap
    pub fn integrate(&mut self, bounds: Vec2) {
        let delta = heading_vector(self.heading) * BULLET_SPEED;
        self.pos = motion::step_retrograde(self.pos, delta);
        self.pos = motion::wrap_position(self.pos, BULLET_RADIUS, bounds);
        self.age += 1;
    }

    /// True once the lifetime cap is reached
    pub fn expired(&self) -> bool {
        self.age >= BULLET_LIFETIME
    }
}

/// Asteroid size tiers; splitting walks Large -> Medium -> Small
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    /// Drawn radius; also the wraparound radius
    pub fn radius(self) -> f32 {
        match self {
            AsteroidTier::Large => 50.0,
            AsteroidTier::Medium => 25.0,
            AsteroidTier::Small => 15.0,
        }
    }

    /// Hit circle, slightly inside the drawn outline
    pub fn collision_radius(self) -> f32 {
        match self {
            AsteroidTier::Large => 46.0,
            AsteroidTier::Medium => 22.0,
            AsteroidTier::Small => 12.0,
        }
    }

    /// Tier of the two children a hit produces; None destroys outright
    pub fn split(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Drift direction, fixed at spawn (radians)
    pub heading: f32,
    pub tier: AsteroidTier,
    pub alive: bool,
}

impl Asteroid {
    pub fn new(pos: Vec2, heading: f32, tier: AsteroidTier) -> Self {
        Self {
            pos,
            heading,
            tier,
            alive: true,
        }
    }

    /// One tick of drift plus the wraparound snap
    pub fn integrate(&mut self, bounds: Vec2) {
        let delta = heading_vector(self.heading) * ASTEROID_SPEED;
        self.pos = motion::step_prograde(self.pos, delta);
        self.pos = motion::wrap_position(self.pos, self.tier.radius(), bounds);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Play field dimensions
    pub config: WorldConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG; all randomness flows through it
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    /// Only ever increases
    pub score: u64,
    /// Only ever decreases; floors at zero
    pub lives: u8,
}

impl World {
    /// Create a world with a freshly seeded asteroid field
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship: Ship::new(config.center()),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
        };
        world.spawn_field();
        Ok(world)
    }

    /// Seed the initial asteroid field at whole-pixel positions
    fn spawn_field(&mut self) {
        for _ in 0..INITIAL_ASTEROIDS {
            let pos = Vec2::new(
                self.rng.random_range(0.0..self.config.width).floor(),
                self.rng.random_range(0.0..self.config.height).floor(),
            );
            let heading = self.rng.random_range(0.0..std::f32::consts::TAU);
            self.asteroids
                .push(Asteroid::new(pos, heading, AsteroidTier::Large));
        }
        log::info!(
            "seeded field: {} asteroids (seed {})",
            self.asteroids.len(),
            self.seed
        );
    }

    /// Fire a bullet from the ship's nose along its current heading
    pub fn spawn_bullet(&mut self) {
        self.bullets
            .push(Bullet::new(self.ship.nose(), self.ship.heading));
    }

    /// Draw a fresh drift direction for a split child
    pub fn random_heading(&mut self) -> f32 {
        self.rng.random_range(0.0..std::f32::consts::TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_seeds_full_field() {
        let world = World::new(WorldConfig::default(), 7).unwrap();
        assert_eq!(world.asteroids.len(), INITIAL_ASTEROIDS);
        assert!(world.asteroids.iter().all(|a| a.tier == AsteroidTier::Large));
        assert!(world.bullets.is_empty());
        assert_eq!(world.lives, STARTING_LIVES);
        assert_eq!(world.score, 0);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.ship.pos, Vec2::new(700.0, 400.0));
        assert!(world.ship.alive);
    }

    #[test]
    fn test_spawn_positions_are_whole_pixels_inside_field() {
        let world = World::new(WorldConfig::default(), 99).unwrap();
        for a in &world.asteroids {
            assert!(a.pos.x >= 0.0 && a.pos.x < FIELD_WIDTH);
            assert!(a.pos.y >= 0.0 && a.pos.y < FIELD_HEIGHT);
            assert_eq!(a.pos.x, a.pos.x.floor());
            assert_eq!(a.pos.y, a.pos.y.floor());
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = World::new(WorldConfig::default(), 42).unwrap();
        let b = World::new(WorldConfig::default(), 42).unwrap();
        for (x, y) in a.asteroids.iter().zip(&b.asteroids) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.heading, y.heading);
        }
    }

    #[test]
    fn test_tier_table() {
        assert_eq!(AsteroidTier::Large.radius(), 50.0);
        assert_eq!(AsteroidTier::Large.collision_radius(), 46.0);
        assert_eq!(AsteroidTier::Large.split(), Some(AsteroidTier::Medium));
        assert_eq!(AsteroidTier::Medium.radius(), 25.0);
        assert_eq!(AsteroidTier::Medium.collision_radius(), 22.0);
        assert_eq!(AsteroidTier::Medium.split(), Some(AsteroidTier::Small));
        assert_eq!(AsteroidTier::Small.radius(), 15.0);
        assert_eq!(AsteroidTier::Small.collision_radius(), 12.0);
        assert_eq!(AsteroidTier::Small.split(), None);
    }

    #[test]
    fn test_config_validation() {
        assert!(WorldConfig::default().validate().is_ok());

        let zero = WorldConfig {
            width: 0.0,
            height: 800.0,
        };
        assert_eq!(
            zero.validate(),
            Err(ConfigError::InvalidDimensions {
                width: 0.0,
                height: 800.0
            })
        );

        let nan = WorldConfig {
            width: f32::NAN,
            height: 800.0,
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));

        let negative = WorldConfig {
            width: 1400.0,
            height: -1.0,
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));

        // Narrower than the diameter of a Large asteroid
        let tiny = WorldConfig {
            width: 90.0,
            height: 800.0,
        };
        assert!(matches!(
            tiny.validate(),
            Err(ConfigError::FieldTooSmall { .. })
        ));
    }

    #[test]
    fn test_world_new_rejects_bad_config() {
        let bad = WorldConfig {
            width: -5.0,
            height: -5.0,
        };
        assert!(World::new(bad, 1).is_err());
    }

    #[test]
    fn test_nose_sits_retrograde_of_heading() {
        let ship = Ship::new(Vec2::new(700.0, 400.0));
        // heading 0 puts the nose on the -x side
        let nose = ship.nose();
        assert!((nose.x - 685.0).abs() < 1e-4);
        assert!((nose.y - 400.0).abs() < 1e-4);
    }

    #[test]
    fn test_ship_thrust_accumulates_and_damps() {
        let bounds = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
        let mut ship = Ship::new(Vec2::new(700.0, 400.0));
        ship.thrusting = true;
        ship.integrate(bounds);
        // thrust lands before damping, so one tick leaves 0.1 * 0.99
        assert!((ship.vel.x - 0.099).abs() < 1e-6);
        assert!(ship.pos.x < 700.0);

        ship.thrusting = false;
        let vx = ship.vel.x;
        ship.integrate(bounds);
        assert!((ship.vel.x - vx * SHIP_DAMPING).abs() < 1e-6);
    }

    #[test]
    fn test_ship_parked_out_of_range_snaps_back() {
        let bounds = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
        let mut ship = Ship::new(Vec2::new(5.0, 400.0));
        ship.integrate(bounds);
        assert_eq!(ship.pos.x, FIELD_WIDTH);
    }

    #[test]
    fn test_steer_direction() {
        let mut ship = Ship::new(Vec2::new(700.0, 400.0));
        ship.steer(1.0);
        assert!((ship.heading - SHIP_TURN_RATE).abs() < 1e-6);
        ship.steer(-1.0);
        ship.steer(-1.0);
        assert!((ship.heading + SHIP_TURN_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_bullet_travels_retrograde_wraps_and_ages() {
        let bounds = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
        // heading 0 moves toward -x; park just inside the near edge
        let mut bullet = Bullet::new(Vec2::new(4.0, 400.0), 0.0);
        bullet.integrate(bounds);
        // stepped to -1, then snapped to the far extent
        assert_eq!(bullet.pos.x, FIELD_WIDTH);
        assert_eq!(bullet.age, 1);
    }

    #[test]
    fn test_bullet_expires_at_lifetime() {
        let mut bullet = Bullet::new(Vec2::new(700.0, 400.0), 1.0);
        assert!(!bullet.expired());
        bullet.age = BULLET_LIFETIME;
        assert!(bullet.expired());
    }

    #[test]
    fn test_asteroid_advances_prograde_and_wraps() {
        let bounds = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
        let mut asteroid = Asteroid::new(Vec2::new(100.0, 100.0), 0.0, AsteroidTier::Large);
        asteroid.integrate(bounds);
        assert!((asteroid.pos.x - 101.0).abs() < 1e-4);

        // past the far edge: one step, then the snap pulls it to the radius
        let mut edge = Asteroid::new(
            Vec2::new(FIELD_WIDTH + 0.5, 100.0),
            0.0,
            AsteroidTier::Large,
        );
        edge.integrate(bounds);
        assert_eq!(edge.pos.x, AsteroidTier::Large.radius());
    }

    #[test]
    fn test_spawn_bullet_starts_at_nose() {
        let mut world = World::new(WorldConfig::default(), 3).unwrap();
        world.spawn_bullet();
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].pos, world.ship.nose());
        assert_eq!(world.bullets[0].heading, world.ship.heading);
    }
}
